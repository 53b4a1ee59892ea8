use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};
use constants::hotspot::CLICK_DRAG_THRESHOLD;

use super::hit_tester::{HitTester, HoverChange};
use super::navigation::BrowserNavigator;
use super::ray::{CameraView, RayProjector};

/// Hover and click notifications for other systems (labels, RPC bridge).
#[derive(Event, Debug, Clone, PartialEq)]
pub enum HotspotEvent {
    HoverChanged { id: Option<String> },
    Clicked { id: String, url: Option<String> },
}

/// Tracks a left-button press so orbit drags are not treated as clicks.
#[derive(Resource, Default)]
pub struct PointerGesture {
    press_position: Option<Vec2>,
    travelled: f32,
}

impl PointerGesture {
    pub fn press(&mut self, position: Vec2) {
        self.press_position = Some(position);
        self.travelled = 0.0;
    }

    pub fn track(&mut self, position: Vec2) {
        if let Some(start) = self.press_position {
            self.travelled = self.travelled.max(start.distance(position));
        }
    }

    /// Ends the gesture; true when it stayed within the click threshold.
    pub fn release(&mut self) -> bool {
        let was_click = self.press_position.is_some() && self.travelled <= CLICK_DRAG_THRESHOLD;
        self.press_position = None;
        self.travelled = 0.0;
        was_click
    }

    pub fn cancel(&mut self) {
        self.press_position = None;
        self.travelled = 0.0;
    }
}

/// Ray source for pointer input and the logical viewport it covers.
#[derive(Resource, Default)]
pub struct PointerView {
    projector: Option<Box<dyn RayProjector + Send + Sync>>,
    viewport: Rect,
}

impl PointerView {
    pub fn set(&mut self, projector: impl RayProjector + Send + Sync + 'static, viewport: Rect) {
        self.projector = Some(Box::new(projector));
        self.viewport = viewport;
    }

    pub fn clear(&mut self) {
        self.projector = None;
        self.viewport = Rect::default();
    }

    /// Projector, viewport-relative pointer and viewport size for a window
    /// cursor position. `None` when the cursor is outside the viewport.
    pub fn locate(&self, cursor: Vec2) -> Option<(&(dyn RayProjector + Send + Sync), Vec2, Vec2)> {
        let projector = self.projector.as_deref()?;
        if self.viewport.is_empty() || !self.viewport.contains(cursor) {
            return None;
        }
        Some((projector, cursor - self.viewport.min, self.viewport.size()))
    }
}

/// Snapshots the 3D camera for this frame's pointer handling.
pub fn capture_pointer_view(
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut view: ResMut<PointerView>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        view.clear();
        return;
    };
    match camera.logical_viewport_rect() {
        Some(rect) => view.set(CameraView::from_camera(camera, camera_transform), rect),
        None => view.clear(),
    }
}

fn hover_event(hit_tester: &HitTester, change: HoverChange) -> HotspotEvent {
    HotspotEvent::HoverChanged {
        id: change
            .current
            .and_then(|index| hit_tester.volumes().get(index))
            .map(|volume| volume.id.clone()),
    }
}

/// Feeds cursor moves, leaves and clicks on the primary window into the hit tester.
pub fn handle_hotspot_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    view: Res<PointerView>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut cursor_left: EventReader<CursorLeft>,
    mut gesture: ResMut<PointerGesture>,
    mut hit_tester: ResMut<HitTester>,
    mut hotspot_events: EventWriter<HotspotEvent>,
) {
    let left_window = cursor_left.read().count() > 0;
    let mut moved = false;
    for event in cursor_moved.read() {
        gesture.track(event.position);
        moved = true;
    }

    // A leave followed by re-entry in the same frame is resolved by where the cursor ends up.
    let cursor = windows.single().ok().and_then(Window::cursor_position);
    let located = cursor.and_then(|position| view.locate(position));

    if left_window {
        gesture.cancel();
    }
    if left_window || (moved && located.is_none()) {
        if let Some(change) = hit_tester.on_pointer_leave() {
            hotspot_events.write(hover_event(&hit_tester, change));
        }
    }

    let (Some(cursor), Some((projector, pointer, viewport))) = (cursor, located) else {
        return;
    };

    if moved {
        if let Some(change) = hit_tester.on_pointer_move(projector, pointer, viewport) {
            hotspot_events.write(hover_event(&hit_tester, change));
        }
    }

    if buttons.just_pressed(MouseButton::Left) {
        gesture.press(cursor);
    }

    if buttons.just_released(MouseButton::Left) && gesture.release() {
        let outcome = hit_tester.on_click(projector, pointer, viewport, &mut BrowserNavigator);

        if let Some(volume) = outcome.hit.and_then(|index| hit_tester.volumes().get(index)) {
            info!("Hotspot clicked: {}", volume.id);
            hotspot_events.write(HotspotEvent::Clicked {
                id: volume.id.clone(),
                url: outcome.navigated_to.clone(),
            });
        }
        if let Some(change) = outcome.hover_cleared {
            hotspot_events.write(hover_event(&hit_tester, change));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotspots::volume::{HotspotDefinition, HotspotVolume};
    use bevy::ecs::system::RunSystemOnce;

    const VIEWPORT: Vec2 = Vec2::new(200.0, 200.0);

    /// Rays along -Z; the viewport spans world x in [-1, 1] and y in [0.2, 2.2].
    struct FrontView;

    impl RayProjector for FrontView {
        fn ndc_to_ray(&self, ndc: Vec2) -> Option<Ray3d> {
            let xy = Vec2::new(0.0, 1.2) + ndc;
            Some(Ray3d::new(xy.extend(10.0), Dir3::NEG_Z))
        }
    }

    /// Window position whose ray passes through world `(x, y)`.
    fn pointer_at(x: f32, y: f32) -> Vec2 {
        let ndc = Vec2::new(x, y - 1.2);
        Vec2::new((ndc.x + 1.0) * 0.5 * VIEWPORT.x, (1.0 - ndc.y) * 0.5 * VIEWPORT.y)
    }

    fn pointer_world() -> (World, Entity) {
        let mut world = World::new();
        let volumes = HotspotDefinition::defaults()
            .iter()
            .map(|definition| HotspotVolume::new(definition, &GlobalTransform::IDENTITY))
            .collect();
        let mut hit_tester = HitTester::default();
        hit_tester.initialize(volumes).expect("initialise");
        world.insert_resource(hit_tester);

        let mut view = PointerView::default();
        view.set(FrontView, Rect::from_corners(Vec2::ZERO, VIEWPORT));
        world.insert_resource(view);

        world.init_resource::<PointerGesture>();
        world.init_resource::<ButtonInput<MouseButton>>();
        world.init_resource::<Events<CursorMoved>>();
        world.init_resource::<Events<CursorLeft>>();
        world.init_resource::<Events<HotspotEvent>>();

        let window = world.spawn((Window::default(), PrimaryWindow)).id();
        (world, window)
    }

    fn move_cursor(world: &mut World, window: Entity, position: Vec2) {
        world
            .get_mut::<Window>(window)
            .expect("window")
            .set_cursor_position(Some(position));
        world.send_event(CursorMoved {
            window,
            position,
            delta: None,
        });
    }

    fn leave_window(world: &mut World, window: Entity) {
        world
            .get_mut::<Window>(window)
            .expect("window")
            .set_cursor_position(None);
        world.send_event(CursorLeft { window });
    }

    /// Runs the pointer system once, then clears this frame's input.
    fn step(world: &mut World) -> Vec<HotspotEvent> {
        world
            .run_system_once(handle_hotspot_pointer)
            .expect("system runs");

        world.resource_mut::<Events<CursorMoved>>().clear();
        world.resource_mut::<Events<CursorLeft>>().clear();
        world.resource_mut::<ButtonInput<MouseButton>>().clear();
        world
            .resource_mut::<Events<HotspotEvent>>()
            .drain()
            .collect()
    }

    fn hovered_id(world: &World) -> Option<String> {
        world.resource::<HitTester>().hovered().map(|volume| volume.id.clone())
    }

    #[test]
    fn cursor_leaving_window_clears_hover() {
        let (mut world, window) = pointer_world();

        move_cursor(&mut world, window, pointer_at(0.0, 1.66));
        let events = step(&mut world);
        assert_eq!(hovered_id(&world).as_deref(), Some("head"));
        assert_eq!(
            events,
            vec![HotspotEvent::HoverChanged { id: Some("head".to_string()) }]
        );

        leave_window(&mut world, window);
        let events = step(&mut world);
        assert_eq!(hovered_id(&world), None);
        assert_eq!(events, vec![HotspotEvent::HoverChanged { id: None }]);
        let head = &world.resource::<HitTester>().volumes()[0];
        assert_eq!(head.color(), head.base_color);
    }

    #[test]
    fn leave_and_reentry_in_one_frame_rehovers() {
        let (mut world, window) = pointer_world();

        move_cursor(&mut world, window, pointer_at(0.0, 1.66));
        step(&mut world);

        leave_window(&mut world, window);
        move_cursor(&mut world, window, pointer_at(0.0, 1.2));
        step(&mut world);
        assert_eq!(hovered_id(&world).as_deref(), Some("torso"));
    }

    #[test]
    fn cursor_outside_viewport_counts_as_leave() {
        let (mut world, window) = pointer_world();

        move_cursor(&mut world, window, pointer_at(0.0, 1.66));
        step(&mut world);

        move_cursor(&mut world, window, Vec2::new(500.0, 100.0));
        step(&mut world);
        assert_eq!(hovered_id(&world), None);
    }

    #[test]
    fn drag_past_threshold_does_not_click() {
        let (mut world, window) = pointer_world();
        let head = pointer_at(0.0, 1.66);

        move_cursor(&mut world, window, head);
        step(&mut world);

        world
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        step(&mut world);

        move_cursor(&mut world, window, head + Vec2::new(60.0, 0.0));
        step(&mut world);
        move_cursor(&mut world, window, head);
        step(&mut world);

        world
            .resource_mut::<ButtonInput<MouseButton>>()
            .release(MouseButton::Left);
        let events = step(&mut world);

        assert!(
            !events
                .iter()
                .any(|event| matches!(event, HotspotEvent::Clicked { .. }))
        );
        assert_eq!(hovered_id(&world).as_deref(), Some("head"));
    }

    #[test]
    fn short_click_reports_target_and_clears_hover() {
        let (mut world, window) = pointer_world();
        let torso = pointer_at(0.0, 1.2);

        move_cursor(&mut world, window, torso);
        step(&mut world);

        world
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        step(&mut world);
        move_cursor(&mut world, window, torso + Vec2::new(1.0, 1.0));
        step(&mut world);
        world
            .resource_mut::<ButtonInput<MouseButton>>()
            .release(MouseButton::Left);
        let events = step(&mut world);

        assert_eq!(
            events,
            vec![
                HotspotEvent::Clicked {
                    id: "torso".to_string(),
                    url: Some("https://example.com/torso".to_string()),
                },
                HotspotEvent::HoverChanged { id: None },
            ]
        );
        assert_eq!(hovered_id(&world), None);
    }

    #[test]
    fn locate_is_relative_to_viewport_origin() {
        let mut view = PointerView::default();
        assert!(view.locate(Vec2::new(10.0, 10.0)).is_none());

        view.set(FrontView, Rect::new(100.0, 50.0, 300.0, 250.0));
        let (_, pointer, size) = view.locate(Vec2::new(150.0, 60.0)).expect("inside");
        assert_eq!(pointer, Vec2::new(50.0, 10.0));
        assert_eq!(size, Vec2::new(200.0, 200.0));
        assert!(view.locate(Vec2::new(20.0, 60.0)).is_none());
    }

    #[test]
    fn short_press_counts_as_click() {
        let mut gesture = PointerGesture::default();
        gesture.press(Vec2::new(100.0, 100.0));
        gesture.track(Vec2::new(102.0, 101.0));
        assert!(gesture.release());
    }

    #[test]
    fn drag_beyond_threshold_is_not_a_click() {
        let mut gesture = PointerGesture::default();
        gesture.press(Vec2::new(100.0, 100.0));
        gesture.track(Vec2::new(160.0, 100.0));
        // Returning to the start does not turn an orbit drag back into a click.
        gesture.track(Vec2::new(100.0, 100.0));
        assert!(!gesture.release());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut gesture = PointerGesture::default();
        assert!(!gesture.release());

        gesture.press(Vec2::ZERO);
        gesture.cancel();
        assert!(!gesture.release());
    }
}
