use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::render_settings::{
    CAMERA_START_POSITION, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED, ORBIT_TARGET,
};
use std::f32::consts::PI;

/// Rotate-only orbit around a fixed target. Zoom, pan and damping are off.
#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Angle around Y, measured from +Z towards +X.
    pub azimuth: f32,
    /// Angle from +Y.
    pub polar: f32,
    pub rotate_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_position(CAMERA_START_POSITION, ORBIT_TARGET)
    }
}

impl OrbitCamera {
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length();
        let polar = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            PI * 0.5
        };

        Self {
            target,
            radius,
            azimuth: offset.x.atan2(offset.z),
            polar: polar.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON),
            rotate_speed: ORBIT_ROTATE_SPEED,
        }
    }

    /// Applies a pointer drag. A drag across the full viewport height turns by `rotate_speed`.
    pub fn rotate(&mut self, drag: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.azimuth -= self.rotate_speed * drag.x / viewport_height;
        self.polar = (self.polar - self.rotate_speed * drag.y / viewport_height)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
    }

    pub fn position(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_polar * self.azimuth.sin(),
                    self.polar.cos(),
                    sin_polar * self.azimuth.cos(),
                )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        let Ok(window) = windows.single() else {
            return;
        };
        orbit.rotate(mouse_delta, window.height());
    }

    if !orbit.is_changed() {
        return;
    }
    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_round_trips() {
        let orbit = OrbitCamera::default();
        assert!(orbit.position().distance(CAMERA_START_POSITION) < 1e-4);
        assert!((orbit.radius - CAMERA_START_POSITION.length()).abs() < 1e-5);
    }

    #[test]
    fn horizontal_drag_keeps_radius_and_height() {
        let mut orbit = OrbitCamera::default();
        let before = orbit.position();
        orbit.rotate(Vec2::new(150.0, 0.0), 600.0);
        let after = orbit.position();

        assert!((after.length() - before.length()).abs() < 1e-4);
        assert!((after.y - before.y).abs() < 1e-4);
        assert!(after.x < 0.0, "dragging right swings the camera to -X");
    }

    #[test]
    fn full_height_drag_turns_once() {
        let mut orbit = OrbitCamera::default();
        let azimuth = orbit.azimuth;
        orbit.rotate(Vec2::new(600.0, 0.0), 600.0);
        assert!((orbit.azimuth - (azimuth - std::f32::consts::TAU)).abs() < 1e-4);
    }

    #[test]
    fn vertical_drag_stops_short_of_the_poles() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate(Vec2::new(0.0, 10_000.0), 600.0);
        assert!(orbit.polar >= ORBIT_POLAR_EPSILON);
        assert!(orbit.transform().translation.is_finite());

        orbit.rotate(Vec2::new(0.0, -20_000.0), 600.0);
        assert!(orbit.polar <= PI - ORBIT_POLAR_EPSILON);
    }

    #[test]
    fn zero_height_viewport_is_ignored() {
        let mut orbit = OrbitCamera::default();
        let before = (orbit.azimuth, orbit.polar);
        orbit.rotate(Vec2::new(10.0, 10.0), 0.0);
        assert_eq!((orbit.azimuth, orbit.polar), before);
    }
}
