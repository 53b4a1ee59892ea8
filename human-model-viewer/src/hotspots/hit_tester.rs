use bevy::prelude::*;
use constants::hotspot::{HIGHLIGHT_COLOR_HEX, HIGHLIGHT_OPACITY, HIT_DISTANCE_EPSILON};
use thiserror::Error;

use super::navigation::NavigationSink;
use super::ray::{RayProjector, update_pointer};
use super::volume::{HotspotVolume, srgba_from_hex};

#[derive(Debug, Error, PartialEq)]
pub enum HitTesterError {
    #[error("hotspot volumes already initialised with {count} volumes")]
    AlreadyInitialized { count: usize },
}

/// Hover transition produced by a pointer event. Indices refer to
/// [`HitTester::volumes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverChange {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickOutcome {
    pub hit: Option<usize>,
    pub navigated_to: Option<String>,
    pub hover_cleared: Option<HoverChange>,
}

pub fn highlight_color() -> Srgba {
    srgba_from_hex(HIGHLIGHT_COLOR_HEX)
}

/// Nearest volume along the ray. Hits closer than `HIT_DISTANCE_EPSILON` to
/// the current best keep the earlier volume.
pub fn test_hit(ray: Ray3d, volumes: &[HotspotVolume]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, volume) in volumes.iter().enumerate() {
        let Some(t) = volume.ray_distance(ray) else {
            continue;
        };
        if t <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_t)) if t >= best_t - HIT_DISTANCE_EPSILON => {}
            _ => best = Some((index, t)),
        }
    }
    best.map(|(index, _)| index)
}

/// Owns the hotspot volumes and the hover state over them.
#[derive(Resource, Default)]
pub struct HitTester {
    volumes: Vec<HotspotVolume>,
    hovered: Option<usize>,
    initialized: bool,
}

impl HitTester {
    /// Installs the volume set. The set is fixed afterwards.
    pub fn initialize(&mut self, volumes: Vec<HotspotVolume>) -> Result<(), HitTesterError> {
        if self.initialized {
            return Err(HitTesterError::AlreadyInitialized {
                count: self.volumes.len(),
            });
        }
        self.volumes = volumes;
        self.hovered = None;
        self.initialized = true;
        Ok(())
    }

    pub fn volumes(&self) -> &[HotspotVolume] {
        &self.volumes
    }

    pub fn hovered(&self) -> Option<&HotspotVolume> {
        self.hovered.and_then(|index| self.volumes.get(index))
    }

    pub fn test_hit(&self, ray: Ray3d) -> Option<usize> {
        test_hit(ray, &self.volumes)
    }

    /// Resolves the volume under the pointer, if any.
    pub fn resolve(
        &self,
        projector: &(impl RayProjector + ?Sized),
        pointer: Vec2,
        viewport: Vec2,
    ) -> Option<usize> {
        let ray = update_pointer(projector, pointer, viewport)?;
        self.test_hit(ray)
    }

    /// Updates hover for a pointer move. Returns the transition when hover changed.
    pub fn on_pointer_move(
        &mut self,
        projector: &(impl RayProjector + ?Sized),
        pointer: Vec2,
        viewport: Vec2,
    ) -> Option<HoverChange> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        let hit = self.resolve(projector, pointer, viewport);
        self.set_hovered(hit)
    }

    /// Navigates to the clicked volume's URL, then clears hover.
    pub fn on_click(
        &mut self,
        projector: &(impl RayProjector + ?Sized),
        pointer: Vec2,
        viewport: Vec2,
        navigator: &mut impl NavigationSink,
    ) -> ClickOutcome {
        let hit = self.resolve(projector, pointer, viewport);

        let navigated_to = hit
            .and_then(|index| self.volumes[index].navigation_url())
            .map(str::to_string);
        if let Some(url) = &navigated_to {
            navigator.navigate(url);
        }

        ClickOutcome {
            hit,
            navigated_to,
            hover_cleared: self.set_hovered(None),
        }
    }

    pub fn on_pointer_leave(&mut self) -> Option<HoverChange> {
        self.set_hovered(None)
    }

    pub fn sync_world_transform(&mut self, index: usize, world: GlobalTransform) {
        if let Some(volume) = self.volumes.get_mut(index) {
            volume.set_world_transform(world);
        }
    }

    /// Colour to render for a volume: transparent at rest, translucent highlight when hovered.
    pub fn display_color(&self, index: usize) -> Option<Color> {
        let volume = self.volumes.get(index)?;
        let alpha = if self.hovered == Some(index) {
            HIGHLIGHT_OPACITY
        } else {
            0.0
        };
        Some(Color::from(volume.color().with_alpha(alpha)))
    }

    fn set_hovered(&mut self, hit: Option<usize>) -> Option<HoverChange> {
        if hit == self.hovered {
            return None;
        }

        let previous = self.hovered.take();
        if let Some(prev) = previous {
            let volume = &mut self.volumes[prev];
            let base = volume.base_color;
            volume.set_color(base);
        }
        if let Some(next) = hit {
            self.volumes[next].set_color(highlight_color());
            self.hovered = Some(next);
        }

        Some(HoverChange {
            previous,
            current: self.hovered,
        })
    }
}
