//! Interactive hotspot volumes over the human model.
//!
//! A small fixed set of invisible boxes is parented to the loaded model. The
//! [`hit_tester::HitTester`] resource owns them together with the hover
//! state, and pointer systems feed it cursor moves, leaves and clicks.
//!
//! ## Frame order
//!
//! ```text
//! capture_pointer_view   active Camera3d -> PointerView
//!   └─> sync_hotspot_transforms   GlobalTransform -> HitTester volumes
//!       └─> handle_hotspot_pointer   CursorMoved / CursorLeft / click -> hover, navigation
//!           └─> apply_hotspot_colors   HitTester colours -> StandardMaterial
//! ```
//!
//! All of them run in `Update`, so colour changes reach the renderer in the
//! same frame. Before the model has loaded the volume set is empty and
//! pointer events are ignored.

/// Display sync between the hit tester and the ECS.
pub mod display;

/// Hover/click state machine over the hotspot volumes.
pub mod hit_tester;

/// Navigation sink for clicked hotspots.
pub mod navigation;

/// Pointer systems and hotspot events.
pub mod pointer;

/// Pointer-to-ray conversion and oriented box intersection.
pub mod ray;

/// Hotspot definitions, volumes and entity spawning.
pub mod volume;

use bevy::prelude::*;

pub use hit_tester::HitTester;
pub use pointer::HotspotEvent;

use display::{apply_hotspot_colors, sync_hotspot_transforms};
use pointer::{PointerGesture, PointerView, capture_pointer_view, handle_hotspot_pointer};

pub struct HotspotPlugin;

impl Plugin for HotspotPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HitTester>()
            .init_resource::<PointerGesture>()
            .init_resource::<PointerView>()
            .add_event::<HotspotEvent>()
            .add_systems(
                Update,
                (
                    capture_pointer_view,
                    sync_hotspot_transforms,
                    handle_hotspot_pointer,
                    apply_hotspot_colors,
                )
                    .chain(),
            );
    }
}
