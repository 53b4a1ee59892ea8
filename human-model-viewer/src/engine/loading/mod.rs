//! Asset loading for the viewer manifest and the human model.
//!
//! The manifest resolves first and selects the model path and hotspot
//! layout; the glTF scene follows. Hotspots are spawned in the same system
//! call that observes the completed model load.

/// Viewer manifest loading with built-in fallback layout.
pub mod manifest_loader;

/// glTF scene loading, model spawning and hotspot attachment.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
