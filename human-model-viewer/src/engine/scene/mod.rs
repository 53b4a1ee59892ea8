//! Scene lighting, model material fixes and hotspot labels.

/// Directional and ambient lights around the model.
pub mod lighting;

/// Text labels tracking hotspot positions on screen.
pub mod labels;

/// Double-sided materials for the loaded model.
pub mod model_materials;
