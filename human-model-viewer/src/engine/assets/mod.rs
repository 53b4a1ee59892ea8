//! Viewer configuration assets.

/// JSON viewer manifest: model path, placement and hotspot layout.
pub mod viewer_manifest;
