//! Compile-time settings shared by the viewer crates.

/// Asset paths relative to the Bevy asset root.
pub mod path;

/// Built-in hotspot layout and highlight styling.
pub mod hotspot;

/// Camera framing, orbit limits and scene lighting.
pub mod render_settings;
