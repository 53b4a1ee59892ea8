//! Orbit camera around the human model.

/// Orbit camera resource and rotate-only controller system.
pub mod orbit_camera;
