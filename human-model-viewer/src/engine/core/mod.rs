//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with camera, lighting, loading systems,
/// hotspot interaction and the embedding bridge.
pub mod app_setup;

/// Application state machine: loading, running, or failed load.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration and transparency for web targets.
pub mod window_config;
