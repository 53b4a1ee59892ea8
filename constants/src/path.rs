/// Viewer manifest describing the model and its hotspot layout.
pub const VIEWER_MANIFEST_PATH: &str = "viewer_manifest.json";

/// Fallback glTF scene when the manifest cannot be used.
pub const DEFAULT_MODEL_PATH: &str = "models/human/scene.gltf";
