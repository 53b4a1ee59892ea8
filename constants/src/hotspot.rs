/// Highlight colour applied to the hovered hotspot (`#ffd43b`).
pub const HIGHLIGHT_COLOR_HEX: u32 = 0xffd43b;

/// Opacity of a highlighted hotspot. Resting hotspots are fully transparent.
pub const HIGHLIGHT_OPACITY: f32 = 0.35;

/// Distances closer than this are treated as equal when ordering hits.
pub const HIT_DISTANCE_EPSILON: f32 = 1e-5;

/// Pointer travel (logical pixels) between press and release that still counts as a click.
pub const CLICK_DRAG_THRESHOLD: f32 = 4.0;

/// Translation applied to the model root once loaded.
pub const MODEL_OFFSET: [f32; 3] = [0.0, -0.9, 0.0];

pub struct HotspotInfo {
    pub id: &'static str,
    pub label: &'static str,
    /// Box centre in model-local space.
    pub center: [f32; 3],
    /// Full box extents in model-local space.
    pub size: [f32; 3],
    pub base_color: u32,
    pub target_url: Option<&'static str>,
}

/// Layout used when no viewer manifest is available.
pub const DEFAULT_HOTSPOTS: &[HotspotInfo] = &[
    HotspotInfo {
        id: "head",
        label: "Head",
        center: [0.0, 1.66, -0.03],
        size: [0.2, 0.25, 0.28],
        base_color: 0xff6b6b,
        target_url: Some("https://example.com/head"),
    },
    HotspotInfo {
        id: "left-arm",
        label: "Left Arm",
        center: [0.23, 1.2, -0.03],
        size: [0.1, 0.6, 0.14],
        base_color: 0x4dabf7,
        target_url: Some("https://example.com/left-arm"),
    },
    HotspotInfo {
        id: "right-arm",
        label: "Right Arm",
        center: [-0.23, 1.2, -0.03],
        size: [0.1, 0.6, 0.14],
        base_color: 0x4dabf7,
        target_url: Some("https://example.com/right-arm"),
    },
    HotspotInfo {
        id: "torso",
        label: "Torso",
        center: [0.0, 1.25, -0.03],
        size: [0.34, 0.55, 0.24],
        base_color: 0x51cf66,
        target_url: Some("https://example.com/torso"),
    },
];

pub fn get_hotspot_label(id: &str) -> String {
    DEFAULT_HOTSPOTS
        .iter()
        .find(|h| h.id == id)
        .map_or(id, |h| h.label)
        .to_string()
}
