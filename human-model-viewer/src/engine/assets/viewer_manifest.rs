use bevy::prelude::*;
use constants::hotspot::{MODEL_OFFSET, get_hotspot_label};
use constants::path::DEFAULT_MODEL_PATH;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hotspots::volume::HotspotDefinition;

#[derive(Debug, Error, PartialEq)]
pub enum ManifestError {
    #[error("hotspot #{index} has an empty id")]
    EmptyId { index: usize },
    #[error("hotspot id '{0}' is used more than once")]
    DuplicateId(String),
    #[error("hotspot '{id}' has a non-positive size {size:?}")]
    InvalidSize { id: String, size: [f32; 3] },
    #[error("hotspot '{id}' has an invalid colour '{value}'")]
    InvalidColor { id: String, value: String },
}

/// One hotspot box as written in the manifest, in model-local space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub center: [f32; 3],
    pub size: [f32; 3],
    /// `#rrggbb`
    pub base_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
}

/// Viewer configuration as a Bevy asset. Mirrors the JSON structure.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct ViewerManifest {
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default = "default_model_offset")]
    pub model_offset: [f32; 3],
    /// `None` selects the built-in layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspots: Option<Vec<HotspotEntry>>,
}

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

fn default_model_offset() -> [f32; 3] {
    MODEL_OFFSET
}

impl Default for ViewerManifest {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            model_offset: default_model_offset(),
            hotspots: None,
        }
    }
}

impl ViewerManifest {
    pub fn model_offset(&self) -> Vec3 {
        Vec3::from_array(self.model_offset)
    }

    /// Validated hotspot definitions in manifest order.
    pub fn hotspot_definitions(&self) -> Result<Vec<HotspotDefinition>, ManifestError> {
        let Some(entries) = &self.hotspots else {
            return Ok(HotspotDefinition::defaults());
        };

        let mut definitions: Vec<HotspotDefinition> = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let id = entry.id.trim();
            if id.is_empty() {
                return Err(ManifestError::EmptyId { index });
            }
            if definitions.iter().any(|d| d.id == id) {
                return Err(ManifestError::DuplicateId(id.to_string()));
            }
            if entry.size.iter().any(|s| !(*s > 0.0) || !s.is_finite()) {
                return Err(ManifestError::InvalidSize {
                    id: id.to_string(),
                    size: entry.size,
                });
            }
            let base_color =
                Srgba::hex(&entry.base_color).map_err(|_| ManifestError::InvalidColor {
                    id: id.to_string(),
                    value: entry.base_color.clone(),
                })?;

            definitions.push(HotspotDefinition {
                id: id.to_string(),
                label: entry.label.clone().unwrap_or_else(|| get_hotspot_label(id)),
                center: Vec3::from_array(entry.center),
                size: Vec3::from_array(entry.size),
                base_color,
                target_url: entry.target_url.clone(),
            });
        }
        Ok(definitions)
    }
}

/// Model path, placement and hotspot layout chosen for this session.
#[derive(Resource, Debug, Clone)]
pub struct ActiveLayout {
    pub model_path: String,
    pub model_offset: Vec3,
    pub hotspots: Vec<HotspotDefinition>,
}

impl ActiveLayout {
    pub fn builtin() -> Self {
        Self {
            model_path: default_model_path(),
            model_offset: Vec3::from_array(MODEL_OFFSET),
            hotspots: HotspotDefinition::defaults(),
        }
    }

    pub fn from_manifest(manifest: &ViewerManifest) -> Result<Self, ManifestError> {
        Ok(Self {
            model_path: manifest.model_path.clone(),
            model_offset: manifest.model_offset(),
            hotspots: manifest.hotspot_definitions()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotspots::volume::srgba_from_hex;

    fn parse(json: &str) -> ViewerManifest {
        serde_json::from_str(json).expect("valid manifest json")
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let manifest = parse("{}");
        assert_eq!(manifest.model_path, DEFAULT_MODEL_PATH);
        assert_eq!(manifest.model_offset(), Vec3::new(0.0, -0.9, 0.0));
        assert_eq!(manifest.hotspot_definitions().expect("defaults").len(), 4);
    }

    #[test]
    fn custom_hotspots_keep_order_and_parse_colours() {
        let manifest = parse(
            r##"{
                "model_path": "models/other/scene.gltf",
                "hotspots": [
                    { "id": "torso", "center": [0, 1.25, 0], "size": [0.3, 0.5, 0.2],
                      "base_color": "#51cf66", "target_url": "https://example.com/torso" },
                    { "id": "head", "label": "Head", "center": [0, 1.66, 0], "size": [0.2, 0.25, 0.28],
                      "base_color": "ff6b6b" }
                ]
            }"##,
        );
        let layout = ActiveLayout::from_manifest(&manifest).expect("valid layout");

        assert_eq!(layout.model_path, "models/other/scene.gltf");
        assert_eq!(layout.hotspots[0].id, "torso");
        assert_eq!(layout.hotspots[0].label, "Torso");
        assert_eq!(layout.hotspots[0].base_color, srgba_from_hex(0x51cf66));
        assert_eq!(layout.hotspots[1].label, "Head");
        assert_eq!(layout.hotspots[1].target_url, None);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let manifest = parse(
            r##"{ "hotspots": [
                { "id": "head", "center": [0, 0, 0], "size": [1, 1, 1], "base_color": "#ffffff" },
                { "id": "head", "center": [0, 1, 0], "size": [1, 1, 1], "base_color": "#ffffff" }
            ] }"##,
        );
        assert_eq!(
            manifest.hotspot_definitions(),
            Err(ManifestError::DuplicateId("head".to_string()))
        );
    }

    #[test]
    fn degenerate_entries_are_rejected() {
        let empty_id = parse(
            r##"{ "hotspots": [ { "id": " ", "center": [0, 0, 0], "size": [1, 1, 1], "base_color": "#ffffff" } ] }"##,
        );
        assert_eq!(
            empty_id.hotspot_definitions(),
            Err(ManifestError::EmptyId { index: 0 })
        );

        let flat = parse(
            r##"{ "hotspots": [ { "id": "arm", "center": [0, 0, 0], "size": [1, 0, 1], "base_color": "#ffffff" } ] }"##,
        );
        assert!(matches!(
            flat.hotspot_definitions(),
            Err(ManifestError::InvalidSize { .. })
        ));

        let bad_colour = parse(
            r##"{ "hotspots": [ { "id": "arm", "center": [0, 0, 0], "size": [1, 1, 1], "base_color": "teal" } ] }"##,
        );
        assert!(matches!(
            bad_colour.hotspot_definitions(),
            Err(ManifestError::InvalidColor { .. })
        ));
    }

    #[test]
    fn empty_list_disables_hotspots() {
        let manifest = parse(r#"{ "hotspots": [] }"#);
        assert!(manifest.hotspot_definitions().expect("valid").is_empty());
    }
}
