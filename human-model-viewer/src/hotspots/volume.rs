use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use constants::hotspot::{DEFAULT_HOTSPOTS, HotspotInfo};

use super::ray::ray_hits_obb;

/// Links a spawned hotspot entity to its slot in the hit tester.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hotspot {
    pub index: usize,
}

/// Marks the root of the loaded human model.
#[derive(Component)]
pub struct HumanModel;

pub fn srgba_from_hex(hex: u32) -> Srgba {
    Srgba::rgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Authoring data for one hotspot, in model-local space.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotDefinition {
    pub id: String,
    pub label: String,
    pub center: Vec3,
    pub size: Vec3,
    pub base_color: Srgba,
    pub target_url: Option<String>,
}

impl From<&HotspotInfo> for HotspotDefinition {
    fn from(info: &HotspotInfo) -> Self {
        Self {
            id: info.id.to_string(),
            label: info.label.to_string(),
            center: Vec3::from_array(info.center),
            size: Vec3::from_array(info.size),
            base_color: srgba_from_hex(info.base_color),
            target_url: info.target_url.map(str::to_string),
        }
    }
}

impl HotspotDefinition {
    pub fn defaults() -> Vec<Self> {
        DEFAULT_HOTSPOTS.iter().map(Self::from).collect()
    }

    pub fn local_transform(&self) -> Transform {
        Transform::from_translation(self.center)
    }
}

/// Interactive box attached to the model, with its current display colour.
#[derive(Debug, Clone)]
pub struct HotspotVolume {
    pub id: String,
    pub label: String,
    pub size: Vec3,
    pub base_color: Srgba,
    pub target_url: Option<String>,
    world: GlobalTransform,
    color: Srgba,
}

impl HotspotVolume {
    pub fn new(definition: &HotspotDefinition, parent: &GlobalTransform) -> Self {
        Self {
            id: definition.id.clone(),
            label: definition.label.clone(),
            size: definition.size,
            base_color: definition.base_color,
            target_url: definition.target_url.clone(),
            world: parent.mul_transform(definition.local_transform()),
            color: definition.base_color,
        }
    }

    pub fn color(&self) -> Srgba {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Srgba) {
        self.color = color;
    }

    pub(crate) fn set_world_transform(&mut self, world: GlobalTransform) {
        self.world = world;
    }

    pub fn world_center(&self) -> Vec3 {
        self.world.translation()
    }

    pub fn ray_distance(&self, ray: Ray3d) -> Option<f32> {
        ray_hits_obb(ray, &self.world, self.size)
    }

    /// Click destination, ignoring blank URLs.
    pub fn navigation_url(&self) -> Option<&str> {
        self.target_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

fn resting_material(base_color: Srgba) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::from(base_color.with_alpha(0.0)),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

/// Spawns one invisible box per definition as children of the model root and
/// returns the matching volumes in definition order.
pub fn spawn_hotspot_volumes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    model: Entity,
    model_transform: &Transform,
    definitions: &[HotspotDefinition],
) -> Vec<HotspotVolume> {
    let parent = GlobalTransform::from(*model_transform);

    definitions
        .iter()
        .enumerate()
        .map(|(index, definition)| {
            commands.spawn((
                Name::new(format!("hotspot:{}", definition.id)),
                Hotspot { index },
                Mesh3d(meshes.add(Cuboid::new(
                    definition.size.x,
                    definition.size.y,
                    definition.size.z,
                ))),
                MeshMaterial3d(materials.add(resting_material(definition.base_color))),
                definition.local_transform(),
                NotShadowCaster,
                ChildOf(model),
            ));

            HotspotVolume::new(definition, &parent)
        })
        .collect()
}
