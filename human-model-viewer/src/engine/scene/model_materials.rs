use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::hotspots::volume::{Hotspot, HumanModel};

/// Turns off back-face culling on a front-sided material. Returns false when
/// the material already renders both faces.
pub fn make_double_sided(material: &mut StandardMaterial) -> bool {
    if material.cull_mode.is_none() {
        return false;
    }
    material.double_sided = true;
    material.cull_mode = None;
    true
}

/// Makes every mesh material under `root` double-sided so the back of the
/// model stays visible while orbiting. Hotspot boxes are left alone.
fn double_side_descendants(
    root: Entity,
    children: &Query<&Children>,
    mesh_materials: &Query<&MeshMaterial3d<StandardMaterial>, Without<Hotspot>>,
    materials: &mut Assets<StandardMaterial>,
) -> usize {
    let mut changed = 0;
    for entity in children.iter_descendants(root) {
        let Ok(mesh_material) = mesh_materials.get(entity) else {
            continue;
        };
        if let Some(material) = materials.get_mut(&mesh_material.0) {
            if make_double_sided(material) {
                changed += 1;
            }
        }
    }
    changed
}

/// Observer for the human model's glTF scene finishing instantiation.
pub fn double_side_model_materials(
    trigger: Trigger<SceneInstanceReady>,
    models: Query<(), With<HumanModel>>,
    children: Query<&Children>,
    mesh_materials: Query<&MeshMaterial3d<StandardMaterial>, Without<Hotspot>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let root = trigger.target();
    if !models.contains(root) {
        return;
    }
    let changed = double_side_descendants(root, &children, &mesh_materials, &mut materials);
    info!("✓ Model scene ready, {} materials made double-sided", changed);
}
