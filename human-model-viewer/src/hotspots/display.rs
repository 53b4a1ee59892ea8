use bevy::prelude::*;

use super::hit_tester::HitTester;
use super::volume::Hotspot;

/// Copies propagated hotspot transforms into the hit tester so the boxes follow the model.
pub fn sync_hotspot_transforms(
    hotspots: Query<(&Hotspot, &GlobalTransform), Changed<GlobalTransform>>,
    mut hit_tester: ResMut<HitTester>,
) {
    for (hotspot, transform) in &hotspots {
        hit_tester.sync_world_transform(hotspot.index, *transform);
    }
}

/// Writes hit tester colours into hotspot materials, touching only those that differ.
pub fn apply_hotspot_colors(
    hotspots: Query<(&Hotspot, &MeshMaterial3d<StandardMaterial>)>,
    hit_tester: Res<HitTester>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (hotspot, material) in &hotspots {
        let Some(color) = hit_tester.display_color(hotspot.index) else {
            continue;
        };
        let stale = materials
            .get(&material.0)
            .is_some_and(|current| current.base_color != color);
        if !stale {
            continue;
        }
        if let Some(current) = materials.get_mut(&material.0) {
            current.base_color = color;
        }
    }
}
