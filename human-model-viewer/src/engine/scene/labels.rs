use bevy::prelude::*;
use constants::render_settings::{LABEL_COLOR, LABEL_FONT_SIZE};

use crate::hotspots::HitTester;
use crate::hotspots::volume::HotspotVolume;

/// Screen-space text label following a hotspot.
#[derive(Component)]
pub struct HotspotLabel {
    pub index: usize,
}

pub fn spawn_hotspot_labels(commands: &mut Commands, volumes: &[HotspotVolume]) {
    for (index, volume) in volumes.iter().enumerate() {
        commands.spawn((
            Name::new(format!("label:{}", volume.id)),
            Text::new(volume.label.clone()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(LABEL_COLOR),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            HotspotLabel { index },
        ));
    }
}

/// Places each label at the projection of its hotspot centre.
pub fn update_hotspot_labels(
    mut labels: Query<(&HotspotLabel, &mut Node, &mut Visibility, &ComputedNode)>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    hit_tester: Res<HitTester>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (label, mut node, mut visibility, computed) in &mut labels {
        let Some(volume) = hit_tester.volumes().get(label.index) else {
            continue;
        };
        match camera.world_to_viewport(camera_transform, volume.world_center()) {
            Ok(position) => {
                // Centre the text on the projected point.
                let half = computed.size() * computed.inverse_scale_factor() * 0.5;
                node.left = Val::Px(position.x - half.x);
                node.top = Val::Px(position.y - half.y);
                visibility.set_if_neq(Visibility::Inherited);
            }
            Err(_) => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}
