use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS_PER_UNIT, AMBIENT_COLOR, AMBIENT_INTENSITY, BACK_LIGHT,
    DIRECTIONAL_LUX_PER_UNIT, DirectionalLightSettings, TOP_LIGHT,
};

fn spawn_directional(commands: &mut Commands, name: &'static str, settings: &DirectionalLightSettings) {
    commands.spawn((
        Name::new(name),
        DirectionalLight {
            color: settings.color,
            illuminance: settings.intensity * DIRECTIONAL_LUX_PER_UNIT,
            shadows_enabled: settings.shadows,
            ..default()
        },
        Transform::from_translation(settings.position).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Key light from above the front, a matching back light and a dim cool ambient.
pub fn spawn_lighting(commands: &mut Commands) {
    spawn_directional(commands, "top-light", &TOP_LIGHT);
    spawn_directional(commands, "back-light", &BACK_LIGHT);

    commands.insert_resource(AmbientLight {
        color: AMBIENT_COLOR,
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_PER_UNIT,
        ..default()
    });
}
