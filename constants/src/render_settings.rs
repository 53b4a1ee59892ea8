use bevy::prelude::*;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Initial camera position; the orbit radius and angles derive from it.
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 0.3, 1.4);
pub const ORBIT_TARGET: Vec3 = Vec3::ZERO;

/// Full turn per viewport height of drag.
pub const ORBIT_ROTATE_SPEED: f32 = std::f32::consts::TAU;

/// Keeps the polar angle away from the poles so `looking_at` stays defined.
pub const ORBIT_POLAR_EPSILON: f32 = 0.000_001;

pub struct DirectionalLightSettings {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
    pub shadows: bool,
}

/// Converts the unitless intensities below into Bevy lux.
pub const DIRECTIONAL_LUX_PER_UNIT: f32 = 10_000.0;

/// Converts the ambient intensity below into Bevy brightness.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 1_000.0;

pub const TOP_LIGHT: DirectionalLightSettings = DirectionalLightSettings {
    color: Color::WHITE,
    intensity: 0.6,
    position: Vec3::new(0.756, 11.231, 13.484),
    shadows: true,
};

/// Lights the back of the model.
pub const BACK_LIGHT: DirectionalLightSettings = DirectionalLightSettings {
    color: Color::WHITE,
    intensity: 0.6,
    position: Vec3::new(-0.741, 9.037, -11.487),
    shadows: true,
};

/// Cool dim ambient (`#73509f`).
pub const AMBIENT_COLOR: Color = Color::srgb(0x73 as f32 / 255.0, 0x50 as f32 / 255.0, 0x9f as f32 / 255.0);
pub const AMBIENT_INTENSITY: f32 = 0.4;

pub const LABEL_FONT_SIZE: f32 = 14.0;
pub const LABEL_COLOR: Color = Color::WHITE;
