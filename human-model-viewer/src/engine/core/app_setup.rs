use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

// Crate engine modules
use crate::engine::assets::viewer_manifest::ViewerManifest;
use crate::engine::camera::orbit_camera::{OrbitCamera, orbit_camera_controller};
use crate::engine::core::app_state::{
    AppState, transition_to_load_failed, transition_to_running, update_loading_frontend,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{
    ManifestLoader, resolve_manifest_system, start_loading,
};
use crate::engine::loading::model_loader::{
    ModelLoader, check_model_loading, request_model_system,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::labels::update_hotspot_labels;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::model_materials::double_side_model_materials;
// Hotspots and Web RPC
use crate::hotspots::HotspotPlugin;
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers ViewerManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerManifest>::new(&["json"]))
        .add_plugins(HotspotPlugin)
        .add_plugins(WebRpcPlugin)
        // Transparent canvas so the page shows through around the model.
        .insert_resource(ClearColor(Color::NONE))
        .init_resource::<OrbitCamera>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ModelLoader>();

    app.add_observer(double_side_model_materials)
        .add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                resolve_manifest_system,
                request_model_system,
                check_model_loading,
                transition_to_running,
                transition_to_load_failed,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        // Orbiting works while the model is still loading and after a failed load.
        .add_systems(Update, (orbit_camera_controller, update_loading_frontend))
        .add_systems(
            Update,
            update_hotspot_labels.run_if(in_state(AppState::Running)),
        );

    app
}

fn spawn_camera(commands: &mut Commands, orbit: &OrbitCamera) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        orbit.transform(),
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, orbit: Res<OrbitCamera>) {
    info!("=== HUMAN MODEL VIEWER ===");
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands, &orbit);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
