use bevy::asset::RecursiveDependencyLoadState;
use bevy::prelude::*;

use crate::engine::assets::viewer_manifest::ActiveLayout;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::labels::spawn_hotspot_labels;
use crate::hotspots::HitTester;
use crate::hotspots::volume::{HumanModel, spawn_hotspot_volumes};

#[derive(Resource, Default)]
pub struct ModelLoader {
    scene: Option<Handle<Scene>>,
}

pub fn request_model_system(
    mut loading_progress: ResMut<LoadingProgress>,
    mut model_loader: ResMut<ModelLoader>,
    layout: Option<Res<ActiveLayout>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.model_requested {
        return;
    }
    let Some(layout) = layout else {
        return;
    };

    info!("Loading model: {}", layout.model_path);
    model_loader.scene =
        Some(asset_server.load(GltfAssetLabel::Scene(0).from_asset(layout.model_path.clone())));
    loading_progress.model_requested = true;
}

/// Spawns the model and its hotspots once the scene and all its dependencies
/// are in. A failed load is terminal: the hotspot set stays empty.
pub fn check_model_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    model_loader: Res<ModelLoader>,
    layout: Option<Res<ActiveLayout>>,
    asset_server: Res<AssetServer>,
    mut hit_tester: ResMut<HitTester>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    if loading_progress.model_loaded || loading_progress.failure.is_some() {
        return;
    }
    let (Some(handle), Some(layout)) = (model_loader.scene.as_ref(), layout) else {
        return;
    };

    match asset_server.get_recursive_dependency_load_state(handle.id()) {
        Some(RecursiveDependencyLoadState::Loaded) => {
            info!("✓ Model loaded: {}", layout.model_path);
            loading_progress.model_loaded = true;

            let model_transform = Transform::from_translation(layout.model_offset);
            let model = commands
                .spawn((
                    Name::new("human-model"),
                    SceneRoot(handle.clone()),
                    model_transform,
                    HumanModel,
                ))
                .id();

            let volumes = spawn_hotspot_volumes(
                &mut commands,
                &mut meshes,
                &mut materials,
                model,
                &model_transform,
                &layout.hotspots,
            );
            spawn_hotspot_labels(&mut commands, &volumes);

            let count = volumes.len();
            match hit_tester.initialize(volumes) {
                Ok(()) => info!("✓ {} hotspot volumes attached", count),
                Err(e) => warn!("Hotspots not attached: {}", e),
            }
            loading_progress.hotspots_spawned = true;
        }
        Some(RecursiveDependencyLoadState::Failed(err)) => {
            error!("Failed to load model {}: {}", layout.model_path, err);
            loading_progress.failure = Some(err.to_string());
        }
        _ => {}
    }
}
