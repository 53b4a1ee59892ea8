use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::VIEWER_MANIFEST_PATH;

use crate::engine::assets::viewer_manifest::{ActiveLayout, ViewerManifest};
use crate::engine::loading::progress::LoadingProgress;
use crate::hotspots::volume::HotspotDefinition;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ViewerManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading viewer manifest: {}", VIEWER_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(VIEWER_MANIFEST_PATH));
}

/// Picks the session layout once the manifest has loaded, or falls back to
/// the built-in layout when it is missing or invalid.
pub fn resolve_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    manifests: Res<Assets<ViewerManifest>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if loading_progress.manifest_resolved {
        return;
    }
    let Some(handle) = manifest_loader.handle.as_ref() else {
        return;
    };

    let layout = if let Some(manifest) = manifests.get(handle) {
        match ActiveLayout::from_manifest(manifest) {
            Ok(layout) => {
                info!("✓ Viewer manifest loaded ({} hotspots)", layout.hotspots.len());
                layout
            }
            Err(e) => {
                warn!("Invalid viewer manifest: {}. Using built-in hotspot layout", e);
                ActiveLayout {
                    model_path: manifest.model_path.clone(),
                    model_offset: manifest.model_offset(),
                    hotspots: HotspotDefinition::defaults(),
                }
            }
        }
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        warn!("Viewer manifest unavailable: {}. Using built-in layout", err);
        ActiveLayout::builtin()
    } else {
        return;
    };

    commands.insert_resource(layout);
    loading_progress.manifest_resolved = true;
}
