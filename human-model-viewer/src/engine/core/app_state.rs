use bevy::prelude::*;

use crate::engine::loading::progress::{LoadingProgress, LoadingStage};
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    /// Terminal for the session; a page reload is the only recovery.
    LoadFailed,
}

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.hotspots_spawned {
        info!("→ Model and hotspots ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

pub fn transition_to_load_failed(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if let Some(failure) = &loading_progress.failure {
        error!("→ Model load failed, hotspots disabled for this session: {}", failure);
        next_state.set(AppState::LoadFailed);
    }
}

/// Notifies the embedding page whenever the loading stage changes.
pub fn update_loading_frontend(
    loading_progress: Res<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut last_stage: Local<Option<LoadingStage>>,
) {
    let stage = loading_progress.stage();
    if *last_stage == Some(stage) {
        return;
    }
    *last_stage = Some(stage);

    rpc_interface.send_notification(
        "loading_progress",
        serde_json::json!({ "stage": stage.as_str() }),
    );
    if let Some(failure) = &loading_progress.failure {
        rpc_interface.send_notification(
            "model_load_failed",
            serde_json::json!({ "message": failure }),
        );
    }
}
