use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_resolved: bool,
    pub model_requested: bool,
    pub model_loaded: bool,
    pub hotspots_spawned: bool,
    pub failure: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingStage {
    Manifest,
    Model,
    Hotspots,
    Ready,
    Failed,
}

impl LoadingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingStage::Manifest => "manifest",
            LoadingStage::Model => "model",
            LoadingStage::Hotspots => "hotspots",
            LoadingStage::Ready => "ready",
            LoadingStage::Failed => "failed",
        }
    }
}

impl LoadingProgress {
    pub fn stage(&self) -> LoadingStage {
        if self.failure.is_some() {
            LoadingStage::Failed
        } else if self.hotspots_spawned {
            LoadingStage::Ready
        } else if self.model_loaded {
            LoadingStage::Hotspots
        } else if self.manifest_resolved {
            LoadingStage::Model
        } else {
            LoadingStage::Manifest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_follow_progress_flags() {
        let mut progress = LoadingProgress::default();
        assert_eq!(progress.stage(), LoadingStage::Manifest);

        progress.manifest_resolved = true;
        assert_eq!(progress.stage(), LoadingStage::Model);

        progress.model_loaded = true;
        progress.hotspots_spawned = true;
        assert_eq!(progress.stage(), LoadingStage::Ready);

        progress.failure = Some("missing scene.gltf".to_string());
        assert_eq!(progress.stage(), LoadingStage::Failed);
    }
}
