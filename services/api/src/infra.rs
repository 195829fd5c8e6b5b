use async_trait::async_trait;
use job_forecast::config::ModelConfig;
use job_forecast::forecast::{
    DisabledModelBridge, ExperienceTier, Industry, ModelBridge, ModelBridgeError,
    ModelPrediction, ScriptModelBridge,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Bridge chosen at startup from `APP_MODEL_ENABLED` (or forced by the CLI).
#[derive(Debug, Clone)]
pub(crate) enum ConfiguredBridge {
    Script(ScriptModelBridge),
    Disabled(DisabledModelBridge),
}

impl ConfiguredBridge {
    pub(crate) fn from_config(config: &ModelConfig) -> Self {
        if config.enabled {
            Self::Script(ScriptModelBridge::new(config.clone()))
        } else {
            Self::Disabled(DisabledModelBridge)
        }
    }
}

#[async_trait]
impl ModelBridge for ConfiguredBridge {
    fn name(&self) -> &str {
        match self {
            Self::Script(bridge) => bridge.name(),
            Self::Disabled(bridge) => bridge.name(),
        }
    }

    async fn try_predict(
        &self,
        industry: Industry,
        tier: ExperienceTier,
    ) -> Result<ModelPrediction, ModelBridgeError> {
        match self {
            Self::Script(bridge) => bridge.try_predict(industry, tier).await,
            Self::Disabled(bridge) => bridge.try_predict(industry, tier).await,
        }
    }
}
