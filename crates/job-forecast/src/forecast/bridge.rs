use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::{Child, Command};
use tracing::{debug, info};

use super::catalog::Catalog;
use super::curve::{clamp_demand, generate_monthly_series, month_label, FORECAST_MONTHS};
use super::domain::{round2, ExperienceTier, Industry, JobForecast, MonthlyPoint};
use super::salary::resolve_salary;
use crate::config::ModelConfig;

const STDERR_EXCERPT_LIMIT: usize = 512;

/// Optional out-of-process forecaster. Any error means "use the synthetic path".
#[async_trait]
pub trait ModelBridge: Send + Sync {
    fn name(&self) -> &str;

    async fn try_predict(
        &self,
        industry: Industry,
        tier: ExperienceTier,
    ) -> Result<ModelPrediction, ModelBridgeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelBridgeError {
    #[error("external model disabled")]
    Disabled,
    #[error("model script not found: {}", .0.display())]
    MissingScript(PathBuf),
    #[error("models directory not found: {}", .0.display())]
    MissingModelsDir(PathBuf),
    #[error("model file not found: {}", .0.display())]
    MissingModel(PathBuf),
    #[error("no interpreter could be started (tried {tried}): {source}")]
    Spawn {
        tried: String,
        source: std::io::Error,
    },
    #[error("model process timed out after {0:?}")]
    Timeout(Duration),
    #[error("model process exited with code {code:?}: {stderr}")]
    Exit { code: Option<i32>, stderr: String },
    #[error("model process i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("model output was malformed: {0}")]
    Malformed(String),
    #[error("model reported an error: {0}")]
    Reported(String),
}

/// Metrics written to stdout by the model script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelPrediction {
    pub current_demand: f64,
    pub year1_growth: f64,
    pub year2_growth: f64,
    pub total_growth: f64,
    pub confidence_score: f64,
    #[serde(default)]
    pub monthly_predictions: Vec<MonthlyPoint>,
    #[serde(default)]
    pub model_used: Option<String>,
}

impl ModelPrediction {
    /// Fans the industry-level metrics out to every catalog title of the industry.
    /// Total growth is recomputed from the yearly figures so it always equals their sum.
    pub fn into_forecasts(
        self,
        industry: Industry,
        tier: ExperienceTier,
        catalog: &Catalog,
    ) -> Vec<JobForecast> {
        let current_demand = clamp_demand(self.current_demand);
        let year1_growth = round2(self.year1_growth);
        let year2_growth = round2(self.year2_growth);
        let total_growth = year1_growth + year2_growth;
        if (total_growth - self.total_growth).abs() > 0.01 {
            debug!(
                reported = self.total_growth,
                recomputed = total_growth,
                "model total growth differs from yearly sum"
            );
        }
        let confidence_score = round2(self.confidence_score.clamp(0.0, 100.0));

        let monthly_predictions = if self.monthly_predictions.len() == FORECAST_MONTHS {
            self.monthly_predictions
                .iter()
                .enumerate()
                .map(|(index, point)| MonthlyPoint {
                    month: month_label(index),
                    demand: clamp_demand(point.demand),
                })
                .collect()
        } else {
            generate_monthly_series(current_demand, year1_growth, year2_growth)
        };

        catalog
            .entries_for(industry)
            .iter()
            .map(|entry| JobForecast {
                job_title: entry.job_title.to_string(),
                current_demand,
                year1_growth,
                year2_growth,
                total_growth,
                confidence_score,
                salary_range: resolve_salary(entry.salary, tier),
                skills: entry.skills.iter().map(|skill| skill.to_string()).collect(),
                education_pathways: entry.education_pathways.clone(),
                monthly_predictions: monthly_predictions.clone(),
            })
            .collect()
    }
}

/// Bridge used when the external model is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledModelBridge;

#[async_trait]
impl ModelBridge for DisabledModelBridge {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn try_predict(
        &self,
        _industry: Industry,
        _tier: ExperienceTier,
    ) -> Result<ModelPrediction, ModelBridgeError> {
        Err(ModelBridgeError::Disabled)
    }
}

/// Runs `<interpreter> <script> <Industry> <Tier>` and parses the JSON it prints.
#[derive(Debug, Clone)]
pub struct ScriptModelBridge {
    config: ModelConfig,
}

impl ScriptModelBridge {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn model_file_name(industry: Industry, tier: ExperienceTier) -> String {
        format!(
            "job_forecasting_arima_{}_{}.pkl",
            industry.model_label(),
            tier.model_label()
        )
    }

    fn spawn(&self, industry: Industry, tier: ExperienceTier) -> Result<Child, ModelBridgeError> {
        let mut last_error = None;
        for interpreter in &self.config.interpreters {
            let spawned = Command::new(interpreter)
                .arg(&self.config.script_path)
                .arg(industry.model_label())
                .arg(tier.model_label())
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .spawn();

            match spawned {
                Ok(child) => {
                    debug!(%interpreter, "model process started");
                    return Ok(child);
                }
                Err(err) if interpreter_unavailable(&err) => {
                    debug!(%interpreter, error = %err, "interpreter unavailable");
                    last_error = Some(err);
                }
                Err(err) => return Err(ModelBridgeError::Io(err)),
            }
        }

        Err(ModelBridgeError::Spawn {
            tried: self.config.interpreters.join(", "),
            source: last_error.unwrap_or_else(|| {
                std::io::Error::new(ErrorKind::NotFound, "no interpreters configured")
            }),
        })
    }
}

#[async_trait]
impl ModelBridge for ScriptModelBridge {
    fn name(&self) -> &str {
        "script"
    }

    async fn try_predict(
        &self,
        industry: Industry,
        tier: ExperienceTier,
    ) -> Result<ModelPrediction, ModelBridgeError> {
        if !self.config.script_path.is_file() {
            return Err(ModelBridgeError::MissingScript(self.config.script_path.clone()));
        }
        if !self.config.models_dir.is_dir() {
            return Err(ModelBridgeError::MissingModelsDir(self.config.models_dir.clone()));
        }
        let model_file = Self::model_file_name(industry, tier);
        let model_path = self.config.models_dir.join(&model_file);
        if !model_path.is_file() {
            return Err(ModelBridgeError::MissingModel(model_path));
        }

        let child = self.spawn(industry, tier)?;
        // dropping the pending future on timeout drops the child, which kills it
        let output = match tokio::time::timeout(self.config.timeout, child.wait_with_output()).await
        {
            Ok(result) => result?,
            Err(_) => return Err(ModelBridgeError::Timeout(self.config.timeout)),
        };

        if !output.status.success() {
            return Err(ModelBridgeError::Exit {
                code: output.status.code(),
                stderr: stderr_excerpt(&output.stderr),
            });
        }

        let mut prediction = parse_model_output(&output.stdout)?;
        if prediction.model_used.is_none() {
            prediction.model_used = Some(model_file);
        }
        info!(
            industry = industry.slug(),
            tier = tier.slug(),
            model = prediction.model_used.as_deref().unwrap_or_default(),
            "external model prediction succeeded"
        );
        Ok(prediction)
    }
}

/// Parses the single JSON object the script prints. An `error` field counts as failure.
pub fn parse_model_output(stdout: &[u8]) -> Result<ModelPrediction, ModelBridgeError> {
    let value: serde_json::Value = serde_json::from_slice(stdout)
        .map_err(|err| ModelBridgeError::Malformed(err.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| ModelBridgeError::Malformed("expected a JSON object".to_string()))?;
    if let Some(error) = object.get("error") {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(ModelBridgeError::Reported(message));
    }

    serde_json::from_value(value).map_err(|err| ModelBridgeError::Malformed(err.to_string()))
}

fn interpreter_unavailable(err: &std::io::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied)
}

fn stderr_excerpt(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let trimmed = text.trim();
    match trimmed.char_indices().nth(STDERR_EXCERPT_LIMIT) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
