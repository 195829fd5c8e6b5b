use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::bridge::ModelBridge;
use super::domain::{ExperienceTier, ForecastSummary, Industry, JobForecast};
use super::engine::ForecastEngine;
use crate::error::AppError;

pub const MISSING_FIELDS_MESSAGE: &str = "Industry and experience are required";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

impl PredictionRequest {
    pub fn new(industry: impl Into<String>, experience: impl Into<String>) -> Self {
        Self {
            industry: Some(industry.into()),
            experience: Some(experience.into()),
        }
    }

    fn validated(&self) -> Result<(&str, &str), AppError> {
        fn present(value: &Option<String>) -> Option<&str> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|raw| !raw.is_empty())
        }

        match (present(&self.industry), present(&self.experience)) {
            (Some(industry), Some(experience)) => Ok((industry, experience)),
            _ => Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastSource {
    MlModel,
    Synthetic,
}

/// Records a raw selection that was replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Substitution {
    pub field: &'static str,
    pub requested: String,
    pub resolved: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMetadata {
    pub source: ForecastSource,
    pub industry: Industry,
    pub experience: ExperienceTier,
    pub timestamp: DateTime<Utc>,
    pub model_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Why the external model was not used; absent when it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded_reason: Option<String>,
    pub substitutions: Vec<Substitution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    pub predictions: Vec<JobForecast>,
    pub summary: ForecastSummary,
    pub metadata: ForecastMetadata,
}

/// Composes the synthetic engine with an optional external model.
pub struct ForecastService<B> {
    engine: ForecastEngine,
    bridge: Arc<B>,
}

impl<B> ForecastService<B>
where
    B: ModelBridge + 'static,
{
    pub fn new(engine: ForecastEngine, bridge: Arc<B>) -> Self {
        Self { engine, bridge }
    }

    pub fn engine(&self) -> &ForecastEngine {
        &self.engine
    }

    /// Validates the request, then prefers the external model and degrades to
    /// synthetic forecasts on any bridge failure.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<ForecastResponse, AppError> {
        let (industry_raw, experience_raw) = request.validated()?;
        let (industry, industry_fallback) = Industry::resolve(industry_raw);
        let (experience, experience_fallback) = ExperienceTier::resolve(experience_raw);

        let mut substitutions = Vec::new();
        if industry_fallback {
            substitutions.push(Substitution {
                field: "industry",
                requested: industry_raw.to_string(),
                resolved: industry.slug(),
            });
        }
        if experience_fallback {
            substitutions.push(Substitution {
                field: "experience",
                requested: experience_raw.to_string(),
                resolved: experience.slug(),
            });
        }

        let (predictions, source, model, degraded_reason) =
            match self.bridge.try_predict(industry, experience).await {
                Ok(prediction) => {
                    let model = prediction.model_used.clone();
                    let mut predictions =
                        prediction.into_forecasts(industry, experience, self.engine.catalog());
                    predictions.sort_by(|a, b| b.total_growth.total_cmp(&a.total_growth));
                    (predictions, ForecastSource::MlModel, model, None)
                }
                Err(err) => {
                    warn!(
                        bridge = self.bridge.name(),
                        industry = industry.slug(),
                        experience = experience.slug(),
                        error = %err,
                        "external model unavailable, using synthetic forecasts"
                    );
                    let predictions = self.engine.forecast(industry, experience);
                    (predictions, ForecastSource::Synthetic, None, Some(err.to_string()))
                }
            };

        info!(
            industry = industry.slug(),
            experience = experience.slug(),
            jobs = predictions.len(),
            ?source,
            "forecast generated"
        );

        Ok(ForecastResponse {
            summary: ForecastSummary::from_forecasts(&predictions),
            metadata: ForecastMetadata {
                source,
                industry,
                experience,
                timestamp: Utc::now(),
                model_used: source == ForecastSource::MlModel,
                model,
                degraded_reason,
                substitutions,
            },
            predictions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_fail_validation() {
        let request = PredictionRequest {
            industry: Some("  ".to_string()),
            experience: Some("mid".to_string()),
        };
        assert!(matches!(request.validated(), Err(AppError::Validation(_))));
        assert!(PredictionRequest::default().validated().is_err());
    }

    #[test]
    fn trimmed_fields_pass_validation() {
        let request = PredictionRequest::new(" finance ", "senior");
        let (industry, experience) = request.validated().expect("valid request");
        assert_eq!((industry, experience), ("finance", "senior"));
    }
}
