use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::bridge::ModelBridge;
use super::domain::{ExperienceTier, Industry, SalaryRange};
use super::salary::resolve_industry_salary;
use super::service::{ForecastResponse, ForecastService, PredictionRequest};
use crate::error::AppError;

/// Router builder exposing the prediction and catalog endpoints.
pub fn forecast_router<B>(service: Arc<ForecastService<B>>) -> Router
where
    B: ModelBridge + 'static,
{
    Router::new()
        .route("/predict", post(predict_handler::<B>))
        .route("/api/v1/forecast", post(predict_handler::<B>))
        .route("/api/v1/catalog/industries", get(industries_handler::<B>))
        .with_state(service)
}

pub(crate) async fn predict_handler<B>(
    State(service): State<Arc<ForecastService<B>>>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<ForecastResponse>, AppError>
where
    B: ModelBridge + 'static,
{
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let response = service.predict(&request).await?;
    Ok(Json(response))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryView {
    pub slug: &'static str,
    pub label: &'static str,
    pub job_count: usize,
    pub job_titles: Vec<&'static str>,
    /// Mid-level band for the industry as a whole.
    pub base_salary: SalaryRange,
}

pub(crate) async fn industries_handler<B>(
    State(service): State<Arc<ForecastService<B>>>,
) -> Json<Vec<IndustryView>>
where
    B: ModelBridge + 'static,
{
    let catalog = service.engine().catalog();
    let views = Industry::ordered()
        .into_iter()
        .map(|industry| {
            let entries = catalog.entries_for(industry);
            IndustryView {
                slug: industry.slug(),
                label: industry.label(),
                job_count: entries.len(),
                job_titles: entries.iter().map(|entry| entry.job_title).collect(),
                base_salary: resolve_industry_salary(industry, ExperienceTier::Mid),
            }
        })
        .collect();
    Json(views)
}
