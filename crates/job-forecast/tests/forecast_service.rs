use std::sync::Arc;

use async_trait::async_trait;
use job_forecast::error::AppError;
use job_forecast::forecast::{
    Catalog, DisabledModelBridge, ExperienceTier, ForecastEngine, ForecastService, ForecastSource,
    Industry, ModelBridge, ModelBridgeError, ModelPrediction, PredictionRequest,
};

struct StaticBridge(ModelPrediction);

#[async_trait]
impl ModelBridge for StaticBridge {
    fn name(&self) -> &str {
        "static"
    }

    async fn try_predict(
        &self,
        _industry: Industry,
        _tier: ExperienceTier,
    ) -> Result<ModelPrediction, ModelBridgeError> {
        Ok(self.0.clone())
    }
}

struct FailingBridge;

#[async_trait]
impl ModelBridge for FailingBridge {
    fn name(&self) -> &str {
        "failing"
    }

    async fn try_predict(
        &self,
        _industry: Industry,
        _tier: ExperienceTier,
    ) -> Result<ModelPrediction, ModelBridgeError> {
        Err(ModelBridgeError::Exit {
            code: Some(1),
            stderr: "Traceback (most recent call last)".to_string(),
        })
    }
}

fn model_prediction() -> ModelPrediction {
    ModelPrediction {
        current_demand: 74.0,
        year1_growth: 11.5,
        year2_growth: 7.25,
        total_growth: 18.0,
        confidence_score: 95.0,
        monthly_predictions: Vec::new(),
        model_used: Some("job_forecasting_arima_Finance_Senior-level.pkl".to_string()),
    }
}

fn service<B: ModelBridge + 'static>(bridge: B) -> ForecastService<B> {
    ForecastService::new(ForecastEngine::default(), Arc::new(bridge))
}

#[tokio::test]
async fn bridge_failure_degrades_to_synthetic_forecasts() {
    let service = service(FailingBridge);

    let response = service
        .predict(&PredictionRequest::new("finance", "senior"))
        .await
        .expect("forecast succeeds");

    assert_eq!(response.metadata.source, ForecastSource::Synthetic);
    assert!(!response.metadata.model_used);
    assert!(response.metadata.model.is_none());
    let reason = response.metadata.degraded_reason.expect("degraded reason");
    assert!(reason.contains("exited with code"), "{reason}");
    assert_eq!(
        response.predictions,
        ForecastEngine::default().forecast(Industry::Finance, ExperienceTier::Senior)
    );
}

#[tokio::test]
async fn disabled_bridge_reports_why() {
    let response = service(DisabledModelBridge)
        .predict(&PredictionRequest::new("technology", "entry"))
        .await
        .expect("forecast succeeds");

    assert!(!response.metadata.model_used);
    assert_eq!(
        response.metadata.degraded_reason.as_deref(),
        Some("external model disabled")
    );
    assert_eq!(response.summary.job_count, response.predictions.len());
}

#[tokio::test]
async fn model_metrics_are_applied_to_every_title() {
    let response = service(StaticBridge(model_prediction()))
        .predict(&PredictionRequest::new("finance", "senior"))
        .await
        .expect("forecast succeeds");

    assert_eq!(response.metadata.source, ForecastSource::MlModel);
    assert!(response.metadata.model_used);
    assert!(response.metadata.degraded_reason.is_none());
    assert_eq!(
        response.metadata.model.as_deref(),
        Some("job_forecasting_arima_Finance_Senior-level.pkl")
    );

    let catalog_titles: Vec<&str> = Catalog::standard()
        .entries_for(Industry::Finance)
        .iter()
        .map(|entry| entry.job_title)
        .collect();
    let titles: Vec<&str> = response
        .predictions
        .iter()
        .map(|forecast| forecast.job_title.as_str())
        .collect();
    // equal totals keep catalog order
    assert_eq!(titles, catalog_titles);

    for forecast in &response.predictions {
        assert_eq!(forecast.total_growth, 18.75);
        assert_eq!(forecast.current_demand, 74.0);
        assert_eq!(forecast.monthly_predictions.len(), 24);
    }
    assert_eq!(response.summary.high_growth_jobs, titles.len());
}

#[tokio::test]
async fn model_backed_retail_request_returns_forecasts() {
    let response = service(StaticBridge(model_prediction()))
        .predict(&PredictionRequest::new("retail", "mid"))
        .await
        .expect("forecast succeeds");

    assert!(response.metadata.model_used);
    assert_eq!(response.metadata.source, ForecastSource::MlModel);
    assert_eq!(response.predictions.len(), 3);
    assert_eq!(response.summary.job_count, 3);
    for forecast in &response.predictions {
        assert_eq!(forecast.salary_range.display, "$35,000 - $80,000");
        assert_eq!(forecast.total_growth, 18.75);
    }
}

#[tokio::test]
async fn model_backed_requests_cover_every_industry() {
    let service = service(StaticBridge(model_prediction()));
    for industry in Industry::ordered() {
        let response = service
            .predict(&PredictionRequest::new(industry.slug(), "senior"))
            .await
            .expect("forecast succeeds");
        assert!(response.metadata.model_used);
        assert!(!response.predictions.is_empty(), "{}", industry.slug());
    }
}

#[tokio::test]
async fn unknown_selections_are_recorded_as_substitutions() {
    let response = service(DisabledModelBridge)
        .predict(&PredictionRequest::new("aerospace", "wizard"))
        .await
        .expect("forecast succeeds");

    assert_eq!(response.metadata.industry, Industry::Technology);
    assert_eq!(response.metadata.experience, ExperienceTier::Mid);

    let substitutions: Vec<(&str, &str, &str)> = response
        .metadata
        .substitutions
        .iter()
        .map(|sub| (sub.field, sub.requested.as_str(), sub.resolved))
        .collect();
    assert_eq!(
        substitutions,
        vec![
            ("industry", "aerospace", "technology"),
            ("experience", "wizard", "mid"),
        ]
    );
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let request = PredictionRequest {
        industry: Some("technology".to_string()),
        experience: None,
    };

    let err = service(DisabledModelBridge)
        .predict(&request)
        .await
        .unwrap_err();
    match err {
        AppError::Validation(message) => {
            assert_eq!(message, "Industry and experience are required")
        }
        other => panic!("unexpected error: {other}"),
    }
}

mod routing {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use job_forecast::forecast::forecast_router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        forecast_router(Arc::new(service(DisabledModelBridge)))
    }

    fn post_json(uri: &str, body: Body) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .expect("request")
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[tokio::test]
    async fn predict_returns_camel_case_payload() {
        let payload = json!({ "industry": "healthcare", "experience": "mid" });
        let response = build_router()
            .oneshot(post_json(
                "/predict",
                Body::from(serde_json::to_vec(&payload).expect("serialize")),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["metadata"]["modelUsed"], json!(false));
        assert_eq!(body["metadata"]["source"], json!("synthetic"));
        assert_eq!(body["metadata"]["industry"], json!("healthcare"));

        let first = &body["predictions"][0];
        assert!(first.get("jobTitle").is_some());
        assert!(first.get("totalGrowth").is_some());
        assert!(first["salaryRange"].get("display").is_some());
        assert_eq!(
            first["monthlyPredictions"].as_array().map(Vec::len),
            Some(24)
        );
        assert_eq!(body["summary"]["jobCount"], json!(5));
    }

    #[tokio::test]
    async fn versioned_forecast_route_matches_predict() {
        let payload = json!({ "industry": "education", "experience": "expert" });
        let response = build_router()
            .oneshot(post_json(
                "/api/v1/forecast",
                Body::from(serde_json::to_vec(&payload).expect("serialize")),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["metadata"]["experience"], json!("executive"));
    }

    #[tokio::test]
    async fn missing_field_returns_bad_request() {
        let response = build_router()
            .oneshot(post_json(
                "/predict",
                Body::from(r#"{"industry": "technology"}"#),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(
            body["error"],
            json!("Industry and experience are required")
        );
    }

    #[tokio::test]
    async fn malformed_json_returns_bad_request() {
        let response = build_router()
            .oneshot(post_json("/predict", Body::from("{not json")))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn industries_endpoint_lists_every_industry() {
        let response = build_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/catalog/industries")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        let industries = body.as_array().expect("array");
        assert_eq!(industries.len(), 10);
        assert_eq!(industries[0]["slug"], json!("technology"));
        assert_eq!(industries[0]["jobCount"], json!(5));
        let retail = industries
            .iter()
            .find(|entry| entry["slug"] == json!("retail"))
            .expect("retail listed");
        assert_eq!(retail["jobCount"], json!(3));
        assert_eq!(retail["baseSalary"]["display"], json!("$35,000 - $80,000"));
    }
}
