//! Job demand forecasting: static catalog, curve generation, ranking, and the
//! optional external model path.

pub mod bridge;
pub mod catalog;
mod curve;
pub mod domain;
mod engine;
pub mod export;
pub mod router;
mod salary;
pub mod service;

pub use bridge::{
    DisabledModelBridge, ModelBridge, ModelBridgeError, ModelPrediction, ScriptModelBridge,
};
pub use catalog::{Catalog, CatalogEntry};
pub use curve::{
    generate_monthly_series, generate_monthly_series_with, GrowthPolicy, FORECAST_MONTHS,
};
pub use domain::{
    EducationPathway, ExperienceMultiplier, ExperienceTier, ForecastSummary, Industry,
    JobForecast, MonthlyPoint, PathwayFormat, PathwayKind, SalaryBand, SalaryRange,
};
pub use engine::{confidence_score, ForecastEngine, MAX_CONFIDENCE, MIN_CONFIDENCE};
pub use export::write_monthly_csv;
pub use router::forecast_router;
pub use salary::{resolve_industry_salary, resolve_salary};
pub use service::{
    ForecastMetadata, ForecastResponse, ForecastService, ForecastSource, PredictionRequest,
    Substitution,
};
