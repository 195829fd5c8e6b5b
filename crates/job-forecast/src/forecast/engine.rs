use tracing::debug;

use super::catalog::{Catalog, CatalogEntry};
use super::curve::{generate_monthly_series_with, GrowthPolicy};
use super::domain::{ExperienceTier, Industry, JobForecast};
use super::salary::resolve_salary;

pub const MIN_CONFIDENCE: f64 = 65.0;
pub const MAX_CONFIDENCE: f64 = 95.0;

/// Stateless orchestrator turning catalog rows into ranked forecasts.
#[derive(Debug, Clone, Copy)]
pub struct ForecastEngine {
    catalog: &'static Catalog,
    policy: GrowthPolicy,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl ForecastEngine {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            policy: GrowthPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Forecast for raw selections. Unknown industries fall back to technology and
    /// unknown tiers to mid, so a recognised catalog always yields results.
    pub fn predict(&self, industry: &str, tier: &str) -> Vec<JobForecast> {
        let (resolved_industry, industry_fallback) = Industry::resolve(industry);
        let (resolved_tier, tier_fallback) = ExperienceTier::resolve(tier);
        if industry_fallback {
            debug!(requested = industry, fallback = resolved_industry.slug(), "unknown industry");
        }
        if tier_fallback {
            debug!(requested = tier, fallback = resolved_tier.slug(), "unknown experience tier");
        }
        self.forecast(resolved_industry, resolved_tier)
    }

    /// Ranked by total growth, highest first; ties keep catalog order.
    pub fn forecast(&self, industry: Industry, tier: ExperienceTier) -> Vec<JobForecast> {
        let mut forecasts: Vec<JobForecast> = self
            .catalog
            .entries_for(industry)
            .iter()
            .map(|entry| self.forecast_entry(entry, tier))
            .collect();

        // sort_by is stable
        forecasts.sort_by(|a, b| b.total_growth.total_cmp(&a.total_growth));
        forecasts
    }

    fn forecast_entry(&self, entry: &CatalogEntry, tier: ExperienceTier) -> JobForecast {
        let multiplier = tier.multiplier();
        let current_demand = (f64::from(entry.base_demand) * multiplier.demand).round();
        let year1_growth = (f64::from(entry.growth_range.0) * multiplier.growth).round();
        let year2_growth = (f64::from(entry.growth_range.1) * multiplier.growth).round();
        let total_growth = year1_growth + year2_growth;

        JobForecast {
            job_title: entry.job_title.to_string(),
            current_demand,
            year1_growth,
            year2_growth,
            total_growth,
            confidence_score: confidence_score(current_demand, total_growth),
            salary_range: resolve_salary(entry.salary, tier),
            skills: entry.skills.iter().map(|skill| skill.to_string()).collect(),
            education_pathways: entry.education_pathways.clone(),
            monthly_predictions: generate_monthly_series_with(
                self.policy,
                current_demand,
                year1_growth,
                year2_growth,
            ),
        }
    }
}

/// Heuristic confidence: peaks for roles near 15% two-year growth and rewards high demand.
pub fn confidence_score(current_demand: f64, total_growth: f64) -> f64 {
    let raw = 85.0 - (total_growth - 15.0).abs() * 2.0 + (current_demand - 70.0) * 0.3;
    raw.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(confidence_score(100.0, 15.0), 95.0);
        assert_eq!(confidence_score(40.0, 80.0), 65.0);
        // 85 - 10 + 2.4 = 77.4
        assert_eq!(confidence_score(78.0, 20.0), 77.0);
    }

    #[test]
    fn entry_software_engineer_matches_reference_numbers() {
        let forecasts =
            ForecastEngine::default().forecast(Industry::Technology, ExperienceTier::Entry);
        let engineer = forecasts
            .iter()
            .find(|f| f.job_title == "Software Engineer")
            .expect("software engineer forecast");

        assert_eq!(engineer.current_demand, 68.0);
        assert_eq!(engineer.year1_growth, 14.0);
        assert_eq!(engineer.year2_growth, 22.0);
        assert_eq!(engineer.total_growth, 36.0);
        // 85 - 42 - 0.6 = 42.4, clamped
        assert_eq!(engineer.confidence_score, 65.0);
        assert_eq!(engineer.salary_range.display, "$56,000 - $120,000");
    }

    #[test]
    fn cumulative_policy_changes_only_the_curve() {
        let per_year = ForecastEngine::default().forecast(Industry::Finance, ExperienceTier::Mid);
        let cumulative = ForecastEngine::default()
            .with_policy(GrowthPolicy::Cumulative)
            .forecast(Industry::Finance, ExperienceTier::Mid);

        assert_eq!(per_year.len(), cumulative.len());
        for (a, b) in per_year.iter().zip(&cumulative) {
            assert_eq!(a.job_title, b.job_title);
            assert_eq!(a.total_growth, b.total_growth);
            assert_eq!(a.monthly_predictions[..12], b.monthly_predictions[..12]);
        }
    }
}
