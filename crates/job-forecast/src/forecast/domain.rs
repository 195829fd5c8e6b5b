use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Education,
    Manufacturing,
    Retail,
    Energy,
    Entertainment,
    Telecommunications,
    Transportation,
}

impl Industry {
    pub const DEFAULT: Self = Self::Technology;

    pub const fn ordered() -> [Self; 10] {
        [
            Self::Technology,
            Self::Healthcare,
            Self::Finance,
            Self::Education,
            Self::Manufacturing,
            Self::Retail,
            Self::Energy,
            Self::Entertainment,
            Self::Telecommunications,
            Self::Transportation,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Finance => "finance",
            Self::Education => "education",
            Self::Manufacturing => "manufacturing",
            Self::Retail => "retail",
            Self::Energy => "energy",
            Self::Entertainment => "entertainment",
            Self::Telecommunications => "telecommunications",
            Self::Transportation => "transportation",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Education => "Education",
            Self::Manufacturing => "Manufacturing",
            Self::Retail => "Retail",
            Self::Energy => "Energy",
            Self::Entertainment => "Entertainment",
            Self::Telecommunications => "Telecommunications",
            Self::Transportation => "Transportation",
        }
    }

    /// Name used by the external model artifacts (`job_forecasting_arima_<label>_<tier>.pkl`).
    pub const fn model_label(self) -> &'static str {
        self.label()
    }

    /// Case-insensitive lookup by slug or label.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized == "telecom" {
            return Some(Self::Telecommunications);
        }
        Self::ordered()
            .into_iter()
            .find(|industry| industry.slug() == normalized)
    }

    /// Resolves a raw selection, substituting [`Industry::DEFAULT`] for unknown values.
    /// The flag reports whether the substitution happened.
    pub fn resolve(raw: &str) -> (Self, bool) {
        match Self::parse(raw) {
            Some(industry) => (industry, false),
            None => (Self::DEFAULT, true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    Entry,
    Mid,
    Senior,
    #[serde(alias = "expert")]
    Executive,
}

impl ExperienceTier {
    pub const DEFAULT: Self = Self::Mid;

    pub const fn ordered() -> [Self; 4] {
        [Self::Entry, Self::Mid, Self::Senior, Self::Executive]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Executive => "executive",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry Level",
            Self::Mid => "Mid Level",
            Self::Senior => "Senior Level",
            Self::Executive => "Executive",
        }
    }

    pub const fn model_label(self) -> &'static str {
        match self {
            Self::Entry => "Entry-level",
            Self::Mid => "Mid-level",
            Self::Senior => "Senior-level",
            Self::Executive => "Executive",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "entry" | "entry-level" | "entry_level" => Some(Self::Entry),
            "mid" | "mid-level" | "mid_level" => Some(Self::Mid),
            "senior" | "senior-level" | "senior_level" => Some(Self::Senior),
            "executive" | "expert" => Some(Self::Executive),
            _ => None,
        }
    }

    pub fn resolve(raw: &str) -> (Self, bool) {
        match Self::parse(raw) {
            Some(tier) => (tier, false),
            None => (Self::DEFAULT, true),
        }
    }

    pub const fn multiplier(self) -> ExperienceMultiplier {
        match self {
            Self::Entry => ExperienceMultiplier {
                demand: 0.8,
                growth: 1.2,
                salary_min: 0.7,
                salary_max: 0.8,
            },
            Self::Mid => ExperienceMultiplier {
                demand: 1.0,
                growth: 1.0,
                salary_min: 1.0,
                salary_max: 1.0,
            },
            Self::Senior => ExperienceMultiplier {
                demand: 1.1,
                growth: 0.9,
                salary_min: 1.3,
                salary_max: 1.4,
            },
            Self::Executive => ExperienceMultiplier {
                demand: 0.9,
                growth: 0.8,
                salary_min: 1.6,
                salary_max: 1.8,
            },
        }
    }
}

/// Scaling applied to catalog figures for a given experience tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceMultiplier {
    pub demand: f64,
    pub growth: f64,
    pub salary_min: f64,
    pub salary_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathwayKind {
    Certification,
    Degree,
    Course,
    Bootcamp,
}

impl PathwayKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Certification => "certification",
            Self::Degree => "degree",
            Self::Course => "course",
            Self::Bootcamp => "bootcamp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathwayFormat {
    Online,
    Hybrid,
    InPerson,
}

impl PathwayFormat {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Hybrid => "hybrid",
            Self::InPerson => "in person",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPathway {
    pub title: &'static str,
    pub kind: PathwayKind,
    pub institution: &'static str,
    pub duration: &'static str,
    pub format: PathwayFormat,
    pub description: &'static str,
    pub cost: &'static str,
    pub alignment_score: u8,
    pub skills: Vec<&'static str>,
}

/// Annual salary bounds in USD before experience scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBand {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    pub month: String,
    pub demand: f64,
}

/// Forecast for one job title. Built fresh per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobForecast {
    pub job_title: String,
    pub current_demand: f64,
    pub year1_growth: f64,
    pub year2_growth: f64,
    pub total_growth: f64,
    pub confidence_score: f64,
    pub salary_range: SalaryRange,
    pub skills: Vec<String>,
    pub education_pathways: Vec<EducationPathway>,
    pub monthly_predictions: Vec<MonthlyPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub job_count: usize,
    pub average_total_growth: f64,
    pub high_growth_jobs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_job: Option<String>,
}

/// Total growth at or above this percentage counts as a high-growth role.
pub const HIGH_GROWTH_THRESHOLD: f64 = 10.0;

impl ForecastSummary {
    pub fn from_forecasts(forecasts: &[JobForecast]) -> Self {
        let job_count = forecasts.len();
        let average_total_growth = if job_count == 0 {
            0.0
        } else {
            let sum: f64 = forecasts.iter().map(|f| f.total_growth).sum();
            round2(sum / job_count as f64)
        };
        let high_growth_jobs = forecasts
            .iter()
            .filter(|f| f.total_growth >= HIGH_GROWTH_THRESHOLD)
            .count();
        let top_job = forecasts
            .iter()
            .fold(None::<&JobForecast>, |best, candidate| match best {
                Some(current) if current.total_growth >= candidate.total_growth => Some(current),
                _ => Some(candidate),
            })
            .map(|f| f.job_title.clone());

        Self {
            job_count,
            average_total_growth,
            high_growth_jobs,
            top_job,
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_parse_is_case_insensitive() {
        assert_eq!(Industry::parse(" Healthcare "), Some(Industry::Healthcare));
        assert_eq!(Industry::parse("TELECOM"), Some(Industry::Telecommunications));
        assert_eq!(Industry::parse("agriculture"), None);
    }

    #[test]
    fn unknown_values_resolve_to_defaults() {
        assert_eq!(Industry::resolve("unknown-industry"), (Industry::Technology, true));
        assert_eq!(ExperienceTier::resolve("wizard"), (ExperienceTier::Mid, true));
        assert_eq!(ExperienceTier::resolve("senior"), (ExperienceTier::Senior, false));
    }

    #[test]
    fn expert_is_an_alias_for_executive() {
        assert_eq!(ExperienceTier::parse("expert"), Some(ExperienceTier::Executive));
        let tier: ExperienceTier = serde_json::from_str("\"expert\"").expect("alias decodes");
        assert_eq!(tier, ExperienceTier::Executive);
    }

    #[test]
    fn summary_of_empty_forecast_list_is_zeroed() {
        let summary = ForecastSummary::from_forecasts(&[]);
        assert_eq!(summary.job_count, 0);
        assert_eq!(summary.average_total_growth, 0.0);
        assert!(summary.top_job.is_none());
    }
}
