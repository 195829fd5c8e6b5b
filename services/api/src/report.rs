use crate::infra::ConfiguredBridge;
use clap::Args;
use job_forecast::config::AppConfig;
use job_forecast::error::AppError;
use job_forecast::forecast::{
    write_monthly_csv, Catalog, ForecastEngine, ForecastResponse, ForecastService,
    ForecastSource, Industry, PredictionRequest,
};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ForecastArgs {
    /// Industry slug or label; unknown values fall back to technology
    #[arg(long)]
    pub(crate) industry: String,
    /// Experience level (entry, mid, senior, executive); unknown values fall back to mid
    #[arg(long)]
    pub(crate) experience: String,
    /// Try the external model script even when APP_MODEL_ENABLED is off
    #[arg(long)]
    pub(crate) model: bool,
    /// Write the 24-month demand curves to a CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Print the JSON payload served by POST /predict instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_forecast(args: ForecastArgs) -> Result<(), AppError> {
    let ForecastArgs {
        industry,
        experience,
        model,
        csv,
        json,
    } = args;

    let config = AppConfig::load()?;
    let mut model_config = config.model.clone();
    model_config.enabled |= model;

    let bridge = Arc::new(ConfiguredBridge::from_config(&model_config));
    let engine = ForecastEngine::default().with_policy(config.forecast.growth_policy);
    let service = ForecastService::new(engine, bridge);
    let response = service
        .predict(&PredictionRequest::new(industry, experience))
        .await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &response).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        write_forecast(&mut out, &response)?;
    }

    if let Some(path) = csv {
        let file = File::create(&path)?;
        write_monthly_csv(file, &response.predictions)?;
        if !json {
            writeln!(out, "\nMonthly demand written to {}", path.display())?;
        }
    }

    Ok(())
}

pub(crate) fn run_catalog() {
    let catalog = Catalog::standard();
    let total: usize = Industry::ordered()
        .into_iter()
        .map(|industry| catalog.job_count(industry))
        .sum();
    println!("Forecast catalog ({total} roles)");
    for industry in Industry::ordered() {
        println!("- {} ({}):", industry.label(), industry.slug());
        for entry in catalog.entries_for(industry) {
            println!(
                "    {} | base demand {} | growth {}-{}%",
                entry.job_title, entry.base_demand, entry.growth_range.0, entry.growth_range.1
            );
        }
    }
}

pub(crate) fn write_forecast<W: Write>(out: &mut W, response: &ForecastResponse) -> io::Result<()> {
    let metadata = &response.metadata;
    writeln!(
        out,
        "Job demand forecast: {} / {}",
        metadata.industry.label(),
        metadata.experience.label()
    )?;
    match (metadata.source, metadata.degraded_reason.as_deref()) {
        (ForecastSource::MlModel, _) => writeln!(
            out,
            "Source: external model ({})",
            metadata.model.as_deref().unwrap_or("unnamed")
        )?,
        (ForecastSource::Synthetic, Some(reason)) => {
            writeln!(out, "Source: synthetic ({reason})")?
        }
        (ForecastSource::Synthetic, None) => writeln!(out, "Source: synthetic")?,
    }
    for substitution in &metadata.substitutions {
        writeln!(
            out,
            "Unknown {} '{}', using {}",
            substitution.field, substitution.requested, substitution.resolved
        )?;
    }

    let summary = &response.summary;
    writeln!(
        out,
        "\n{} roles | avg total growth {:.1}% | {} high-growth | top: {}",
        summary.job_count,
        summary.average_total_growth,
        summary.high_growth_jobs,
        summary.top_job.as_deref().unwrap_or("-")
    )?;

    for forecast in &response.predictions {
        writeln!(out, "\n{}", forecast.job_title)?;
        writeln!(
            out,
            "  demand {} | growth {}% + {}% = {}% | confidence {}",
            forecast.current_demand,
            forecast.year1_growth,
            forecast.year2_growth,
            forecast.total_growth,
            forecast.confidence_score
        )?;
        writeln!(out, "  salary {}", forecast.salary_range.display)?;
        writeln!(out, "  skills: {}", forecast.skills.join(", "))?;
        if let (Some(first), Some(last)) = (
            forecast.monthly_predictions.first(),
            forecast.monthly_predictions.last(),
        ) {
            writeln!(
                out,
                "  demand curve: {} {:.1} -> {} {:.1}",
                first.month, first.demand, last.month, last.demand
            )?;
        }
        for pathway in &forecast.education_pathways {
            writeln!(
                out,
                "  - {} ({}, {} {}, {}, {}) alignment {}",
                pathway.title,
                pathway.institution,
                pathway.format.label(),
                pathway.kind.label(),
                pathway.duration,
                pathway.cost,
                pathway.alignment_score
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_forecast::forecast::DisabledModelBridge;

    async fn render(industry: &str, experience: &str) -> String {
        let service =
            ForecastService::new(ForecastEngine::default(), Arc::new(DisabledModelBridge));
        let response = service
            .predict(&PredictionRequest::new(industry, experience))
            .await
            .expect("forecast succeeds");
        let mut buffer = Vec::new();
        write_forecast(&mut buffer, &response).expect("report renders");
        String::from_utf8(buffer).expect("utf8 report")
    }

    #[tokio::test]
    async fn report_lists_every_role() {
        let text = render("healthcare", "mid").await;
        assert!(text.starts_with("Job demand forecast: Healthcare / Mid Level"));
        assert!(text.contains("Source: synthetic (external model disabled)"));
        assert!(text.contains("Registered Nurse"));
        assert!(text.contains("salary $60,000 - $85,000"));
    }

    #[tokio::test]
    async fn report_mentions_substitutions() {
        let text = render("aerospace", "mid").await;
        assert!(text.contains("Unknown industry 'aerospace', using technology"));
    }

    #[tokio::test]
    async fn report_covers_broad_industries() {
        let text = render("retail", "senior").await;
        assert!(text.contains("3 roles"));
        assert!(text.contains("Store Manager"));
        // 35,000 * 1.3 and 80,000 * 1.4
        assert!(text.contains("salary $45,500 - $112,000"));
    }
}
