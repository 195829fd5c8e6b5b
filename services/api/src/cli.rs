use crate::report::{run_catalog, run_forecast, ForecastArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_forecast::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Job Demand Forecast",
    about = "Serve or print job demand forecasts by industry and experience level",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print a forecast for one industry and experience level
    Forecast(ForecastArgs),
    /// List the industries and job titles the catalog covers
    Catalog,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Forecast(args) => run_forecast(args).await,
        Command::Catalog => {
            run_catalog();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_command_parses_flags() {
        let cli = Cli::try_parse_from([
            "job-forecast-api",
            "forecast",
            "--industry",
            "finance",
            "--experience",
            "senior",
            "--model",
            "--csv",
            "out.csv",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Forecast(args)) => {
                assert_eq!(args.industry, "finance");
                assert_eq!(args.experience, "senior");
                assert!(args.model);
                assert!(!args.json);
                assert_eq!(args.csv.as_deref(), Some(std::path::Path::new("out.csv")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["job-forecast-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
