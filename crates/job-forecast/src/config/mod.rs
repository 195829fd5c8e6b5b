use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::forecast::GrowthPolicy;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub forecast: ForecastConfig,
    pub model: ModelConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let growth_policy = match env::var("APP_FORECAST_GROWTH_POLICY") {
            Ok(raw) => parse_growth_policy(&raw)?,
            Err(_) => GrowthPolicy::default(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            forecast: ForecastConfig { growth_policy },
            model: ModelConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastConfig {
    pub growth_policy: GrowthPolicy,
}

/// External model process settings. Disabled unless `APP_MODEL_ENABLED` is truthy.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub enabled: bool,
    pub script_path: PathBuf,
    pub models_dir: PathBuf,
    /// Interpreters tried in order until one starts.
    pub interpreters: Vec<String>,
    pub timeout: Duration,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            script_path: PathBuf::from("predict_model.py"),
            models_dir: PathBuf::from("models"),
            interpreters: default_interpreters(),
            timeout: Duration::from_millis(10_000),
        }
    }
}

impl ModelConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let enabled = match env::var("APP_MODEL_ENABLED") {
            Ok(raw) => parse_flag("APP_MODEL_ENABLED", &raw)?,
            Err(_) => defaults.enabled,
        };
        let script_path = env::var("APP_MODEL_SCRIPT")
            .map(PathBuf::from)
            .unwrap_or(defaults.script_path);
        let models_dir = env::var("APP_MODELS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.models_dir);
        let interpreters = match env::var("APP_MODEL_PYTHON") {
            Ok(raw) => {
                let parsed: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|candidate| !candidate.is_empty())
                    .map(str::to_string)
                    .collect();
                if parsed.is_empty() {
                    defaults.interpreters
                } else {
                    parsed
                }
            }
            Err(_) => defaults.interpreters,
        };
        let timeout = match env::var("APP_MODEL_TIMEOUT_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|millis| *millis > 0)
                .map(Duration::from_millis)
                .ok_or(ConfigError::InvalidTimeout)?,
            Err(_) => defaults.timeout,
        };

        Ok(Self {
            enabled,
            script_path,
            models_dir,
            interpreters,
            timeout,
        })
    }
}

fn default_interpreters() -> Vec<String> {
    ["venv/bin/python", "python3", "python"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key }),
    }
}

fn parse_growth_policy(raw: &str) -> Result<GrowthPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "per_year" | "per-year" | "" => Ok(GrowthPolicy::PerYear),
        "cumulative" => Ok(GrowthPolicy::Cumulative),
        _ => Err(ConfigError::InvalidGrowthPolicy),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidFlag { key: &'static str },
    InvalidTimeout,
    InvalidGrowthPolicy,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidFlag { key } => write!(f, "{key} must be true or false"),
            ConfigError::InvalidTimeout => {
                write!(f, "APP_MODEL_TIMEOUT_MS must be a positive number of milliseconds")
            }
            ConfigError::InvalidGrowthPolicy => {
                write!(f, "APP_FORECAST_GROWTH_POLICY must be per_year or cumulative")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidFlag { .. }
            | ConfigError::InvalidTimeout
            | ConfigError::InvalidGrowthPolicy => None,
        }
    }
}
