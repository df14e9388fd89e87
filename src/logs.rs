//! Logging configuration

use std::env;

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::errors::RedeployError;

/// Log level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_filter_string(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Logging options
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Log level (overridable via RUST_LOG)
    pub log_level: LogLevel,

    /// Enable JSON format
    pub json_format: bool,
}

impl LogOptions {
    /// Build logging options from the process environment
    pub fn from_env() -> Result<Self, RedeployError> {
        let log_level = match env::var("LOG_LEVEL") {
            Ok(level) => level.parse().map_err(RedeployError::ConfigError)?,
            Err(_) => LogLevel::default(),
        };
        let json_format = env::var("LOG_JSON").map(|v| v == "true").unwrap_or(false);

        Ok(Self {
            log_level,
            json_format,
        })
    }
}

/// Initialize logging
pub fn init_logging(options: LogOptions) -> Result<(), RedeployError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.log_level.to_filter_string()));

    let subscriber = tracing_subscriber::registry().with(filter);

    if options.json_format {
        subscriber
            .with(fmt::layer().json())
            .try_init()
            .map_err(|e| RedeployError::ConfigError(e.to_string()))?;
    } else {
        subscriber
            .with(fmt::layer())
            .try_init()
            .map_err(|e| RedeployError::ConfigError(e.to_string()))?;
    }

    Ok(())
}
