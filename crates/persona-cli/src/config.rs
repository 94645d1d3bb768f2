//! Configuration for the persona CLI

use persona_analysis::AnalyzerConfig;
use serde::{Deserialize, Serialize};

/// Environment prefix; nested keys use `__`, e.g.
/// `PERSONA__ANALYZER__MAX_RECOMMENDATIONS=5`.
const ENV_PREFIX: &str = "PERSONA";

/// Main CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Analyzer configuration
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl CliConfig {
    /// Load configuration: defaults, then the optional file, then environment.
    pub fn load(path: Option<&str>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        builder = builder.add_source(::config::Config::try_from(&CliConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(::config::File::with_name(path).required(true));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
