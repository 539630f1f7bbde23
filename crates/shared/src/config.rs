//! Application configuration management.

use chrono::NaiveDate;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Explorer configuration.
    #[serde(default)]
    pub explorer: ExplorerConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "kairos=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

/// Explorer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerConfig {
    /// Date to explore; today's local date when absent.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// Upper bound on units in any enumerated sub-period.
    #[serde(default = "default_max_units_in_permutation")]
    pub max_units_in_permutation: usize,
}

fn default_max_units_in_permutation() -> usize {
    2
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            as_of: None,
            max_units_in_permutation: default_max_units_in_permutation(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("KAIROS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
