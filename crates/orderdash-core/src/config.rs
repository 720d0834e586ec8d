//! Configuration management for `orderdash`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

/// Environment variable prefix, e.g. `ORDERDASH_TABLE__PAGE_SIZE=10`
pub const ENV_PREFIX: &str = "ORDERDASH";

/// Rows per page of the order table
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Entries kept by top-N views such as top customers
pub const DEFAULT_TOP_N: usize = 5;

/// Entries kept by the item frequency chart
pub const ITEM_FREQUENCY_LIMIT: usize = 6;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Dataset location
    #[serde(default)]
    #[validate(nested)]
    pub data: DataConfig,

    /// Order table defaults
    #[serde(default)]
    #[validate(nested)]
    pub table: TableConfig,

    /// Aggregation limits
    #[serde(default)]
    #[validate(nested)]
    pub analytics: AnalyticsConfig,

    /// Presentation details shared by front ends
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// Dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DataConfig {
    /// Path of the JSON order export
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

/// Order table configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TableConfig {
    /// Rows per page
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 1000))]
    pub page_size: usize,
}

/// Aggregation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyticsConfig {
    /// Entries kept by top-N views such as top customers
    #[serde(default = "default_top_n")]
    #[validate(range(min = 1, max = 100))]
    pub top_n: usize,

    /// Entries kept by the item frequency chart
    #[serde(default = "default_item_limit")]
    #[validate(range(min = 1, max = 100))]
    pub item_limit: usize,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol printed in front of monetary amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (pretty, compact or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_data_path() -> PathBuf {
    PathBuf::from("data/orders.json")
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

const fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

const fn default_item_limit() -> usize {
    ITEM_FREQUENCY_LIMIT
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            item_limit: default_item_limit(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from `orderdash.toml` (optional) and environment
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed or fails validation.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (required when given) layered
    /// under `ORDERDASH_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or if the
    /// resolved configuration fails validation.
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        let file = path.map_or_else(
            || config::File::with_name("orderdash").required(false),
            |p| config::File::from(p).required(true),
        );

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        tracing::debug!(
            data = %config.data.path.display(),
            page_size = config.table.page_size,
            top_n = config.analytics.top_n,
            "Configuration loaded"
        );
        Ok(config)
    }
}
