//! Shared configuration for the Gentler toolchain.
//!
//! Configuration is layered by `ortho_config`: built-in defaults, then a
//! configuration file (`--config-path` or `GENTLER_CONFIG_PATH`), then
//! `GENTLER_*` environment variables, then command-line flags. Later layers
//! win.
//!
//! | Setting | Flag | Default |
//! |---------|------|---------|
//! | log filter | `--log-filter` | `info` |
//! | log format | `--log-format` | `compact` |
//! | silent replacement cap | `--max-replacements-per-rule` | `10000` |

use std::ffi::OsString;
use std::sync::Arc;

use gentler_engine::EngineConfig;
use ortho_config::{OrthoConfig, OrthoError};
use serde::{Deserialize, Serialize};

mod defaults;
mod logging;

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_MAX_REPLACEMENTS_PER_RULE, default_log_filter,
    default_log_filter_string, default_log_format, default_max_replacements_per_rule,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Configuration flags understood by [`Config::load_from_args`].
///
/// MAINTENANCE: keep in sync with the fields of [`Config`].
pub const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--max-replacements-per-rule",
];

/// Runtime configuration for the `gentler` binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "GENTLER")]
pub struct Config {
    /// `tracing` filter expression, for example `info` or
    /// `gentler_engine=debug`.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format of log events.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Upper bound on silent replacements a single rule makes in one line.
    #[ortho_config(default = default_max_replacements_per_rule())]
    pub max_replacements_per_rule: usize,
}

impl Config {
    /// Loads configuration from defaults, files, environment and `args`.
    ///
    /// The first element of `args` is the program name.
    ///
    /// # Errors
    ///
    /// Returns the loader's error when a layer is malformed or a value does
    /// not parse.
    pub fn load_from_args<I>(args: I) -> Result<Self, Arc<OrthoError>>
    where
        I: IntoIterator<Item = OsString>,
    {
        <Self as OrthoConfig>::load_from_iter(args)
    }

    /// Returns the log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the engine limits derived from this configuration.
    #[must_use]
    pub const fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.max_replacements_per_rule)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            max_replacements_per_rule: default_max_replacements_per_rule(),
        }
    }
}
