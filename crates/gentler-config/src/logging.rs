//! Log output formats for the `gentler` binary.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How log events are written to stderr.
///
/// Named in snake case by `--log-format`, `GENTLER_LOG_FORMAT` or the
/// `log_format` key of a configuration file; `FromStr` accepts any case.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event, fields flattened, for log collectors.
    Json,
    /// One short line per event, for reading batch runs at a terminal.
    #[default]
    Compact,
}

/// Error returned when text names no [`LogFormat`].
pub type LogFormatParseError = strum::ParseError;
