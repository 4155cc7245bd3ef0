use crate::logging::LogFormat;

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default cap on silent replacements per rule and line.
pub const DEFAULT_MAX_REPLACEMENTS_PER_RULE: usize = 10_000;

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Default silent-replacement cap.
#[must_use]
pub const fn default_max_replacements_per_rule() -> usize {
    DEFAULT_MAX_REPLACEMENTS_PER_RULE
}
