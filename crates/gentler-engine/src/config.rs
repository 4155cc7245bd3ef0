//! Engine limits.

/// Default cap on silent replacements made by a single rule in one line.
const DEFAULT_MAX_REPLACEMENTS_PER_RULE: usize = 10_000;

/// Limits applied while rules run.
///
/// The silent-replace loop rescans the whole line after every replacement,
/// so a rule whose new phrase contains the old one (`lord` to `lord god`)
/// would otherwise never finish. The cap bounds that loop.
///
/// # Example
///
/// ```
/// use gentler_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.max_replacements_per_rule(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum silent replacements a single rule may make in one line.
    max_replacements_per_rule: usize,
}

impl EngineConfig {
    /// Creates an engine configuration with an explicit replacement cap.
    #[must_use]
    pub const fn new(max_replacements_per_rule: usize) -> Self {
        Self {
            max_replacements_per_rule,
        }
    }

    /// Returns the maximum silent replacements per rule and line.
    #[must_use]
    pub const fn max_replacements_per_rule(&self) -> usize {
        self.max_replacements_per_rule
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REPLACEMENTS_PER_RULE)
    }
}
