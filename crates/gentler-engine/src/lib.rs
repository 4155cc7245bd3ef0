//! Word-modernization engine for archaic scripture text.
//!
//! The engine takes one verse line at a time, walks an ordered rule table and
//! either annotates an archaic word in place (`fathered [begat]`) or silently
//! replaces it (`honour` to `honor`). Every change is recorded in a
//! [`ChangeLedger`] so a batch run can report which rule fired in which verse.
//!
//! # Core types
//!
//! - [`LineContext`]: a verse split into its reference key and editable body
//! - [`find_word_index`]: bracket-aware whole-word phrase lookup
//! - [`modernize_word`] and [`replace_word`]: the two replacement policies
//! - [`ChangeLedger`]: per-rule and per-verse change provenance
//! - [`RuleTable`], [`RuleRow`], [`Rule`] and [`RuleMode`]: the rule model
//! - [`Modernizer`]: applies a rule table to whole lines
//!
//! The engine performs no I/O and is meant for single-threaded batch use: the
//! ledger is a plain value passed by `&mut`. Callers that want to fan work out
//! across threads keep one ledger per worker and combine them with
//! [`ChangeLedger::merge`].
//!
//! # Example
//!
//! ```
//! use gentler_engine::{ChangeLedger, EngineConfig, Modernizer, RuleRow, RuleTable};
//!
//! let table: RuleTable = [RuleRow::from_cells(&["begat", "fathered"])]
//!     .into_iter()
//!     .collect();
//! let modernizer = Modernizer::new(table, EngineConfig::default());
//! let mut ledger = ChangeLedger::default();
//!
//! let line = modernizer.upgrade_line("40", "MAT 1:2  Abraham begat Isaac", &mut ledger);
//! assert_eq!(line, "MAT 1:2  Abraham fathered [begat] Isaac");
//! assert!(ledger.verse_changes().contains("40MAT 1:2"));
//! ```

mod config;
mod context;
mod ledger;
mod locator;
mod modernizer;
mod rule;
mod substitution;

pub use config::EngineConfig;
pub use context::{LineContext, NO_REFERENCE};
pub use ledger::{ChangeLedger, rule_key};
pub use locator::{find_word_index, find_word_index_from};
pub use modernizer::Modernizer;
pub use rule::{
    COMMENT_PREFIX, NEW_COLUMN, OLD_COLUMN, RESTRICTED_PREFIX, RowCells, Rule, RuleMode, RuleRow,
    RuleTable, SILENT_VERB, VERB_COLUMN,
};
pub use substitution::{modernize_word, replace_word};

#[cfg(test)]
mod tests;
