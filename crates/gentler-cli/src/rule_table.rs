//! Reads rule tables from tab-separated text.
//!
//! Each line is one row: old phrase, new phrase and an optional verb,
//! separated by tabs. Rows are classified by [`RuleRow::from_cells`], so a
//! blank line or a `#` old phrase is skipped and a row with a blank new
//! phrase ends the table.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use gentler_engine::{RuleRow, RuleTable};
use thiserror::Error;
use tracing::info;

/// Column separator in rule table files.
const CELL_SEPARATOR: char = '\t';

/// Errors raised while reading a rule table.
#[derive(Debug, Error)]
pub enum RuleTableError {
    /// The file could not be read as UTF-8 text.
    #[error("failed to read rule table '{path}': {source}")]
    Read {
        /// The rule table path.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Reads and classifies the rule table at `path`.
///
/// # Errors
///
/// Returns [`RuleTableError::Read`] when the file cannot be read.
pub fn read_rule_table(path: &Utf8Path) -> Result<RuleTable, RuleTableError> {
    let text = fs::read_to_string(path).map_err(|source| RuleTableError::Read {
        path: path.to_owned(),
        source,
    })?;
    let table = parse_rule_table(&text);
    info!(
        path = %path,
        rows = table.len(),
        rules = table.active_rules().count(),
        "loaded rule table"
    );
    Ok(table)
}

/// Classifies every line of `text` as a rule row.
#[must_use]
pub fn parse_rule_table(text: &str) -> RuleTable {
    text.lines()
        .map(|line| {
            let cells: Vec<&str> = line.split(CELL_SEPARATOR).collect();
            RuleRow::from_cells(&cells)
        })
        .collect()
}
