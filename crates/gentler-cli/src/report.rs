//! Renders the explanation report written at the end of a batch run.

use std::collections::BTreeSet;
use std::fmt;

use gentler_engine::ChangeLedger;

/// File name of the report inside the output directory.
pub const EXPLANATION_FILE: &str = "explanation.txt";

/// Suffix written after every verse key.
const KEY_TERMINATOR: char = '_';

/// The explanation report: a summary line, every changed verse, then every
/// rule with the verses it changed.
#[derive(Debug, Clone, Copy)]
pub struct Explanation<'a> {
    files_processed: usize,
    verses_seen: usize,
    ledger: &'a ChangeLedger,
}

impl<'a> Explanation<'a> {
    /// Creates a report over a finished run.
    #[must_use]
    pub const fn new(files_processed: usize, verses_seen: usize, ledger: &'a ChangeLedger) -> Self {
        Self {
            files_processed,
            verses_seen,
            ledger,
        }
    }
}

impl fmt::Display for Explanation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "#{} files processed, {} verses changed out of {}.",
            self.files_processed,
            self.ledger.verse_changes().len(),
            self.verses_seen
        )?;
        writeln!(f, "{}", KeyList(self.ledger.verse_changes()))?;
        writeln!(f)?;
        write!(f, "{}", RuleEntries(self.ledger))
    }
}

/// Every rule key followed by the verses it changed, one rule per
/// paragraph.
#[derive(Debug, Clone, Copy)]
pub struct RuleEntries<'a>(pub &'a ChangeLedger);

impl fmt::Display for RuleEntries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rule, verses) in self.0.word_changes() {
            writeln!(f, "{rule}: {}", KeyList(verses))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

struct KeyList<'a>(&'a BTreeSet<String>);

impl fmt::Display for KeyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.0 {
            write!(f, "{key}{KEY_TERMINATOR}")?;
        }
        Ok(())
    }
}
