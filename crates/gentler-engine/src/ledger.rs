//! Provenance of every change made during a run.

use std::collections::{BTreeMap, BTreeSet};

/// Joins the old and new phrase of a rule into its ledger key.
const RULE_KEY_SEPARATOR: &str = " -> ";

/// Builds the ledger key for a rule, for example `begat -> fathered`.
#[must_use]
pub fn rule_key(old: &str, new: &str) -> String {
    format!("{old}{RULE_KEY_SEPARATOR}{new}")
}

/// Records which rules fired in which verses.
///
/// Keys are fully qualified reference keys: the two-digit book number
/// followed by the verse reference, for example `40MAT 1:2`. Both the
/// per-rule sets and the global set are sorted and free of duplicates.
///
/// A ledger only grows. Start a new run with a fresh
/// [`ChangeLedger::default`].
///
/// The type has no interior synchronisation; share it across threads only
/// by giving each worker its own ledger and combining them with
/// [`merge`](Self::merge).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeLedger {
    word_changes: BTreeMap<String, BTreeSet<String>>,
    verse_changes: BTreeSet<String>,
}

impl ChangeLedger {
    /// Notes that the rule `old -> new` changed the verse `full_key`.
    pub fn record(&mut self, full_key: &str, old: &str, new: &str) {
        self.verse_changes.insert(full_key.to_owned());
        self.word_changes
            .entry(rule_key(old, new))
            .or_default()
            .insert(full_key.to_owned());
    }

    /// Returns every verse key touched by any rule.
    #[must_use]
    pub const fn verse_changes(&self) -> &BTreeSet<String> {
        &self.verse_changes
    }

    /// Returns the verse keys touched by each rule, keyed by
    /// [`rule_key`].
    #[must_use]
    pub const fn word_changes(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.word_changes
    }

    /// Returns the verse keys for one rule key, if it ever fired.
    #[must_use]
    pub fn changes_for(&self, rule_key: &str) -> Option<&BTreeSet<String>> {
        self.word_changes.get(rule_key)
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verse_changes.is_empty()
    }

    /// Folds another ledger into this one.
    pub fn merge(&mut self, other: Self) {
        self.verse_changes.extend(other.verse_changes);
        for (key, verses) in other.word_changes {
            self.word_changes.entry(key).or_default().extend(verses);
        }
    }
}
