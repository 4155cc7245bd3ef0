//! Typed rule rows and the ordered rule table.

use crate::context::fold_case;

/// Column holding the archaic phrase.
pub const OLD_COLUMN: usize = 0;
/// Column holding the replacement phrase.
pub const NEW_COLUMN: usize = 1;
/// Column holding the optional mode verb.
pub const VERB_COLUMN: usize = 2;

/// Verb selecting [`RuleMode::SilentReplace`].
pub const SILENT_VERB: &str = "Not mark";
/// Verb prefix selecting [`RuleMode::Restricted`]; the rest of the verb is
/// the scope.
pub const RESTRICTED_PREFIX: &str = "Only in";
/// Marks a row whose old phrase is commented out.
pub const COMMENT_PREFIX: char = '#';

/// Positional access to the cells of one rule-table row.
pub trait RowCells {
    /// Returns the text of `column`, or `None` when the row has no such
    /// cell.
    fn cell(&self, column: usize) -> Option<&str>;
}

impl<S: AsRef<str>> RowCells for [S] {
    fn cell(&self, column: usize) -> Option<&str> {
        self.get(column).map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>, const N: usize> RowCells for [S; N] {
    fn cell(&self, column: usize) -> Option<&str> {
        self.as_slice().cell(column)
    }
}

impl<S: AsRef<str>> RowCells for Vec<S> {
    fn cell(&self, column: usize) -> Option<&str> {
        self.as_slice().cell(column)
    }
}

/// How a rule edits the lines it matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RuleMode {
    /// Replace and keep the original in brackets.
    #[default]
    Modernize,
    /// Replace every occurrence without annotation.
    SilentReplace,
    /// Annotate only in verses whose reference key occurs in `scope`.
    Restricted {
        /// Free text listing the verses the rule is limited to.
        scope: String,
    },
}

impl RuleMode {
    /// Interprets the verb cell of a rule row.
    ///
    /// ```
    /// use gentler_engine::RuleMode;
    ///
    /// assert_eq!(RuleMode::from_verb(Some("Not mark")), RuleMode::SilentReplace);
    /// assert_eq!(
    ///     RuleMode::from_verb(Some("Only in GEN 1:1")),
    ///     RuleMode::Restricted { scope: " GEN 1:1".to_owned() },
    /// );
    /// assert_eq!(RuleMode::from_verb(None), RuleMode::Modernize);
    /// ```
    #[must_use]
    pub fn from_verb(verb: Option<&str>) -> Self {
        match verb {
            Some(SILENT_VERB) => Self::SilentReplace,
            Some(text) => text
                .strip_prefix(RESTRICTED_PREFIX)
                .map_or(Self::Modernize, |scope| Self::Restricted {
                    scope: scope.to_owned(),
                }),
            None => Self::Modernize,
        }
    }

    /// Returns whether a rule in this mode may touch the verse
    /// `reference_key`. Only [`RuleMode::Restricted`] ever refuses.
    #[must_use]
    pub fn permits(&self, reference_key: &str) -> bool {
        match self {
            Self::Restricted { scope } => scope.contains(reference_key),
            Self::Modernize | Self::SilentReplace => true,
        }
    }
}

/// One instruction from the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    old_phrase: String,
    new_phrase: String,
    mode: RuleMode,
}

impl Rule {
    /// Creates a rule; both phrases are trimmed and case-folded.
    #[must_use]
    pub fn new(old_phrase: &str, new_phrase: &str, mode: RuleMode) -> Self {
        Self {
            old_phrase: fold_case(old_phrase.trim()),
            new_phrase: fold_case(new_phrase.trim()),
            mode,
        }
    }

    /// Returns the phrase to look for.
    #[must_use]
    pub fn old_phrase(&self) -> &str {
        &self.old_phrase
    }

    /// Returns the phrase to put in its place.
    #[must_use]
    pub fn new_phrase(&self) -> &str {
        &self.new_phrase
    }

    /// Returns how the rule is applied.
    #[must_use]
    pub const fn mode(&self) -> &RuleMode {
        &self.mode
    }
}

/// A classified rule-table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleRow {
    /// A rule to apply.
    Apply(Rule),
    /// No old phrase, or a commented-out one.
    Skip,
    /// A blank new phrase: no rows after this one are applied.
    End,
}

impl RuleRow {
    /// Classifies a raw row by position: old phrase, new phrase, verb.
    ///
    /// The old phrase is checked first, so a commented-out row with a blank
    /// new phrase is skipped rather than ending the table. Phrase cells are
    /// trimmed; the verb cell is compared as written.
    #[must_use]
    pub fn from_cells<R: RowCells + ?Sized>(row: &R) -> Self {
        let Some(old) = present(row.cell(OLD_COLUMN)) else {
            return Self::Skip;
        };
        if old.starts_with(COMMENT_PREFIX) {
            return Self::Skip;
        }
        let Some(new) = present(row.cell(NEW_COLUMN)) else {
            return Self::End;
        };
        Self::Apply(Rule::new(old, new, RuleMode::from_verb(row.cell(VERB_COLUMN))))
    }
}

/// Treats blank cells as missing.
fn present(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim).filter(|text| !text.is_empty())
}

/// The ordered rows of a rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rows: Vec<RuleRow>,
}

impl RuleTable {
    /// Creates a table from classified rows.
    #[must_use]
    pub const fn new(rows: Vec<RuleRow>) -> Self {
        Self { rows }
    }

    /// Returns every row, including skipped rows and anything after the end
    /// marker.
    #[must_use]
    pub fn rows(&self) -> &[RuleRow] {
        &self.rows
    }

    /// Returns the rules that are applied, in order, stopping at the first
    /// [`RuleRow::End`].
    pub fn active_rules(&self) -> impl Iterator<Item = &Rule> {
        self.rows
            .iter()
            .take_while(|row| !matches!(row, RuleRow::End))
            .filter_map(|row| match row {
                RuleRow::Apply(rule) => Some(rule),
                RuleRow::Skip | RuleRow::End => None,
            })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<RuleRow> for RuleTable {
    fn from_iter<I: IntoIterator<Item = RuleRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
