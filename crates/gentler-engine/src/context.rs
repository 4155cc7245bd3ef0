//! A verse line split into its reference key and editable body.

use std::ops::Range;

/// Reference key used when a line carries no `<book> <chapter>:<verse>`
/// prefix.
pub const NO_REFERENCE: &str = "None.";

/// Separator between the reference key and the verse body.
const KEY_SEPARATOR: &str = "  ";

/// The separator is only searched for from this byte offset onwards, and a
/// separator found exactly here does not count.
const MIN_KEY_LENGTH: usize = 4;

/// Bracket insertion can leave this run behind in the body.
const TRIPLE_SPACE: &str = "   ";

/// One input line and the word pair currently being applied to it.
///
/// The body is held twice: as written, and case-folded for matching. Both
/// copies are only ever changed together, so a byte offset found in
/// [`folded_body`](Self::folded_body) is always valid in
/// [`body`](Self::body).
///
/// # Example
///
/// ```
/// use gentler_engine::LineContext;
///
/// let context = LineContext::new("GEN 1:1  In the beginning", "Old", " New ");
/// assert_eq!(context.reference_key(), "GEN 1:1");
/// assert_eq!(context.body(), "In the beginning");
/// assert_eq!(context.current_new(), "new");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContext {
    book_number: String,
    reference_key: String,
    body: String,
    folded_body: String,
    current_old: String,
    current_new: String,
    dirty: bool,
}

impl LineContext {
    /// Splits `line` into reference key and body and sets the initial word
    /// pair.
    #[must_use]
    pub fn new(line: &str, old: &str, new: &str) -> Self {
        let (reference_key, body) = split_reference(line);
        Self {
            book_number: String::new(),
            reference_key: reference_key.to_owned(),
            body: body.to_owned(),
            folded_body: fold_case(body),
            current_old: normalise_phrase(old),
            current_new: normalise_phrase(new),
            dirty: false,
        }
    }

    /// Attaches the source document number that prefixes ledger keys.
    #[must_use]
    pub fn with_book_number(mut self, book_number: impl Into<String>) -> Self {
        self.book_number = book_number.into();
        self
    }

    /// Replaces the current word pair. Both words are trimmed and
    /// case-folded.
    pub fn set_words(&mut self, old: &str, new: &str) {
        self.current_old = normalise_phrase(old);
        self.current_new = normalise_phrase(new);
    }

    /// Returns the `<book> <chapter>:<verse>` prefix, or [`NO_REFERENCE`].
    #[must_use]
    pub fn reference_key(&self) -> &str {
        &self.reference_key
    }

    /// Returns the source document number, empty when none was attached.
    #[must_use]
    pub fn book_number(&self) -> &str {
        &self.book_number
    }

    /// Returns the key stored in the ledger: book number followed by the
    /// reference key.
    #[must_use]
    pub fn full_reference_key(&self) -> String {
        format!("{}{}", self.book_number, self.reference_key)
    }

    /// Returns the body as currently edited, in its original case.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the case-folded copy of [`body`](Self::body).
    #[must_use]
    pub fn folded_body(&self) -> &str {
        &self.folded_body
    }

    /// Returns the folded phrase being searched for.
    #[must_use]
    pub fn current_old(&self) -> &str {
        &self.current_old
    }

    /// Returns the folded phrase that replaces it.
    #[must_use]
    pub fn current_new(&self) -> &str {
        &self.current_new
    }

    /// Returns whether any rule has changed the body.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Reassembles the line: reference key, two spaces, then the body with
    /// every triple-space run collapsed to a single space.
    #[must_use]
    pub fn edited_line(&self) -> String {
        format!(
            "{}{KEY_SEPARATOR}{}",
            self.reference_key,
            self.body.replace(TRIPLE_SPACE, " ")
        )
    }

    /// Replaces `range` of the body and regenerates the folded copy.
    ///
    /// Returns `false` and leaves the body untouched when `range` does not
    /// fall on character boundaries.
    pub(crate) fn splice_body(&mut self, range: Range<usize>, replacement: &str) -> bool {
        if self.body.get(range.clone()).is_none() {
            return false;
        }
        self.body.replace_range(range, replacement);
        self.folded_body = fold_case(&self.body);
        true
    }

    pub(crate) const fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

fn split_reference(line: &str) -> (&str, &str) {
    let start = (MIN_KEY_LENGTH..=line.len()).find(|&offset| line.is_char_boundary(offset));
    start
        .and_then(|from| {
            let index = line.get(from..)?.find(KEY_SEPARATOR)? + from;
            if index <= MIN_KEY_LENGTH {
                return None;
            }
            Some((
                line.get(..index)?,
                line.get(index + KEY_SEPARATOR.len()..)?,
            ))
        })
        .unwrap_or((NO_REFERENCE, line))
}

fn normalise_phrase(phrase: &str) -> String {
    fold_case(phrase.trim())
}

/// Lowercases `text` one character at a time, keeping any character whose
/// lowercase form would change its encoded length.
pub(crate) fn fold_case(text: &str) -> String {
    if text.is_ascii() {
        return text.to_ascii_lowercase();
    }
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        let lower: String = ch.to_lowercase().collect();
        if lower.len() == ch.len_utf8() {
            folded.push_str(&lower);
        } else {
            folded.push(ch);
        }
    }
    folded
}
