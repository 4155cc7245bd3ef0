//! Whole-word phrase lookup that ignores text inside `[...]` annotations.
//!
//! Once a word has been annotated as `new [old]`, later rules must not match
//! the original text trapped inside the brackets, while matches after the
//! closing bracket must still be found. The check looks only at the first
//! boundary match and the first `]` and `[` that follow it; nested or
//! repeated bracket pairs beyond that are not examined.

use regex::Regex;

/// Returns the byte offset of the first whole-word occurrence of `phrase` in
/// `haystack`, or `None` when it is absent or sits inside a bracket
/// annotation.
///
/// Both arguments are expected to be case-folded already.
///
/// # Example
///
/// ```
/// use gentler_engine::find_word_index;
///
/// let line = "word1 word2 word5a [word5] word3";
/// assert_eq!(find_word_index(line, "word3"), Some(27));
/// assert_eq!(find_word_index(line, "word5"), None);
/// assert_eq!(find_word_index("smite mite", "mite"), Some(6));
/// ```
#[must_use]
pub fn find_word_index(haystack: &str, phrase: &str) -> Option<usize> {
    find_word_index_from(haystack, phrase, 0)
}

/// Like [`find_word_index`], but only considers matches starting at or
/// after byte offset `start`.
///
/// Word boundaries are judged against the whole haystack, so a match cannot
/// begin in the middle of a word that straddles `start`. Returns `None` when
/// `start` is past the end or not on a character boundary.
#[must_use]
pub fn find_word_index_from(haystack: &str, phrase: &str, start: usize) -> Option<usize> {
    if phrase.is_empty() {
        return None;
    }
    // Plain substring search first; most rules miss most lines.
    if !haystack.get(start..)?.contains(phrase) {
        return None;
    }
    let index = boundary_pattern(phrase)?.find_at(haystack, start)?.start();
    outside_brackets(haystack, index).then_some(index)
}

fn boundary_pattern(phrase: &str) -> Option<Regex> {
    Regex::new(&format!(r"\b{}\b", regex::escape(phrase))).ok()
}

/// A match is inside an annotation when the next `]` after it is not
/// preceded by a `[` that also follows it.
fn outside_brackets(haystack: &str, index: usize) -> bool {
    let Some(rest) = haystack.get(index..) else {
        return false;
    };
    match rest.find(']') {
        None => true,
        Some(close) => rest.find('[').is_some_and(|open| open < close),
    }
}
