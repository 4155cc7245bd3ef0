//! The annotate and silent replacement policies.
//!
//! Both policies work on the current word pair of a [`LineContext`], copy the
//! capitalisation of the first matched character onto the replacement, and
//! record each change in a [`ChangeLedger`]. A phrase that does not occur is
//! a no-op, never an error.

use crate::config::EngineConfig;
use crate::context::LineContext;
use crate::ledger::ChangeLedger;
use crate::locator::find_word_index;

/// Replaces the first occurrence of the current old phrase with the new
/// phrase followed by the original text in brackets.
///
/// `Abraham Begat Isaac` with `begat -> fathered` becomes
/// `Abraham Fathered [Begat] Isaac`. Applies at most once per call and
/// returns the number of replacements made (`0` or `1`).
pub fn modernize_word(context: &mut LineContext, ledger: &mut ChangeLedger) -> usize {
    let Some(index) = find_word_index(context.folded_body(), context.current_old()) else {
        return 0;
    };
    let end = index + context.current_old().len();
    let Some(original) = context.body().get(index..end) else {
        return 0;
    };
    let replacement = format!("{} [{original}]", cased_replacement(context, index));
    if !context.splice_body(index..end, &replacement) {
        return 0;
    }
    record_change(context, ledger);
    1
}

/// Replaces every occurrence of the current old phrase with the new phrase,
/// leaving no annotation behind.
///
/// Each pass searches the whole body again. After a replacement at `index`
/// the loop only continues while `index` plus the length of the old phrase
/// lies before the last byte of the edited body, whatever the length of the
/// new phrase. `config`'s per-rule cap ends rules whose new phrase contains
/// the old one. Returns the number of replacements made.
pub fn replace_word(
    context: &mut LineContext,
    ledger: &mut ChangeLedger,
    config: &EngineConfig,
) -> usize {
    let old_len = context.current_old().len();
    let mut replacements: usize = 0;
    while replacements < config.max_replacements_per_rule() {
        let Some(index) = find_word_index(context.folded_body(), context.current_old()) else {
            break;
        };
        let replacement = cased_replacement(context, index);
        if !context.splice_body(index..index + old_len, &replacement) {
            break;
        }
        record_change(context, ledger);
        replacements += 1;
        if index + old_len + 1 >= context.body().len() {
            break;
        }
    }
    replacements
}

/// The new phrase, capitalised when the body has an uppercase character at
/// `index`.
fn cased_replacement(context: &LineContext, index: usize) -> String {
    let starts_upper = context
        .body()
        .get(index..)
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase);
    if starts_upper {
        capitalise_first(context.current_new())
    } else {
        context.current_new().to_owned()
    }
}

fn capitalise_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn record_change(context: &mut LineContext, ledger: &mut ChangeLedger) {
    ledger.record(
        &context.full_reference_key(),
        context.current_old(),
        context.current_new(),
    );
    context.mark_dirty();
}
