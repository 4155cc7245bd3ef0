//! Applies a rule table to whole lines.

use tracing::debug;

use crate::config::EngineConfig;
use crate::context::LineContext;
use crate::ledger::ChangeLedger;
use crate::rule::{Rule, RuleMode, RuleTable};
use crate::substitution::{modernize_word, replace_word};

/// Runs every active rule of a [`RuleTable`] over a line, in table order.
#[derive(Debug, Clone, Default)]
pub struct Modernizer {
    table: RuleTable,
    config: EngineConfig,
}

impl Modernizer {
    /// Creates a modernizer over `table`.
    #[must_use]
    pub const fn new(table: RuleTable, config: EngineConfig) -> Self {
        Self { table, config }
    }

    /// Returns the rule table.
    #[must_use]
    pub const fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Returns the engine limits.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Modernizes one raw line from the document numbered `book_number` and
    /// returns the edited line. Every rule that fires is recorded in
    /// `ledger`.
    pub fn upgrade_line(&self, book_number: &str, line: &str, ledger: &mut ChangeLedger) -> String {
        let mut context = LineContext::new(line, "", "").with_book_number(book_number);
        self.upgrade_context(&mut context, ledger);
        context.edited_line()
    }

    /// Applies the rules to an existing context, leaving the result in it.
    pub fn upgrade_context(&self, context: &mut LineContext, ledger: &mut ChangeLedger) {
        for rule in self.table.active_rules() {
            context.set_words(rule.old_phrase(), rule.new_phrase());
            let replacements = self.apply_rule(rule, context, ledger);
            if replacements > 0 {
                debug!(
                    reference = context.reference_key(),
                    old = rule.old_phrase(),
                    new = rule.new_phrase(),
                    replacements,
                    "rule applied"
                );
            }
        }
    }

    fn apply_rule(&self, rule: &Rule, context: &mut LineContext, ledger: &mut ChangeLedger) -> usize {
        match rule.mode() {
            RuleMode::SilentReplace => replace_word(context, ledger, &self.config),
            RuleMode::Restricted { .. } if !rule.mode().permits(context.reference_key()) => 0,
            RuleMode::Restricted { .. } | RuleMode::Modernize => modernize_word(context, ledger),
        }
    }
}
