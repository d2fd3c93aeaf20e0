//! Word/sentence classification of raw input
//!
//! The classifier is a fixed cascade of guards evaluated in order over the
//! trimmed input; the first guard that fires decides:
//!
//! 1. empty input is a sentence
//! 2. sentence-terminal punctuation anywhere makes a sentence
//! 3. a leading question word or particle makes a sentence
//! 4. otherwise the dominant script picks a branch:
//!    - non-native: one token is a word; a short phrase of up to five
//!      tokens is a word when it contains a function word, a hyphen, a
//!      technical collocation, or is at most three tokens of plain letters
//!    - native: up to eight ideographs is a word; nine to fifteen is a
//!      word when it matches a particle structure or contains a compound
//!      term
//! 5. anything else is a sentence
//!
//! Every string classifies; there is no failure mode.

mod guards;
mod rule;

pub use rule::{Classification, Rule, Verdict};

use crate::rules::{default_rules, RuleSet};

/// Classifier bound to a rule set
#[derive(Debug, Clone, Copy)]
pub struct InputClassifier<'r> {
    rules: &'r RuleSet,
}

impl Default for InputClassifier<'static> {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl<'r> InputClassifier<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    /// Classify `text` and report the deciding rule
    pub fn explain(&self, text: &str) -> Verdict {
        let trimmed = text.trim();

        let rule = guards::PRE_SCRIPT
            .iter()
            .find(|(_, guard)| guard(self.rules, trimmed))
            .map(|(rule, _)| *rule)
            .unwrap_or_else(|| {
                if self.rules.script.is_dominant_script(trimmed) {
                    guards::native_branch(self.rules, trimmed)
                } else {
                    guards::latin_branch(&self.rules.latin, trimmed)
                }
            });

        tracing::debug!(input = trimmed, %rule, "classified as {}", rule.classification());
        Verdict::from(rule)
    }

    pub fn classify(&self, text: &str) -> Classification {
        self.explain(text).classification
    }
}

/// Classify with the default rule tables
pub fn classify(text: &str) -> Classification {
    InputClassifier::default().classify(text)
}

/// Classify with the default rule tables, reporting the deciding rule
pub fn explain(text: &str) -> Verdict {
    InputClassifier::default().explain(text)
}
