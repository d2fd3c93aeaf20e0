//! Routing decisions the orchestration layer makes around a model call
//!
//! Classification picks between a structured word reply and a plain
//! sentence translation; the input script and target language pick the
//! reply dialect; the classification also sets the reply token budget.

use fanyi_core::{Classification, Dialect, InputClassifier, Rule, RuleSet};
use serde::{Deserialize, Serialize};

/// Idiom section requested for longer native inputs
pub const IDIOM_SECTION: &str = "成语/典故解释";

/// Per-character gloss section requested for short native inputs
pub const GLOSS_SECTION: &str = "字义解释";

/// Inputs up to this many characters get the gloss section
const GLOSS_MAX_CHARS: usize = 4;

/// Translation target language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Chinese
    #[default]
    Zh,
    /// English
    En,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Zh => "zh",
            Target::En => "en",
        }
    }

    /// True if the target is written in the detector's native script
    pub fn is_native(&self) -> bool {
        matches!(self, Target::Zh)
    }
}

/// Reply token budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Budgets {
    pub word_max_tokens: u32,
    pub sentence_max_tokens: u32,
}

impl Default for Budgets {
    fn default() -> Self {
        Self {
            word_max_tokens: 1000,
            sentence_max_tokens: 3000,
        }
    }
}

/// Routing decision for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub input: String,
    pub target: Target,
    pub classification: Classification,
    pub rule: Rule,
    /// Input is predominantly native script
    pub native_input: bool,
    /// Reply dialect; `None` for sentences, which come back as plain text
    pub dialect: Option<Dialect>,
    /// Fourth section of a native-analysis reply
    pub detail_section: Option<&'static str>,
    pub max_tokens: u32,
}

impl Plan {
    /// True if the reply should go through the header parser
    pub fn is_structured(&self) -> bool {
        self.dialect.is_some()
    }
}

/// Decide how `text` is sent and how its reply is read
pub fn plan(text: &str, target: Target, rules: &RuleSet, budgets: &Budgets) -> Plan {
    let input = text.trim();
    let verdict = InputClassifier::new(rules).explain(input);
    let native_input = rules.script().is_dominant_script(input);

    let dialect = verdict.classification.is_word().then(|| {
        if native_input && target.is_native() {
            Dialect::NativeAnalysis
        } else {
            Dialect::Generic
        }
    });

    let detail_section = (dialect == Some(Dialect::NativeAnalysis)).then(|| {
        if input.chars().count() <= GLOSS_MAX_CHARS {
            GLOSS_SECTION
        } else {
            IDIOM_SECTION
        }
    });

    let max_tokens = match verdict.classification {
        Classification::Word => budgets.word_max_tokens,
        Classification::Sentence => budgets.sentence_max_tokens,
    };

    log::debug!(
        "planned {:?}: {} via {}, dialect {:?}",
        input,
        verdict.classification,
        verdict.rule,
        dialect
    );

    Plan {
        input: input.to_string(),
        target,
        classification: verdict.classification,
        rule: verdict.rule,
        native_input,
        dialect,
        detail_section,
        max_tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanyi_core::default_rules;

    fn plan_default(text: &str, target: Target) -> Plan {
        plan(text, target, default_rules(), &Budgets::default())
    }

    #[test]
    fn test_native_word_with_native_target() {
        let plan = plan_default("画龙点睛", Target::Zh);
        assert_eq!(plan.classification, Classification::Word);
        assert_eq!(plan.dialect, Some(Dialect::NativeAnalysis));
        assert_eq!(plan.detail_section, Some(GLOSS_SECTION));
        assert_eq!(plan.max_tokens, 1000);
        assert!(plan.is_structured());
    }

    #[test]
    fn test_longer_native_word_gets_idiom_section() {
        let plan = plan_default("守株待兔的故事", Target::Zh);
        assert_eq!(plan.dialect, Some(Dialect::NativeAnalysis));
        assert_eq!(plan.detail_section, Some(IDIOM_SECTION));
    }

    #[test]
    fn test_native_word_with_foreign_target() {
        let plan = plan_default("画龙点睛", Target::En);
        assert_eq!(plan.dialect, Some(Dialect::Generic));
        assert_eq!(plan.detail_section, None);
    }

    #[test]
    fn test_latin_word_is_generic() {
        let plan = plan_default("machine learning", Target::Zh);
        assert!(!plan.native_input);
        assert_eq!(plan.dialect, Some(Dialect::Generic));
        assert_eq!(plan.rule, Rule::TechnicalPhrase);
    }

    #[test]
    fn test_sentence_is_plain() {
        let plan = plan_default("今天天气很好。", Target::Zh);
        assert_eq!(plan.classification, Classification::Sentence);
        assert_eq!(plan.dialect, None);
        assert_eq!(plan.max_tokens, 3000);
        assert!(!plan.is_structured());
    }

    #[test]
    fn test_custom_budgets() {
        let budgets = Budgets {
            word_max_tokens: 200,
            sentence_max_tokens: 800,
        };
        assert_eq!(plan("hello", Target::Zh, default_rules(), &budgets).max_tokens, 200);
        assert_eq!(plan("Hi there!", Target::Zh, default_rules(), &budgets).max_tokens, 800);
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(plan_default("  hello \n", Target::En).input, "hello");
    }
}
