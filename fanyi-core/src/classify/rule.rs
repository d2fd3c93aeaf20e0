//! Classification results and the rules that produce them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an input should be treated downstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// A short lexical unit: word, phrase, idiom
    Word,
    /// Anything longer or structurally sentence-like
    Sentence,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Word => "word",
            Classification::Sentence => "sentence",
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Classification::Word)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The guard that decided a classification, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    EmptyInput,
    TerminalPunctuation,
    Interrogative,
    SingleToken,
    FunctionWord,
    Hyphenated,
    TechnicalPhrase,
    PlainLetters,
    LatinFallback,
    ShortNative,
    StructuralPattern,
    CompoundTerm,
    NativeFallback,
}

impl Rule {
    /// All rules in evaluation order
    pub const ALL: [Rule; 13] = [
        Rule::EmptyInput,
        Rule::TerminalPunctuation,
        Rule::Interrogative,
        Rule::SingleToken,
        Rule::FunctionWord,
        Rule::Hyphenated,
        Rule::TechnicalPhrase,
        Rule::PlainLetters,
        Rule::LatinFallback,
        Rule::ShortNative,
        Rule::StructuralPattern,
        Rule::CompoundTerm,
        Rule::NativeFallback,
    ];

    /// The classification this rule decides
    pub fn classification(&self) -> Classification {
        match self {
            Rule::EmptyInput
            | Rule::TerminalPunctuation
            | Rule::Interrogative
            | Rule::LatinFallback
            | Rule::NativeFallback => Classification::Sentence,
            Rule::SingleToken
            | Rule::FunctionWord
            | Rule::Hyphenated
            | Rule::TechnicalPhrase
            | Rule::PlainLetters
            | Rule::ShortNative
            | Rule::StructuralPattern
            | Rule::CompoundTerm => Classification::Word,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::EmptyInput => "empty_input",
            Rule::TerminalPunctuation => "terminal_punctuation",
            Rule::Interrogative => "interrogative",
            Rule::SingleToken => "single_token",
            Rule::FunctionWord => "function_word",
            Rule::Hyphenated => "hyphenated",
            Rule::TechnicalPhrase => "technical_phrase",
            Rule::PlainLetters => "plain_letters",
            Rule::LatinFallback => "latin_fallback",
            Rule::ShortNative => "short_native",
            Rule::StructuralPattern => "structural_pattern",
            Rule::CompoundTerm => "compound_term",
            Rule::NativeFallback => "native_fallback",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rule::EmptyInput => "nothing left after trimming",
            Rule::TerminalPunctuation => "contains sentence-terminal punctuation",
            Rule::Interrogative => "opens with a question word or particle",
            Rule::SingleToken => "exactly one whitespace-separated token",
            Rule::FunctionWord => "short phrase containing a preposition or conjunction",
            Rule::Hyphenated => "short phrase containing a hyphen",
            Rule::TechnicalPhrase => "short phrase containing a known technical collocation",
            Rule::PlainLetters => "at most three tokens of letters only",
            Rule::LatinFallback => "no phrase rule matched",
            Rule::ShortNative => "one to eight ideographs",
            Rule::StructuralPattern => "nine to fifteen ideographs in a particle structure",
            Rule::CompoundTerm => "nine to fifteen ideographs containing a known compound",
            Rule::NativeFallback => "no native phrase rule matched",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .iter()
            .copied()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| format!("Unknown rule: {s}"))
    }
}

/// A classification together with the rule that decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub classification: Classification,
    pub rule: Rule,
}

impl From<Rule> for Verdict {
    fn from(rule: Rule) -> Self {
        Self {
            classification: rule.classification(),
            rule,
        }
    }
}
