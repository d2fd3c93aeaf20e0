//! Configuration structures and validation
//!
//! This module defines the TOML schema for classification rule tables.

use serde::{Deserialize, Serialize};

/// Root rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub script: Script,
    pub interrogatives: Interrogatives,
    pub latin: Latin,
    pub native: Native,
}

/// Rule set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// Sentence-terminal characters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
}

/// Script family used for the dominant-script test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_ranges")]
    pub ranges: Vec<CharRange>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            ranges: default_ranges(),
        }
    }
}

/// Inclusive character range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharRange {
    pub start: char,
    pub end: char,
}

/// Question openers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interrogatives {
    #[serde(default)]
    pub latin: Vec<String>,
    #[serde(default)]
    pub native: Vec<String>,
}

/// Rules for the non-native-script branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Latin {
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_max_plain_tokens")]
    pub max_plain_tokens: usize,
    #[serde(default)]
    pub function_words: Vec<String>,
    #[serde(default)]
    pub technical_phrases: Vec<String>,
}

/// Rules for the native-script branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Native {
    #[serde(default = "default_max_word_chars")]
    pub max_word_chars: usize,
    #[serde(default = "default_max_phrase_chars")]
    pub max_phrase_chars: usize,
    #[serde(default)]
    pub strip_chars: Vec<char>,
    #[serde(default)]
    pub structural_patterns: Vec<StructuralPattern>,
    #[serde(default)]
    pub compound_terms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralPattern {
    pub pattern: String,
    #[serde(default)]
    pub description: String,
}

fn default_threshold() -> f64 {
    0.6
}

fn default_ranges() -> Vec<CharRange> {
    vec![CharRange {
        start: '\u{4E00}',
        end: '\u{9FFF}',
    }]
}

fn default_max_tokens() -> usize {
    5
}

fn default_max_length() -> usize {
    60
}

fn default_max_plain_tokens() -> usize {
    3
}

fn default_max_word_chars() -> usize {
    8
}

fn default_max_phrase_chars() -> usize {
    15
}

impl RuleConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.terminators.chars.is_empty() {
            return Err("No terminator characters defined".to_string());
        }

        if !(self.script.threshold > 0.0 && self.script.threshold <= 1.0) {
            return Err(format!(
                "Script threshold must be in (0, 1], got {}",
                self.script.threshold
            ));
        }

        if self.script.ranges.is_empty() {
            return Err("No script ranges defined".to_string());
        }

        if let Some(range) = self.script.ranges.iter().find(|r| r.start > r.end) {
            return Err(format!(
                "Script range U+{:04X}..U+{:04X} is inverted",
                range.start as u32, range.end as u32
            ));
        }

        if self.latin.max_tokens == 0 || self.latin.max_length == 0 {
            return Err("Latin phrase window must be non-zero".to_string());
        }

        if self.native.max_word_chars == 0 {
            return Err("max_word_chars must be greater than 0".to_string());
        }

        if self.native.max_word_chars > self.native.max_phrase_chars {
            return Err(format!(
                "max_word_chars ({}) exceeds max_phrase_chars ({})",
                self.native.max_word_chars, self.native.max_phrase_chars
            ));
        }

        Ok(())
    }
}
