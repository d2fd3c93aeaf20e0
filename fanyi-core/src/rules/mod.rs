//! Data-driven rule tables for input classification
//!
//! Every fixed list the classifier consults (terminal punctuation,
//! interrogative openers, function words, technical phrases, structural
//! particles, compound terms) lives in a TOML rule file. The defaults are
//! embedded in the crate; custom files compile into the same [`RuleSet`].

pub mod config;
mod loader;
pub mod tables;

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::script::ScriptDetector;

pub use config::RuleConfig;
pub use loader::{default_rules, EMBEDDED_RULES};
use tables::{CharTable, PatternSet, PhraseList, PrefixList, WordList};

/// Compiled, immutable rule tables
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    version: String,
    pub(crate) terminators: CharTable,
    pub(crate) script: ScriptDetector,
    pub(crate) latin_interrogatives: PrefixList,
    pub(crate) native_interrogatives: PrefixList,
    pub(crate) latin: LatinRules,
    pub(crate) native: NativeRules,
}

#[derive(Debug, Clone)]
pub(crate) struct LatinRules {
    pub(crate) max_tokens: usize,
    pub(crate) max_length: usize,
    pub(crate) max_plain_tokens: usize,
    pub(crate) function_words: WordList,
    pub(crate) technical_phrases: PhraseList,
}

#[derive(Debug, Clone)]
pub(crate) struct NativeRules {
    pub(crate) max_word_chars: usize,
    pub(crate) max_phrase_chars: usize,
    pub(crate) strip_chars: CharTable,
    pub(crate) structural_patterns: PatternSet,
    pub(crate) compound_terms: PhraseList,
}

impl RuleSet {
    /// Compile a validated configuration
    pub fn from_config(config: &RuleConfig) -> Result<Self> {
        config.validate().map_err(ConfigError::Validation)?;

        let latin = LatinRules {
            max_tokens: config.latin.max_tokens,
            max_length: config.latin.max_length,
            max_plain_tokens: config.latin.max_plain_tokens,
            function_words: WordList::new(&config.latin.function_words)?,
            technical_phrases: PhraseList::case_insensitive(&config.latin.technical_phrases),
        };

        let native = NativeRules {
            max_word_chars: config.native.max_word_chars,
            max_phrase_chars: config.native.max_phrase_chars,
            strip_chars: CharTable::new(config.native.strip_chars.iter().copied()),
            structural_patterns: PatternSet::new(&config.native.structural_patterns)?,
            compound_terms: PhraseList::exact(&config.native.compound_terms),
        };

        Ok(Self {
            name: config.metadata.name.clone(),
            version: config.metadata.version.clone(),
            terminators: CharTable::new(config.terminators.chars.iter().copied()),
            script: ScriptDetector::from_config(&config.script),
            latin_interrogatives: PrefixList::followed_by_space(&config.interrogatives.latin)?,
            native_interrogatives: PrefixList::bare(&config.interrogatives.native)?,
            latin,
            native,
        })
    }

    /// Parse and compile a TOML rule file's contents
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: RuleConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Load, parse and compile a TOML rule file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_toml_str(&contents)?;
        tracing::debug!(name = %rules.name, path = %path.display(), "loaded rule tables");
        Ok(rules)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version from the rule file's metadata; empty when not given
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Script detector configured by these rules
    pub fn script(&self) -> &ScriptDetector {
        &self.script
    }

    /// Description of the first structural pattern matching the
    /// punctuation-stripped `text`
    pub fn structural_match(&self, text: &str) -> Option<&str> {
        let cleaned = self.native.strip_chars.strip(text);
        self.native.structural_patterns.first_match(&cleaned)
    }

    /// Number of native structural patterns
    pub fn structural_pattern_count(&self) -> usize {
        self.native.structural_patterns.len()
    }

    /// Number of native compound terms
    pub fn compound_term_count(&self) -> usize {
        self.native.compound_terms.len()
    }

    /// Number of latin technical phrases
    pub fn technical_phrase_count(&self) -> usize {
        self.latin.technical_phrases.len()
    }
}
