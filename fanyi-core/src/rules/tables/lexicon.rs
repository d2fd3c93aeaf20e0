//! Word and phrase lists compiled for matching
//!
//! Each list keeps its entries as data and compiles them once. An empty
//! list never matches.

use regex::{Regex, RegexBuilder};

use crate::error::{ConfigError, Result};

/// Builds a single alternation over escaped entries
fn alternation(words: &[String]) -> Option<String> {
    let escaped: Vec<String> = words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .map(regex::escape)
        .collect();

    if escaped.is_empty() {
        None
    } else {
        Some(escaped.join("|"))
    }
}

fn compile(pattern: String, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(&pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| ConfigError::Pattern { pattern, source })
}

/// Leading-word list: matches when the text opens with one of the entries
#[derive(Debug, Clone)]
pub struct PrefixList {
    regex: Option<Regex>,
}

impl PrefixList {
    /// Entries followed by whitespace, case-insensitive (`what is ...`)
    pub fn followed_by_space(words: &[String]) -> Result<Self> {
        let regex = alternation(words)
            .map(|alt| compile(format!(r"^(?:{alt})\s"), true))
            .transpose()?;
        Ok(Self { regex })
    }

    /// Bare leading entries, case-sensitive (`为什么...`)
    pub fn bare(words: &[String]) -> Result<Self> {
        let regex = alternation(words)
            .map(|alt| compile(format!("^(?:{alt})"), false))
            .transpose()?;
        Ok(Self { regex })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

/// Whole-word list, case-insensitive
#[derive(Debug, Clone)]
pub struct WordList {
    regex: Option<Regex>,
}

impl WordList {
    pub fn new(words: &[String]) -> Result<Self> {
        let regex = alternation(words)
            .map(|alt| compile(format!(r"\b(?:{alt})\b"), true))
            .transpose()?;
        Ok(Self { regex })
    }

    /// True if any entry appears as a whole word in `text`
    pub fn matches(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

/// Substring list
#[derive(Debug, Clone)]
pub struct PhraseList {
    phrases: Vec<String>,
    fold_case: bool,
}

impl PhraseList {
    /// Phrases compared after lowercasing both sides
    pub fn case_insensitive(phrases: &[String]) -> Self {
        Self::build(phrases, true)
    }

    pub fn exact(phrases: &[String]) -> Self {
        Self::build(phrases, false)
    }

    fn build(phrases: &[String], fold_case: bool) -> Self {
        let phrases = phrases
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(|p| if fold_case { p.to_lowercase() } else { p.to_string() })
            .collect();
        Self { phrases, fold_case }
    }

    /// First phrase contained in `text`
    pub fn find_in(&self, text: &str) -> Option<&str> {
        if self.fold_case {
            let folded = text.to_lowercase();
            self.phrases
                .iter()
                .find(|p| folded.contains(p.as_str()))
                .map(String::as_str)
        } else {
            self.phrases
                .iter()
                .find(|p| text.contains(p.as_str()))
                .map(String::as_str)
        }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
