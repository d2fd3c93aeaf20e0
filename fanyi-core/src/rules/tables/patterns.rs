//! Structural phrase patterns for native-script text

use regex::Regex;

use crate::error::{ConfigError, Result};
use crate::rules::config::StructuralPattern;

#[derive(Debug, Clone)]
struct CompiledPattern {
    regex: Regex,
    description: String,
}

/// Ordered set of structural patterns; the first match wins
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    pub fn new(patterns: &[StructuralPattern]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let regex = Regex::new(&p.pattern).map_err(|source| ConfigError::Pattern {
                    pattern: p.pattern.clone(),
                    source,
                })?;
                let description = if p.description.is_empty() {
                    p.pattern.clone()
                } else {
                    p.description.clone()
                };
                Ok(CompiledPattern { regex, description })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Description of the first pattern matching `text`
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| p.regex.is_match(text))
            .map(|p| p.description.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(p: &str, d: &str) -> StructuralPattern {
        StructuralPattern {
            pattern: p.to_string(),
            description: d.to_string(),
        }
    }

    #[test]
    fn test_first_match_in_order() {
        let set = PatternSet::new(&[pattern("^是.+", "copula"), pattern("的.+$", "")]).unwrap();

        assert_eq!(set.first_match("是我的书"), Some("copula"));
        assert_eq!(set.first_match("我的书"), Some("的.+$"));
        assert_eq!(set.first_match("美丽的"), None);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_invalid_pattern_reports_source() {
        match PatternSet::new(&[pattern("(的", "broken")]) {
            Err(ConfigError::Pattern { pattern, .. }) => assert_eq!(pattern, "(的"),
            other => panic!("Expected pattern error, got {other:?}"),
        }
    }
}
