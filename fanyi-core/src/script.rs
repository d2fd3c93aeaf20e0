//! Dominant-script detection
//!
//! Estimates whether a string is predominantly written in one script
//! family. The default family is the CJK Unified Ideographs block
//! (U+4E00..=U+9FFF) with a 60% threshold.

use std::ops::RangeInclusive;

use crate::rules::config::{CharRange, Script};

/// Default share of script characters among non-whitespace characters
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Script family membership test plus the dominance threshold
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptDetector {
    ranges: Vec<RangeInclusive<char>>,
    threshold: f64,
}

impl Default for ScriptDetector {
    fn default() -> Self {
        Self::cjk()
    }
}

impl ScriptDetector {
    /// CJK Unified Ideographs at the default threshold
    pub fn cjk() -> Self {
        Self {
            ranges: vec!['\u{4E00}'..='\u{9FFF}'],
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub(crate) fn from_config(script: &Script) -> Self {
        Self {
            ranges: script
                .ranges
                .iter()
                .map(|CharRange { start, end }| *start..=*end)
                .collect(),
            threshold: script.threshold,
        }
    }

    #[inline]
    pub fn is_script_char(&self, ch: char) -> bool {
        self.ranges.iter().any(|r| r.contains(&ch))
    }

    /// Number of script-family characters in `text`
    pub fn count_script_chars(&self, text: &str) -> usize {
        text.chars().filter(|&ch| self.is_script_char(ch)).count()
    }

    /// Script characters divided by non-whitespace characters.
    ///
    /// `None` when `text` has no content characters.
    pub fn script_ratio(&self, text: &str) -> Option<f64> {
        let (script, content) = text
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .fold((0usize, 0usize), |(script, content), ch| {
                (script + usize::from(self.is_script_char(ch)), content + 1)
            });

        if content == 0 {
            None
        } else {
            Some(script as f64 / content as f64)
        }
    }

    /// True iff `text` has content and its script ratio meets the threshold.
    ///
    /// Empty and all-whitespace input is `false`.
    pub fn is_dominant_script(&self, text: &str) -> bool {
        self.script_ratio(text)
            .is_some_and(|ratio| ratio >= self.threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// [`ScriptDetector::is_dominant_script`] with the CJK defaults
pub fn is_dominant_script(text: &str) -> bool {
    ScriptDetector::cjk().is_dominant_script(text)
}
