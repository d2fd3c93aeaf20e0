//! Character set lookup with O(1) membership
//!
//! Optimized for hot-path performance with ASCII fast-path.

use std::collections::HashSet;

/// Fast character membership table
#[derive(Debug, Clone)]
pub struct CharTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII members
    non_ascii: HashSet<char>,
}

impl CharTable {
    /// Create from a list of member characters
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// True if any character of `text` is a member
    pub fn any_in(&self, text: &str) -> bool {
        text.chars().any(|ch| self.contains(ch))
    }

    /// Copy of `text` with every member character removed
    pub fn strip(&self, text: &str) -> String {
        text.chars().filter(|&ch| !self.contains(ch)).collect()
    }
}
