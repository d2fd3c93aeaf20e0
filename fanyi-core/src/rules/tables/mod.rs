//! Runtime tables for classification rules
//!
//! Tables are built once from a [`RuleConfig`](crate::rules::RuleConfig)
//! and are read-only afterwards.

pub mod char_table;
pub mod lexicon;
pub mod patterns;

pub use char_table::CharTable;
pub use lexicon::{PhraseList, PrefixList, WordList};
pub use patterns::PatternSet;
