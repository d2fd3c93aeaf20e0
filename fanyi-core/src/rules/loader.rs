//! Embedded rule tables
//!
//! The default tables ship inside the crate and are compiled on first use.

use std::sync::OnceLock;

use super::RuleSet;

/// Default rule file contents
pub const EMBEDDED_RULES: &str = include_str!("../../configs/rules.toml");

static DEFAULT_RULES: OnceLock<RuleSet> = OnceLock::new();

/// Shared default rule set
pub fn default_rules() -> &'static RuleSet {
    DEFAULT_RULES.get_or_init(|| {
        RuleSet::from_toml_str(EMBEDDED_RULES).expect("Failed to load embedded rule tables")
    })
}
