//! Input classification and reply parsing for a translation assistant
//!
//! The crate holds the two pieces of real logic in a word/sentence
//! translation workflow:
//!
//! - [`classify`] decides whether an input is a word/phrase or a sentence,
//!   which selects the prompt template and reply budget upstream.
//! - [`parse`] turns the model's semi-structured reply back into a
//!   [`ParsedRecord`] for display.
//!
//! Both are pure, total functions: any string yields a result, and calls
//! share nothing but the immutable rule tables.
//!
//! # Architecture
//!
//! - **script**: dominant-script detection (CJK ideograph ratio)
//! - **rules**: data-driven rule tables, embedded defaults plus TOML loading
//! - **classify**: the ordered guard cascade over the rule tables
//! - **response**: the header-driven reply parser
//!
//! # Example
//!
//! ```rust
//! use fanyi_core::{classify, parse, Classification, Dialect};
//!
//! assert_eq!(classify("machine learning"), Classification::Word);
//! assert_eq!(classify("今天天气很好。"), Classification::Sentence);
//!
//! let reply = "1. 翻译结果：苹果\n2. 读音：/ˈæp.əl/\n5. 最佳使用案例：\n1. I ate an apple.";
//! let record = parse(reply, Dialect::Generic);
//! assert_eq!(record.translation, "苹果");
//! assert_eq!(record.examples, vec!["I ate an apple."]);
//! ```

pub mod classify;
pub mod error;
pub mod response;
pub mod rules;
pub mod script;

pub use classify::{classify, explain, Classification, InputClassifier, Rule, Verdict};
pub use error::{ConfigError, Result};
pub use response::{parse, Dialect, ParsedRecord, ResponseParser, IDIOM_PLACEHOLDER};
pub use rules::{default_rules, RuleConfig, RuleSet, EMBEDDED_RULES};
pub use script::{is_dominant_script, ScriptDetector};
