//! Ordered guard tables
//!
//! Each table is evaluated front to back and the first hit decides. The
//! order of the entries is the tie-break order.

use super::rule::Rule;
use crate::rules::{LatinRules, NativeRules, RuleSet};

/// Guard over the trimmed input
type Guard = fn(&RuleSet, &str) -> bool;

/// Guards evaluated before the script branch
pub(crate) const PRE_SCRIPT: &[(Rule, Guard)] = &[
    (Rule::EmptyInput, is_empty),
    (Rule::TerminalPunctuation, has_terminal),
    (Rule::Interrogative, opens_question),
];

fn is_empty(_: &RuleSet, text: &str) -> bool {
    text.is_empty()
}

fn has_terminal(rules: &RuleSet, text: &str) -> bool {
    rules.terminators.any_in(text)
}

fn opens_question(rules: &RuleSet, text: &str) -> bool {
    rules.latin_interrogatives.matches(text) || rules.native_interrogatives.matches(text)
}

/// Short latin phrase under inspection
pub(crate) struct LatinPhrase<'a> {
    text: &'a str,
    tokens: usize,
}

type LatinCheck = fn(&LatinRules, &LatinPhrase<'_>) -> bool;

/// Checks for a 2..=max_tokens latin phrase shorter than max_length
pub(crate) const LATIN_PHRASE: &[(Rule, LatinCheck)] = &[
    (Rule::FunctionWord, has_function_word),
    (Rule::Hyphenated, is_hyphenated),
    (Rule::TechnicalPhrase, has_technical_phrase),
    (Rule::PlainLetters, is_plain_letters),
];

fn has_function_word(rules: &LatinRules, phrase: &LatinPhrase<'_>) -> bool {
    rules.function_words.matches(phrase.text)
}

fn is_hyphenated(_: &LatinRules, phrase: &LatinPhrase<'_>) -> bool {
    phrase.text.contains('-')
}

fn has_technical_phrase(rules: &LatinRules, phrase: &LatinPhrase<'_>) -> bool {
    rules.technical_phrases.find_in(phrase.text).is_some()
}

fn is_plain_letters(rules: &LatinRules, phrase: &LatinPhrase<'_>) -> bool {
    phrase.tokens <= rules.max_plain_tokens
        && phrase
            .text
            .chars()
            .all(|ch| ch.is_ascii_alphabetic() || ch.is_whitespace())
}

type NativeCheck = fn(&NativeRules, &str) -> bool;

/// Checks for native text with max_word_chars < count <= max_phrase_chars,
/// applied to the punctuation-stripped text
pub(crate) const NATIVE_PHRASE: &[(Rule, NativeCheck)] = &[
    (Rule::StructuralPattern, has_structure),
    (Rule::CompoundTerm, has_compound),
];

fn has_structure(rules: &NativeRules, cleaned: &str) -> bool {
    rules.structural_patterns.first_match(cleaned).is_some()
}

fn has_compound(rules: &NativeRules, cleaned: &str) -> bool {
    rules.compound_terms.find_in(cleaned).is_some()
}

/// Decide within the non-native-script branch
pub(crate) fn latin_branch(rules: &LatinRules, text: &str) -> Rule {
    let tokens = text.split_whitespace().count();

    if tokens == 1 {
        return Rule::SingleToken;
    }

    if tokens <= rules.max_tokens && text.chars().count() < rules.max_length {
        let phrase = LatinPhrase { text, tokens };
        if let Some((rule, _)) = LATIN_PHRASE.iter().find(|(_, check)| check(rules, &phrase)) {
            return *rule;
        }
    }

    Rule::LatinFallback
}

/// Decide within the native-script branch
pub(crate) fn native_branch(rules: &RuleSet, text: &str) -> Rule {
    let native = &rules.native;
    let cleaned = native.strip_chars.strip(text);
    let count = rules.script.count_script_chars(&cleaned);

    if (1..=native.max_word_chars).contains(&count) {
        return Rule::ShortNative;
    }

    if count <= native.max_phrase_chars {
        if let Some((rule, _)) = NATIVE_PHRASE
            .iter()
            .find(|(_, check)| check(native, &cleaned))
        {
            return *rule;
        }
    }

    Rule::NativeFallback
}
