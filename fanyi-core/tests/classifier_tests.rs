//! Integration tests for word/sentence classification
//!
//! Exercises the public API against the default rule tables.

use fanyi_core::{classify, default_rules, explain, Classification, Rule};

use Classification::{Sentence, Word};

#[test]
fn test_documented_examples() {
    assert_eq!(classify(""), Sentence);
    assert_eq!(classify("   "), Sentence);
    assert_eq!(classify("hello"), Word);
    assert_eq!(classify("artificial intelligence"), Word);
    assert_eq!(classify("Hello, how are you?"), Sentence);
    assert_eq!(classify("画龙点睛"), Word);
    assert_eq!(classify("今天天气很好。"), Sentence);
    assert_eq!(classify("你好吗？"), Sentence);
}

#[test]
fn test_english_words_and_phrases() {
    let cases = [
        ("beautiful", Rule::SingleToken),
        ("artificial", Rule::SingleToken),
        ("state-of-the-art", Rule::SingleToken),
        ("hello world", Rule::PlainLetters),
        ("machine learning", Rule::TechnicalPhrase),
        ("artificial intelligence", Rule::TechnicalPhrase),
        ("state of the art", Rule::FunctionWord),
        ("rock and roll", Rule::FunctionWord),
        ("well-known brand name", Rule::Hyphenated),
        ("Natural Language Processing", Rule::TechnicalPhrase),
    ];

    for (text, rule) in cases {
        let verdict = explain(text);
        assert_eq!(verdict.rule, rule, "unexpected rule for {text:?}");
        assert_eq!(verdict.classification, Word, "{text:?} should be a word");
    }
}

#[test]
fn test_english_sentences() {
    let cases = [
        ("Hello, how are you?", Rule::TerminalPunctuation),
        ("I love learning new languages.", Rule::TerminalPunctuation),
        ("What is your name?", Rule::TerminalPunctuation),
        ("hello world, how are you?", Rule::TerminalPunctuation),
        ("Where did everyone go", Rule::Interrogative),
        ("Should we start", Rule::Interrogative),
        ("the quick brown fox jumps high", Rule::LatinFallback),
        ("big red juicy apple", Rule::LatinFallback),
        ("iPhone 15", Rule::LatinFallback),
    ];

    for (text, rule) in cases {
        let verdict = explain(text);
        assert_eq!(verdict.rule, rule, "unexpected rule for {text:?}");
        assert_eq!(verdict.classification, Sentence, "{text:?} should be a sentence");
    }
}

#[test]
fn test_long_phrase_falls_back_to_sentence() {
    // Three plain-letter tokens, but 60+ characters
    let text = "supercalifragilisticexpialidocious antidisestablishmentarianism pneumonoultramicroscopic";
    assert!(text.chars().count() >= 60);
    assert_eq!(explain(text).rule, Rule::LatinFallback);
}

#[test]
fn test_chinese_words_and_idioms() {
    for text in [
        "美丽",
        "学习",
        "人工智能",
        "画龙点睛",
        "守株待兔",
        "美丽的",
        "是有",
        "人工智能的",
    ] {
        assert_eq!(explain(text).rule, Rule::ShortNative, "{text:?}");
    }
}

#[test]
fn test_chinese_phrases_in_the_middle_window() {
    // 10 ideographs with an attributive 的
    assert_eq!(explain("这是我昨天买的新书包").rule, Rule::StructuralPattern);
    // 10 ideographs opening with 有
    assert_eq!(explain("有很多人喜欢这个地方").rule, Rule::StructuralPattern);
    // 12 ideographs, compound term only
    assert_eq!(explain("关于人工智能发展前景研究").rule, Rule::CompoundTerm);
    // 14 ideographs, nothing matches
    assert_eq!(explain("今天天气非常晴朗适合出门散步").rule, Rule::NativeFallback);
    // 是 only counts at the start
    assert_eq!(explain("我们今天是去公园散步呀呀").rule, Rule::NativeFallback);
}

#[test]
fn test_each_structural_particle() {
    let rules = default_rules();
    let cases = [
        ("这是我昨天买的新书包", "attributive 的 phrase"),
        ("是我们大家共同努力换来成果", "leading copula 是"),
        ("有很多人喜欢这个地方", "leading existential 有"),
        ("我们周末在图书馆里看书", "locative 在 phrase"),
        ("请你把这些旧衣服收拾一下", "disposal 把 construction"),
        ("那只小猫被邻居家小孩抱走了", "passive 被 construction"),
        // mid-text 有 does not fire
        ("他今天跑得比所有人都快", "complement 得 phrase"),
        ("孩子们高高兴兴地走进教室", "adverbial 地 phrase"),
        // 在 is checked before 把
        ("他把书放在桌子上面了吗", "locative 在 phrase"),
    ];

    for (text, description) in cases {
        assert_eq!(explain(text).rule, Rule::StructuralPattern, "{text:?}");
        assert_eq!(rules.structural_match(text), Some(description), "{text:?}");
    }

    assert_eq!(rules.structural_match("我们今天是去公园散步呀呀"), None);
}

#[test]
fn test_chinese_sentences() {
    let cases = [
        ("今天天气很好。", Rule::TerminalPunctuation),
        ("我喜欢学习新语言。", Rule::TerminalPunctuation),
        ("你好吗？", Rule::TerminalPunctuation),
        ("这是一个很长的句子，包含多个分句。", Rule::TerminalPunctuation),
        ("什么意思", Rule::Interrogative),
        ("为什么天空是蓝色的", Rule::Interrogative),
        // 19 ideographs: past the phrase window even with 的
        ("我们明天早上一起去公园里的湖边跑步锻炼", Rule::NativeFallback),
    ];

    for (text, rule) in cases {
        let verdict = explain(text);
        assert_eq!(verdict.rule, rule, "unexpected rule for {text:?}");
        assert_eq!(verdict.classification, Sentence);
    }
}

#[test]
fn test_mixed_script_follows_the_cascade() {
    // Two of seven content characters are ideographs, so this takes the
    // latin branch, and the non-letter characters fail the plain-letters
    // check.
    assert_eq!(explain("Hello 世界").rule, Rule::LatinFallback);
    assert_eq!(classify("Hello 世界"), Sentence);
}

#[test]
fn test_mostly_chinese_with_latin() {
    // 4 of 5 content characters are ideographs
    assert_eq!(explain("人工智能 A").rule, Rule::ShortNative);
}

#[test]
fn test_full_width_terminators() {
    for text in ["好！", "好？", "前；后", "注意：", "a;b", "a:b", "a!b"] {
        assert_eq!(explain(text).rule, Rule::TerminalPunctuation, "{text:?}");
    }
}

#[test]
fn test_comma_alone_is_not_terminal() {
    assert_eq!(explain("salt, pepper").rule, Rule::LatinFallback);
    assert_eq!(explain("红色，蓝色").rule, Rule::ShortNative);
}
