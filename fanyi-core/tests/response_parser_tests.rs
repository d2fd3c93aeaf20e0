//! Integration tests for reply parsing
//!
//! Replies below mirror what the model returns for the two templates,
//! including the formatting drift seen in practice.

use fanyi_core::{parse, Dialect, ParsedRecord, ResponseParser};

const GENERIC_REPLY: &str = "\
1. 翻译结果：苹果
2. 读音：/ˈæp.əl/
3. 词性：名词
4. 含义解释：一种常见的水果，
   通常为红色或绿色。
5. 最佳使用案例：
1. I eat an apple every day.
   我每天吃一个苹果。
2. An apple a day keeps the doctor away.
";

const NATIVE_REPLY: &str = "\
1. 拼音标注：huà lóng diǎn jīng
2. 词性分析：成语，
动宾结构
3. 含义解释：比喻写文章或讲话时，
在关键处用几句话点明实质。
4. 成语/典故解释：出自唐代张彦远《历代名画记》。
传说张僧繇画龙不点眼睛。
5. 最佳使用案例：
例句1：这篇文章的结尾画龙点睛。
例句2：他的发言起到了画龙点睛的作用。
";

#[test]
fn test_generic_reply() {
    let record = parse(GENERIC_REPLY, Dialect::Generic);

    assert_eq!(record.translation, "苹果");
    assert_eq!(record.pronunciation, "/ˈæp.əl/");
    assert_eq!(record.part_of_speech, "名词");
    assert_eq!(record.meaning, "一种常见的水果， 通常为红色或绿色。");
    assert_eq!(record.idiom, "");
    assert_eq!(
        record.examples,
        vec![
            "I eat an apple every day. 我每天吃一个苹果。",
            "An apple a day keeps the doctor away.",
        ]
    );
}

#[test]
fn test_native_reply() {
    let record = parse(NATIVE_REPLY, Dialect::NativeAnalysis);

    assert_eq!(record.translation, "");
    assert_eq!(record.pronunciation, "huà lóng diǎn jīng");
    assert_eq!(record.part_of_speech, "成语， 动宾结构");
    assert_eq!(record.meaning, "比喻写文章或讲话时， 在关键处用几句话点明实质。");
    assert_eq!(
        record.idiom,
        "出自唐代张彦远《历代名画记》。 传说张僧繇画龙不点眼睛。"
    );
    assert_eq!(
        record.examples,
        vec!["这篇文章的结尾画龙点睛。", "他的发言起到了画龙点睛的作用。"]
    );
}

#[test]
fn test_no_recognised_headers() {
    let reply = "Sure! Here is the translation you asked for:\nApple\n- a fruit";
    for dialect in Dialect::ALL {
        let record = parse(reply, dialect);
        assert_eq!(record, ParsedRecord::default());
        assert!(record.is_empty());
    }
}

#[test]
fn test_example_continuation() {
    let reply = "5. 最佳使用案例：\n1. 例句一\n补充说明";
    let record = parse(reply, Dialect::Generic);
    assert_eq!(record.examples, vec!["例句一 补充说明"]);
}

#[test]
fn test_text_before_first_example_is_dropped() {
    let reply = "5. 最佳使用案例：\n以下是两个例子\n1. first\n2: second";
    let record = parse(reply, Dialect::Generic);
    assert_eq!(record.examples, vec!["first", "second"]);
}

#[test]
fn test_empty_examples_are_skipped() {
    let reply = "5. 最佳使用案例：\n1.\n2. real one";
    assert_eq!(parse(reply, Dialect::Generic).examples, vec!["real one"]);
}

#[test]
fn test_idiom_placeholder_suppressed() {
    let on_next_line = "4. 成语/典故解释：\n无\n5. 最佳使用案例：";
    assert_eq!(parse(on_next_line, Dialect::NativeAnalysis).idiom, "");

    let on_header_line = "4. 成语/典故解释：无";
    assert_eq!(parse(on_header_line, Dialect::NativeAnalysis).idiom, "");

    // Only an exact placeholder is dropped
    let with_text = "4. 成语/典故解释：\n无典故可考";
    assert_eq!(parse(with_text, Dialect::NativeAnalysis).idiom, "无典故可考");
}

#[test]
fn test_character_gloss_header_fills_idiom() {
    let reply = "1. 拼音标注：měi lì\n4. 字义解释：美：好看；丽：华丽";
    let record = parse(reply, Dialect::NativeAnalysis);
    assert_eq!(record.idiom, "美：好看；丽：华丽");
}

#[test]
fn test_headers_out_of_order() {
    let reply = "3. 词性：名词\n1. 翻译结果：apple\n2. 读音：ˈæpl";
    let record = parse(reply, Dialect::Generic);
    assert_eq!(record.translation, "apple");
    assert_eq!(record.pronunciation, "ˈæpl");
    assert_eq!(record.part_of_speech, "名词");
}

#[test]
fn test_generic_reply_with_native_headers() {
    // Model answered with the analysis template although a translation was requested
    let record = parse(NATIVE_REPLY, Dialect::Generic);
    assert_eq!(record.pronunciation, "huà lóng diǎn jīng");
    assert_eq!(record.part_of_speech, "成语， 动宾结构");
    assert_eq!(record.examples.len(), 2);
}

#[test]
fn test_native_dialect_drops_generic_sections() {
    let record = parse(GENERIC_REPLY, Dialect::NativeAnalysis);
    assert_eq!(record.translation, "");
    assert_eq!(record.pronunciation, "");
    assert_eq!(record.part_of_speech, "");
    assert_eq!(record.meaning, "");
    assert_eq!(record.examples.len(), 2);
}

#[test]
fn test_windows_line_endings() {
    let reply = "1. 翻译结果：苹果\r\n3. 词性：名词\r\n";
    let record = parse(reply, Dialect::Generic);
    assert_eq!(record.translation, "苹果");
    assert_eq!(record.part_of_speech, "名词");
}

#[test]
fn test_parse_is_deterministic() {
    let parser = ResponseParser::new(Dialect::NativeAnalysis);
    let first = parser.parse(NATIVE_REPLY);
    for _ in 0..3 {
        assert_eq!(parser.parse(NATIVE_REPLY), first);
    }
}
