//! Section headers recognised in model replies
//!
//! Headers are matched by exact prefix of the trimmed line, never by
//! position, so a reply that reorders or skips sections still parses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Section currently being accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Translation,
    Pronunciation,
    /// Phonetic section of a native analysis; fills `pronunciation`
    Pinyin,
    PartOfSpeech,
    Meaning,
    Idiom,
    Examples,
}

/// A header prefix and the section it opens
#[derive(Debug, Clone, Copy)]
pub(crate) struct Header {
    pub(crate) prefix: &'static str,
    pub(crate) section: Section,
}

const fn header(prefix: &'static str, section: Section) -> Header {
    Header { prefix, section }
}

pub(crate) const EXAMPLES_HEADER: &str = "5. 最佳使用案例：";

/// Generic replies also accept the native-analysis headers, since the
/// model does not always follow the template it was given
const GENERIC_HEADERS: &[Header] = &[
    header("1. 翻译结果：", Section::Translation),
    header("1. 拼音标注：", Section::Pinyin),
    header("2. 词性分析：", Section::PartOfSpeech),
    header("2. 读音：", Section::Pronunciation),
    header("3. 词性：", Section::PartOfSpeech),
    header("3. 含义解释：", Section::Meaning),
    header("4. 含义解释：", Section::Meaning),
    header("4. 成语/典故解释：", Section::Idiom),
    header("4. 字义解释：", Section::Idiom),
    header(EXAMPLES_HEADER, Section::Examples),
];

const NATIVE_HEADERS: &[Header] = &[
    header("1. 拼音标注：", Section::Pinyin),
    header("2. 词性分析：", Section::PartOfSpeech),
    header("3. 含义解释：", Section::Meaning),
    header("4. 成语/典故解释：", Section::Idiom),
    // Requested instead of the idiom section for inputs of up to four characters
    header("4. 字义解释：", Section::Idiom),
    header(EXAMPLES_HEADER, Section::Examples),
];

/// Which reply template the caller asked the model to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Bilingual translation with pronunciation, part of speech, meaning
    #[default]
    Generic,
    /// Native-script analysis with pinyin and idiom background
    #[serde(rename = "native", alias = "native_analysis")]
    NativeAnalysis,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Generic, Dialect::NativeAnalysis];

    pub(crate) fn headers(&self) -> &'static [Header] {
        match self {
            Dialect::Generic => GENERIC_HEADERS,
            Dialect::NativeAnalysis => NATIVE_HEADERS,
        }
    }

    /// Header prefixes this dialect recognises
    pub fn header_prefixes(&self) -> impl Iterator<Item = &'static str> {
        self.headers().iter().map(|h| h.prefix)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Generic => "generic",
            Dialect::NativeAnalysis => "native",
        }
    }

    /// Find the header opening `line` and the text after it
    pub(crate) fn match_header<'l>(&self, line: &'l str) -> Option<(Section, &'l str)> {
        self.headers().iter().find_map(|h| {
            line.strip_prefix(h.prefix)
                .map(|rest| (h.section, rest.trim()))
        })
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generic" => Ok(Dialect::Generic),
            "native" | "native_analysis" | "native-analysis" => Ok(Dialect::NativeAnalysis),
            _ => Err(format!("Unknown dialect: {s}")),
        }
    }
}
