//! Parsing of semi-structured model replies into fielded records
//!
//! A reply is scanned once, line by line. Recognised headers open a section
//! and seed its field; following lines continue the open section until the
//! next header. Anything the parser cannot place is dropped, so every reply,
//! including an empty one, yields a fully populated record.

mod examples;
mod header;

pub use header::Dialect;

use header::Section;
use serde::{Deserialize, Serialize};

/// Placeholder the model writes when an input has no idiom background
pub const IDIOM_PLACEHOLDER: &str = "无";

/// Fielded view of a model reply; unset fields are empty, never absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecord {
    pub translation: String,
    pub pronunciation: String,
    pub part_of_speech: String,
    pub meaning: String,
    /// Only filled by native-analysis replies
    pub idiom: String,
    pub examples: Vec<String>,
}

impl ParsedRecord {
    /// Record for a reply that is nothing but the translated text
    pub fn from_plain_reply(reply: &str) -> Self {
        Self {
            translation: reply.trim().to_string(),
            ..Self::default()
        }
    }

    /// True if no header matched anything
    pub fn is_empty(&self) -> bool {
        self.translation.is_empty()
            && self.pronunciation.is_empty()
            && self.part_of_speech.is_empty()
            && self.meaning.is_empty()
            && self.idiom.is_empty()
            && self.examples.is_empty()
    }

    fn field_mut(&mut self, section: Section) -> Option<&mut String> {
        match section {
            Section::Translation => Some(&mut self.translation),
            Section::Pronunciation | Section::Pinyin => Some(&mut self.pronunciation),
            Section::PartOfSpeech => Some(&mut self.part_of_speech),
            Section::Meaning => Some(&mut self.meaning),
            Section::Idiom => Some(&mut self.idiom),
            Section::Examples => None,
        }
    }
}

/// Space-join `line` onto `field`
fn append(field: &mut String, line: &str) {
    if !field.is_empty() {
        field.push(' ');
    }
    field.push_str(line);
}

/// Reply parser for one dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseParser {
    dialect: Dialect,
}

impl ResponseParser {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn parse(&self, reply: &str) -> ParsedRecord {
        let mut scan = Scan {
            dialect: self.dialect,
            record: ParsedRecord::default(),
            section: None,
        };

        for line in reply.lines() {
            let line = line.trim();
            if !line.is_empty() {
                scan.feed(line);
            }
        }

        tracing::debug!(
            dialect = %self.dialect,
            examples = scan.record.examples.len(),
            empty = scan.record.is_empty(),
            "parsed reply"
        );
        scan.record
    }
}

/// In-progress scan: the record so far and the open section
struct Scan {
    dialect: Dialect,
    record: ParsedRecord,
    section: Option<Section>,
}

impl Scan {
    fn feed(&mut self, line: &str) {
        if let Some((section, rest)) = self.dialect.match_header(line) {
            self.open(section, rest);
            return;
        }

        match self.section {
            Some(Section::Examples) => self.feed_example(line),
            Some(Section::Translation) | None => {
                tracing::trace!(line, "discarded line outside a continuable section");
            }
            Some(_) if examples::is_numbered_item(line) => {
                tracing::trace!(line, "discarded unrecognised numbered item");
            }
            Some(Section::Idiom) if line == IDIOM_PLACEHOLDER => {}
            Some(section) => {
                if let Some(field) = self.record.field_mut(section) {
                    append(field, line);
                }
            }
        }
    }

    fn open(&mut self, section: Section, rest: &str) {
        self.section = Some(section);

        let value = match section {
            Section::Idiom if rest == IDIOM_PLACEHOLDER => "",
            _ => rest,
        };

        match self.record.field_mut(section) {
            Some(field) => *field = value.to_string(),
            None if !value.is_empty() => {
                tracing::trace!(value, "ignored text on examples header line");
            }
            None => {}
        }
    }

    fn feed_example(&mut self, line: &str) {
        if examples::has_ordinal(line) {
            let example = examples::strip_ordinal(line);
            if !example.is_empty() {
                self.record.examples.push(example.to_string());
            }
        } else if let Some(last) = self.record.examples.last_mut() {
            append(last, line);
        } else {
            tracing::trace!(line, "discarded text before the first example");
        }
    }
}

/// Parse `reply` as written in `dialect`
pub fn parse(reply: &str, dialect: Dialect) -> ParsedRecord {
    ResponseParser::new(dialect).parse(reply)
}
