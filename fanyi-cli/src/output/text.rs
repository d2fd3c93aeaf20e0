//! Plain text output formatter

use super::{record_fields, OutputFormatter};
use crate::route::Plan;
use anyhow::Result;
use fanyi_core::{ParsedRecord, Verdict};
use std::io::Write;

/// Plain text formatter - outputs one verdict per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_rule: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_rule: bool) -> Self {
        Self { writer, show_rule }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_verdict(&mut self, input: &str, verdict: &Verdict) -> Result<()> {
        if self.show_rule {
            writeln!(
                self.writer,
                "{}\t{}\t{}",
                verdict.classification, verdict.rule, input
            )?;
        } else {
            writeln!(self.writer, "{}\t{}", verdict.classification, input)?;
        }
        Ok(())
    }

    fn format_record(&mut self, record: &ParsedRecord) -> Result<()> {
        for (label, value) in record_fields(record) {
            writeln!(self.writer, "{label}: {value}")?;
        }
        if !record.examples.is_empty() {
            writeln!(self.writer, "Examples:")?;
            for (i, example) in record.examples.iter().enumerate() {
                writeln!(self.writer, "  {}. {}", i + 1, example)?;
            }
        }
        Ok(())
    }

    fn format_plan(&mut self, plan: &Plan) -> Result<()> {
        let dialect = plan.dialect.map_or("plain", |d| d.as_str());
        writeln!(self.writer, "input: {}", plan.input)?;
        writeln!(self.writer, "classification: {}", plan.classification)?;
        writeln!(self.writer, "rule: {}", plan.rule)?;
        writeln!(self.writer, "target: {}", plan.target.as_str())?;
        writeln!(self.writer, "dialect: {dialect}")?;
        if let Some(section) = plan.detail_section {
            writeln!(self.writer, "detail section: {section}")?;
        }
        writeln!(self.writer, "max tokens: {}", plan.max_tokens)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanyi_core::explain;

    fn render(show_rule: bool, f: impl FnOnce(&mut TextFormatter<Vec<u8>>)) -> String {
        let mut formatter = TextFormatter::new(Vec::new(), show_rule);
        f(&mut formatter);
        String::from_utf8(formatter.writer).unwrap()
    }

    #[test]
    fn test_verdict_line() {
        let out = render(false, |f| f.format_verdict("hello", &explain("hello")).unwrap());
        assert_eq!(out, "word\thello\n");

        let out = render(true, |f| f.format_verdict("hello", &explain("hello")).unwrap());
        assert_eq!(out, "word\tsingle_token\thello\n");
    }

    #[test]
    fn test_record_lines() {
        let record = ParsedRecord {
            translation: "苹果".to_string(),
            examples: vec!["I ate an apple.".to_string()],
            ..ParsedRecord::default()
        };
        let out = render(false, |f| f.format_record(&record).unwrap());
        assert_eq!(out, "Translation: 苹果\nExamples:\n  1. I ate an apple.\n");
    }

    #[test]
    fn test_empty_record_prints_nothing() {
        let out = render(false, |f| f.format_record(&ParsedRecord::default()).unwrap());
        assert!(out.is_empty());
    }
}
