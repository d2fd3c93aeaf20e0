//! Markdown output formatter

use super::{record_fields, OutputFormatter};
use crate::route::Plan;
use anyhow::Result;
use fanyi_core::{ParsedRecord, Verdict};
use std::io::Write;

/// Markdown formatter - verdicts as a table, records as sections
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    show_rule: bool,
    verdict_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, show_rule: bool) -> Self {
        Self {
            writer,
            show_rule,
            verdict_count: 0,
        }
    }
}

/// Escape table-breaking characters
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_verdict(&mut self, input: &str, verdict: &Verdict) -> Result<()> {
        if self.verdict_count == 0 {
            if self.show_rule {
                writeln!(self.writer, "| # | Input | Classification | Rule |")?;
                writeln!(self.writer, "|---|-------|----------------|------|")?;
            } else {
                writeln!(self.writer, "| # | Input | Classification |")?;
                writeln!(self.writer, "|---|-------|----------------|")?;
            }
        }
        self.verdict_count += 1;

        write!(
            self.writer,
            "| {} | {} | {} |",
            self.verdict_count,
            cell(input),
            verdict.classification
        )?;
        if self.show_rule {
            write!(self.writer, " {} |", verdict.rule)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_record(&mut self, record: &ParsedRecord) -> Result<()> {
        for (label, value) in record_fields(record) {
            writeln!(self.writer, "## {label}")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{value}")?;
            writeln!(self.writer)?;
        }
        if !record.examples.is_empty() {
            writeln!(self.writer, "## Examples")?;
            writeln!(self.writer)?;
            for (i, example) in record.examples.iter().enumerate() {
                writeln!(self.writer, "{}. {}", i + 1, example)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn format_plan(&mut self, plan: &Plan) -> Result<()> {
        writeln!(self.writer, "## Plan for `{}`", plan.input)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- **Classification:** {}", plan.classification)?;
        writeln!(self.writer, "- **Rule:** {}", plan.rule)?;
        writeln!(self.writer, "- **Target:** {}", plan.target.as_str())?;
        match plan.dialect {
            Some(dialect) => writeln!(self.writer, "- **Dialect:** {dialect}")?,
            None => writeln!(self.writer, "- **Dialect:** plain reply")?,
        }
        if let Some(section) = plan.detail_section {
            writeln!(self.writer, "- **Detail section:** {section}")?;
        }
        writeln!(self.writer, "- **Max tokens:** {}", plan.max_tokens)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.verdict_count > 0 {
            writeln!(self.writer)?;
            writeln!(self.writer, "---")?;
            writeln!(self.writer, "*Total inputs: {}*", self.verdict_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
