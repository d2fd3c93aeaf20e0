//! Output formatting module

use crate::route::Plan;
use anyhow::Result;
use fanyi_core::{ParsedRecord, Verdict};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the verdict for one classified input
    fn format_verdict(&mut self, input: &str, verdict: &Verdict) -> Result<()>;

    /// Format a parsed model reply
    fn format_record(&mut self, record: &ParsedRecord) -> Result<()>;

    /// Format a routing plan
    fn format_plan(&mut self, plan: &Plan) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one result per line
    Text,
    /// JSON with full metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text, one result per line",
            OutputFormat::Json => "JSON with full metadata",
            OutputFormat::Markdown => "Markdown tables and sections",
        }
    }
}

/// Display switches shared by the formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Show the deciding rule next to each classification
    pub show_rule: bool,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    options: OutputOptions,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.show_rule)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options.show_rule)),
    }
}

/// Labelled record fields in display order, skipping empty ones
pub(crate) fn record_fields(record: &ParsedRecord) -> impl Iterator<Item = (&'static str, &str)> {
    [
        ("Translation", record.translation.as_str()),
        ("Pronunciation", record.pronunciation.as_str()),
        ("Part of speech", record.part_of_speech.as_str()),
        ("Meaning", record.meaning.as_str()),
        ("Idiom", record.idiom.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
}
