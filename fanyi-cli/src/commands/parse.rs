//! Parse command implementation

use super::open_output;
use crate::config::CliConfig;
use crate::input::FileReader;
use crate::output::{create_formatter, OutputFormat, OutputOptions};
use anyhow::Result;
use clap::Args;
use fanyi_core::{Dialect, ParsedRecord, ResponseParser};
use std::path::PathBuf;

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Reply file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Reply template the model was asked to follow (generic, native)
    #[arg(short, long, default_value = "generic")]
    pub dialect: Dialect,

    /// The reply is a plain sentence translation without headers
    #[arg(short, long)]
    pub plain: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let reply = match &self.input {
            Some(path) => FileReader::read_text(path)?,
            None => FileReader::read_stdin()?,
        };

        let record = self.parse_reply(&reply);
        if record.is_empty() {
            log::warn!("Reply matched no {} headers", self.dialect);
        }

        let options = OutputOptions {
            show_rule: false,
            pretty_json: config.output.pretty_json,
        };
        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(format, open_output(self.output.as_deref())?, options);
        formatter.format_record(&record)?;
        formatter.finish()?;

        Ok(())
    }

    fn parse_reply(&self, reply: &str) -> ParsedRecord {
        if self.plain {
            ParsedRecord::from_plain_reply(reply)
        } else {
            ResponseParser::new(self.dialect).parse(reply)
        }
    }
}
