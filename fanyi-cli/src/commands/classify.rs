//! Classify command implementation

use super::{load_rules, open_output};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, split_inputs, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputOptions};
use anyhow::Result;
use clap::Args;
use fanyi_core::{InputClassifier, Verdict};
use rayon::prelude::*;
use std::path::PathBuf;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Texts to classify (default: stdin when no --input is given)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Classify each non-blank line separately
    #[arg(short, long)]
    pub lines: bool,

    /// Rule file replacing the embedded tables
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Show the rule that decided each classification
    #[arg(short, long)]
    pub explain: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let rules_path = self.rules.as_deref().or(config.classification.rules.as_deref());
        let rules = load_rules(rules_path)?;
        let classifier = InputClassifier::new(&rules);

        let inputs = self.collect_inputs()?;
        log::info!("Classifying {} inputs", inputs.len());

        // collect() keeps input order
        let verdicts: Vec<Verdict> = inputs
            .par_iter()
            .map(|text| classifier.explain(text))
            .collect();

        let options = OutputOptions {
            show_rule: self.explain,
            pretty_json: config.output.pretty_json,
        };
        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(format, open_output(self.output.as_deref())?, options);

        for (input, verdict) in inputs.iter().zip(&verdicts) {
            formatter.format_verdict(input, verdict)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn collect_inputs(&self) -> Result<Vec<String>> {
        let mut inputs: Vec<String> = self
            .texts
            .iter()
            .flat_map(|text| split_inputs(text, self.lines))
            .collect();

        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                log::info!("Reading {}", path.display());
                let content = FileReader::read_text(&path)?;
                inputs.extend(split_inputs(&content, self.lines));
            }
        }

        if self.texts.is_empty() && self.input.is_empty() {
            log::info!("Reading stdin");
            inputs.extend(split_inputs(&FileReader::read_stdin()?, self.lines));
        }

        if inputs.is_empty() {
            return Err(CliError::NoInput("no non-blank lines to classify".to_string()).into());
        }

        Ok(inputs)
    }
}
