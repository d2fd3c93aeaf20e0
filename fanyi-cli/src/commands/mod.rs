//! CLI command implementations

use crate::config::CliConfig;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::Subcommand;
use fanyi_core::{default_rules, Dialect, Rule, RuleSet};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod classify;
pub mod generate_config;
pub mod parse;
pub mod plan;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify inputs as words/phrases or sentences
    Classify(classify::ClassifyArgs),

    /// Parse a model reply into fields
    Parse(parse::ParseArgs),

    /// Show how an input would be routed to the model
    Plan(plan::PlanArgs),

    /// Validate a rule configuration file
    Validate(validate::ValidateArgs),

    /// Write the default rule tables as a starting point
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        match self {
            Commands::Classify(args) => args.execute(config),
            Commands::Parse(args) => args.execute(config),
            Commands::Plan(args) => args.execute(config),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List classification rules in evaluation order
    Rules,

    /// List reply dialects and the headers they recognise
    Dialects,

    /// List available output formats
    Formats,
}

impl ListCommands {
    pub fn execute(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        match self {
            ListCommands::Rules => {
                writeln!(out, "Classification rules (evaluated in order):")?;
                for rule in Rule::ALL {
                    writeln!(
                        out,
                        "  {:<22} {:<9} {}",
                        rule.as_str(),
                        rule.classification().as_str(),
                        rule.description()
                    )?;
                }
            }
            ListCommands::Dialects => {
                writeln!(out, "Reply dialects:")?;
                for dialect in Dialect::ALL {
                    writeln!(out, "  {dialect}")?;
                    for prefix in dialect.header_prefixes() {
                        writeln!(out, "    {prefix}")?;
                    }
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Output formats:")?;
                for format in OutputFormat::ALL {
                    writeln!(out, "  {:<9} {}", format.as_str(), format.description())?;
                }
            }
        }
        Ok(())
    }
}

/// Load the rule file at `path`, or borrow the embedded rules
pub(crate) fn load_rules(path: Option<&Path>) -> Result<Cow<'static, RuleSet>> {
    match path {
        Some(path) => {
            let rules = RuleSet::from_file(path)
                .with_context(|| format!("Failed to load rules from {}", path.display()))?;
            log::info!("Using rule set '{}' from {}", rules.name(), path.display());
            Ok(Cow::Owned(rules))
        }
        None => Ok(Cow::Borrowed(default_rules())),
    }
}

/// Open the output destination (default: stdout)
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
