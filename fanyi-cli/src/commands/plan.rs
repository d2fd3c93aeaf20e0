//! Plan command implementation

use super::{load_rules, open_output};
use crate::config::CliConfig;
use crate::output::{create_formatter, OutputFormat, OutputOptions};
use crate::route::{self, Target};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the plan command
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Text to route
    #[arg(value_name = "TEXT", required = true)]
    pub text: String,

    /// Target language (default from config, else zh)
    #[arg(short, long, value_enum)]
    pub target: Option<Target>,

    /// Rule file replacing the embedded tables
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let rules_path = self.rules.as_deref().or(config.classification.rules.as_deref());
        let rules = load_rules(rules_path)?;
        let target = self.target.unwrap_or(config.routing.default_target);

        let plan = route::plan(&self.text, target, &rules, &config.routing.budgets());

        let options = OutputOptions {
            show_rule: true,
            pretty_json: config.output.pretty_json,
        };
        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(format, open_output(None)?, options);
        formatter.format_plan(&plan)?;
        formatter.finish()?;

        Ok(())
    }
}
