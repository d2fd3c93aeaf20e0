//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use fanyi_core::EMBEDDED_RULES;
use std::path::PathBuf;

const DEFAULT_NAME_LINE: &str = "name = \"default\"";

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Name for the new rule set
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating rule configuration template...");
        println!("  Rule set: {}", self.name);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the word lists and thresholds");
        println!("2. Validate your configuration:");
        println!("   fanyi validate -c {}", self.output.display());
        println!("3. Use it for classification:");
        println!("   fanyi classify --rules {} \"some text\"", self.output.display());

        Ok(())
    }

    /// Embedded defaults renamed to `self.name`
    fn generate_template(&self) -> String {
        let name_line = format!("name = {}", toml::Value::String(self.name.clone()));
        format!(
            "# Rule tables '{}', generated from the built-in defaults\n\n{}",
            self.name,
            EMBEDDED_RULES.replacen(DEFAULT_NAME_LINE, &name_line, 1)
        )
    }
}
