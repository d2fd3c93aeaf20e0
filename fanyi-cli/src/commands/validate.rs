//! Validate command implementation

use anyhow::Result;
use clap::Args;
use fanyi_core::RuleSet;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to rule configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub rules_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        self.report(&mut io::stdout().lock())
    }

    /// Compile the rule file and describe the outcome on `out`
    fn report(&self, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "Validating rule configuration: {}",
            self.rules_config.display()
        )?;

        let rules = match RuleSet::from_file(&self.rules_config) {
            Ok(rules) => rules,
            Err(e) => {
                writeln!(out, "✗ Configuration is invalid!")?;
                writeln!(out, "  Error: {e}")?;
                return Err(anyhow::anyhow!("Validation failed: {}", e));
            }
        };

        writeln!(out, "✓ Configuration is valid!")?;
        writeln!(out, "  Rule set: {}", rules.name())?;
        if !rules.version().is_empty() {
            writeln!(out, "  Version: {}", rules.version())?;
        }
        writeln!(out, "  Script threshold: {}", rules.script().threshold())?;
        writeln!(out, "  Structural patterns: {}", rules.structural_pattern_count())?;
        writeln!(out, "  Compound terms: {}", rules.compound_term_count())?;
        writeln!(out, "  Technical phrases: {}", rules.technical_phrase_count())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL_RULES: &str = r#"
[metadata]
name = "minimal"
version = "0.3"

[terminators]
chars = ["."]

[interrogatives]

[latin]

[native]
structural_patterns = [{ pattern = "^是.+", description = "leading copula" }]
"#;

    fn report_for(dir: &TempDir, contents: &str) -> (Result<()>, String) {
        let path = dir.path().join("rules.toml");
        fs::write(&path, contents).unwrap();

        let args = ValidateArgs { rules_config: path };
        let mut out = Vec::new();
        let result = args.report(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_valid_rules_report_counts() {
        let dir = TempDir::new().unwrap();
        let (result, out) = report_for(&dir, MINIMAL_RULES);

        assert!(result.is_ok());
        assert!(out.contains("✓ Configuration is valid!"));
        assert!(out.contains("  Rule set: minimal\n"));
        assert!(out.contains("  Version: 0.3\n"));
        assert!(out.contains("  Structural patterns: 1\n"));
        assert!(out.contains("  Compound terms: 0\n"));
    }

    #[test]
    fn test_missing_version_is_not_reported() {
        let dir = TempDir::new().unwrap();
        let (result, out) = report_for(&dir, &MINIMAL_RULES.replace("version = \"0.3\"\n", ""));

        assert!(result.is_ok());
        assert!(!out.contains("Version:"));
    }

    #[test]
    fn test_invalid_rules_report_the_reason() {
        let dir = TempDir::new().unwrap();
        let (result, out) = report_for(&dir, &MINIMAL_RULES.replace(r#"chars = ["."]"#, "chars = []"));

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Validation failed:"));
        assert!(out.contains("✗ Configuration is invalid!"));
        assert!(out.contains("No terminator characters defined"));
        assert!(!out.contains("✓"));
    }

    #[test]
    fn test_bad_pattern_names_the_pattern() {
        let dir = TempDir::new().unwrap();
        let (result, out) = report_for(&dir, &MINIMAL_RULES.replace("^是.+", "(是"));

        assert!(result.is_err());
        assert!(out.contains("(是"), "report should name the pattern: {out}");
    }
}
