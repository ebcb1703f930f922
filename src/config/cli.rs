use crate::app::OutputFormat;
use crate::config::DrawSettings;
use crate::domain::SettingsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_extension, validate_path, validate_positive_number, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "santa-draw")]
#[command(about = "Draw Secret Santa assignments that respect every exclusion")]
pub struct CliConfig {
    /// Session file describing the participants (.json or .toml)
    pub session: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Randomized attempts before a full search
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Candidate assignments a bounded attempt may try
    #[arg(long)]
    pub step_limit: Option<u64>,

    /// Check the session can be drawn without drawing it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl SettingsProvider for CliConfig {
    fn session_path(&self) -> &Path {
        &self.session
    }

    fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    fn draw_settings(&self, base: Option<&DrawSettings>) -> DrawSettings {
        let base = base.cloned().unwrap_or_default();
        DrawSettings {
            max_attempts: self.max_attempts.unwrap_or(base.max_attempts),
            step_limit: self.step_limit.or(base.step_limit),
            seed: self.seed.or(base.seed),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let session = self.session.to_string_lossy();
        validate_path("session", &session)?;
        validate_extension("session", &session, &["json", "toml"])?;

        if let Some(output) = &self.output {
            validate_path("output", &output.to_string_lossy())?;
        }
        if let Some(attempts) = self.max_attempts {
            validate_positive_number("max_attempts", attempts, 1)?;
        }
        if let Some(limit) = self.step_limit {
            validate_positive_number("step_limit", limit, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_session_settings() {
        let config = CliConfig::parse_from(["santa-draw", "family.toml", "--seed", "3"]);
        let base = DrawSettings {
            max_attempts: 2,
            step_limit: Some(50),
            seed: Some(1),
        };

        let settings = config.draw_settings(Some(&base));

        assert_eq!(settings.seed, Some(3));
        assert_eq!(settings.max_attempts, 2);
        assert_eq!(settings.step_limit, Some(50));
    }

    #[test]
    fn test_parse_format_and_flags() {
        let config = CliConfig::parse_from([
            "santa-draw",
            "family.json",
            "--format",
            "csv",
            "--dry-run",
            "-o",
            "out/result.csv",
        ]);

        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.dry_run);
        assert_eq!(config.output_path(), Some(Path::new("out/result.csv")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let wrong_extension = CliConfig::parse_from(["santa-draw", "family.txt"]);
        let zero_attempts =
            CliConfig::parse_from(["santa-draw", "family.json", "--max-attempts", "0"]);

        assert!(wrong_extension.validate().is_err());
        assert!(zero_attempts.validate().is_err());
    }
}
