//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default label used when no function name is given
pub const DEFAULT_FUNCTION: &str = "syscall";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Describe command configuration
    #[serde(default)]
    pub describe: DescribeConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Table command configuration
    #[serde(default)]
    pub table: TableConfig,
}

impl CliConfig {
    /// Load and validate a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.describe.default_function.is_empty() {
            return Err(CliError::ConfigError(
                "describe.default_function must not be empty".to_string(),
            ));
        }
        if self.table.from > self.table.to {
            return Err(CliError::ConfigError(format!(
                "table.from ({}) is greater than table.to ({})",
                self.table.from, self.table.to
            )));
        }
        Ok(())
    }
}

/// Describe-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DescribeConfig {
    /// Function name used when `--function` and `--text` are both absent
    pub default_function: String,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            default_function: DEFAULT_FUNCTION.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Table-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    /// First code rendered (inclusive)
    pub from: i32,

    /// Last code rendered (inclusive)
    pub to: i32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { from: 1, to: 133 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.describe.default_function, "syscall");
        assert_eq!(config.output.default_format, OutputFormat::Text);
        assert_eq!(config.table.from, 1);
        assert_eq!(config.table.to, 133);
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml(
            r#"
[output]
default_format = "json"

[table]
to = 40
"#,
        )
        .unwrap();
        assert_eq!(config.output.default_format, OutputFormat::Json);
        assert!(config.output.pretty_json);
        assert_eq!(config.table.from, 1);
        assert_eq!(config.table.to, 40);
    }

    #[test]
    fn test_inverted_table_range_rejected() {
        let err = CliConfig::from_toml("[table]\nfrom = 50\nto = 10\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
        assert!(err.to_string().contains("table.from (50)"));
    }

    #[test]
    fn test_empty_function_rejected() {
        let err = CliConfig::from_toml("[describe]\ndefault_function = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("default_function"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = CliConfig::from_toml("[output]\ndefault_format = \"yaml\"\n");
        assert!(matches!(result, Err(CliError::ConfigError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[describe]\ndefault_function = \"accept\"").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.describe.default_function, "accept");
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/nbio.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
