use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::SummaryFormat;

/// Suffix appended to an input's file stem to name its report
pub const DEFAULT_REPORT_SUFFIX: &str = "_text_metrics.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Report output settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default directory for reports (current directory if unset)
    pub output_dir: Option<PathBuf>,

    /// Suffix used to derive report names from input names
    pub report_suffix: String,

    /// Default console summary format
    pub default_format: SummaryFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            report_suffix: DEFAULT_REPORT_SUFFIX.to_string(),
            default_format: SummaryFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults.
    ///
    /// Never writes anything; use [`Config::save`] to create the file.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)
            .context("Failed to read config file")?;

        let config: Config = serde_yaml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default config path
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()
            .context("Could not determine config directory")?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs_err::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs_err::write(path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    fn config_path() -> Option<PathBuf> {
        // Current directory first, so a project can carry its own settings
        let local_config = PathBuf::from("lexmetrics.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir().map(|dir| dir.join("lexmetrics").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        let suffix = &self.output.report_suffix;
        if suffix.is_empty() {
            anyhow::bail!("output.report_suffix must not be empty");
        }

        if suffix.contains('/') || suffix.contains('\\') {
            anyhow::bail!("output.report_suffix must not contain a path separator: {}", suffix);
        }

        Ok(())
    }

    /// Report name for an input file under this configuration
    pub fn report_name_for(&self, input: &Path) -> String {
        crate::utils::report_name_for(input, &self.output.report_suffix)
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        match &self.output.output_dir {
            Some(dir) => println!("  Output Dir: {}", dir.display()),
            None => println!("  Output Dir: (current directory)"),
        }
        println!("  Report Suffix: {}", self.output.report_suffix);
        println!("  Default Format: {}", self.output.default_format);
        if let Some(path) = Self::config_path() {
            println!("  Config File: {}", path.display());
        }
    }
}
