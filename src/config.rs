use crate::constants::{DEFAULT_KEYWORDS_PATH, DEFAULT_RESUME_PATH};
use crate::report::ReportFormat;
use crate::utils;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from settings.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Résumé to scan (.pdf or .docx)
    #[serde(default = "default_resume_path")]
    pub resume: String,
    /// Keyword list, one keyword per line
    #[serde(default = "default_keywords_path")]
    pub keywords: String,
}

fn default_resume_path() -> String {
    DEFAULT_RESUME_PATH.to_string()
}

fn default_keywords_path() -> String {
    DEFAULT_KEYWORDS_PATH.to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            resume: default_resume_path(),
            keywords: default_keywords_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from default location or return defaults
    pub fn load() -> Result<Self> {
        let default_paths = [
            "config/settings.toml",
            "./config/settings.toml",
            "~/.config/cvscan/settings.toml",
        ];

        for raw in &default_paths {
            let path = utils::expand_path(raw)?;
            if path.exists() {
                tracing::debug!("Loading config from {}", path.display());
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(
        mut self,
        resume: Option<String>,
        keywords: Option<String>,
        format: Option<ReportFormat>,
    ) -> Self {
        if let Some(resume) = resume {
            self.input.resume = resume;
        }
        if let Some(keywords) = keywords {
            self.input.keywords = keywords;
        }
        if let Some(format) = format {
            self.report.format = format;
        }
        self
    }

    /// Résumé path with `~` and env vars expanded
    pub fn resume_path(&self) -> Result<PathBuf> {
        utils::expand_path(&self.input.resume)
    }

    /// Keyword list path with `~` and env vars expanded
    pub fn keywords_path(&self) -> Result<PathBuf> {
        utils::expand_path(&self.input.keywords)
    }
}
