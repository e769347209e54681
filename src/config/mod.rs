//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::comparison::CompareOptions;
use crate::core::constants::{defaults, output_formats, validation};
use crate::core::error::{Result, SiteCmpError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// File the full text report is written to
    pub output_file: Option<String>,

    /// Write the text report at all
    pub write_report: Option<bool>,

    /// Entries shown per category on the console
    pub preview_limit: Option<usize>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Path patterns to leave out of the comparison (regex)
    pub exclude_patterns: Option<Vec<String>>,

    /// Minimum match percentage - fail if fewer old paths survive (0-100)
    pub min_match: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: Some(defaults::REPORT_FILE.to_string()),
            write_report: Some(true),
            preview_limit: Some(defaults::PREVIEW_LIMIT),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            exclude_patterns: None,
            min_match: None, // No threshold by default
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SiteCmpError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            SiteCmpError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(defaults::CONFIG_FILE) {
            return config;
        }

        for i in 1..=defaults::CONFIG_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), defaults::CONFIG_FILE);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Report
        if let Some(ref output_file) = cli_config.output_file {
            self.output_file = Some(output_file.clone());
        }
        if cli_config.no_report {
            self.write_report = Some(false);
        }
        if let Some(preview_limit) = cli_config.preview_limit {
            self.preview_limit = Some(preview_limit);
        }

        // Filtering & thresholds
        if let Some(ref exclude_patterns) = cli_config.exclude_patterns {
            self.exclude_patterns = Some(exclude_patterns.clone());
        }
        if let Some(min_match) = cli_config.min_match {
            self.min_match = Some(min_match);
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    /// Compile exclude patterns into regex objects
    pub fn compile_exclude_patterns(&self) -> Result<Vec<Regex>> {
        let mut compiled = Vec::new();
        if let Some(ref patterns) = self.exclude_patterns {
            for pattern in patterns {
                compiled.push(Regex::new(pattern)?);
            }
        }
        Ok(compiled)
    }

    /// Options for the comparison itself
    pub fn compare_options(&self) -> Result<CompareOptions> {
        Ok(CompareOptions {
            exclude_patterns: self.compile_exclude_patterns()?,
        })
    }

    pub fn report_path(&self) -> Option<&str> {
        if self.write_report.unwrap_or(true) {
            Some(self.output_file.as_deref().unwrap_or(defaults::REPORT_FILE))
        } else {
            None
        }
    }

    pub fn preview_limit(&self) -> usize {
        self.preview_limit.unwrap_or(defaults::PREVIEW_LIMIT)
    }

    pub fn output_format(&self) -> &str {
        self.output_format.as_deref().unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref output_file) = self.output_file
            && output_file.trim().is_empty()
        {
            return Err(SiteCmpError::Config(
                "Output file cannot be empty. Expected a file path.".to_string(),
            ));
        }

        if self.preview_limit == Some(0) {
            return Err(SiteCmpError::Config(
                "Preview limit cannot be 0. Expected a positive integer.".to_string(),
            ));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(SiteCmpError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        if let Some(min_match) = self.min_match {
            const EPSILON: f64 = 1e-10;
            let range =
                (validation::MIN_PERCENTAGE - EPSILON)..=(validation::MAX_PERCENTAGE + EPSILON);
            if !range.contains(&min_match) {
                return Err(SiteCmpError::Config(format!(
                    "Minimum match {min_match}% is invalid. Expected a value between 0-100."
                )));
            }
        }

        // Validate exclude patterns by trying to compile them
        self.compile_exclude_patterns()?;

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Report
    pub output_file: Option<String>,   // --output
    pub no_report: bool,               // --no-report
    pub preview_limit: Option<usize>,  // --preview

    // Filtering & thresholds
    pub exclude_patterns: Option<Vec<String>>, // --exclude-pattern
    pub min_match: Option<f64>,                // --min-match

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
