// Command-line interface definitions and parsing for sitecmp

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None, subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// File with the old site's URLs, one per line
    #[arg(required_unless_present = "demo")]
    pub old: Option<String>,

    /// File with the new site's URLs, one per line
    #[arg(required_unless_present = "demo")]
    pub new: Option<String>,

    /// Compare the built-in example inventories
    #[arg(long, conflicts_with_all = ["old", "new"])]
    pub demo: bool,

    // Report
    /// File to write the full report to (default: comparison_results.txt)
    #[arg(short = 'o', long, value_name = "FILE", help_heading = "Report")]
    pub output: Option<String>,

    /// Do not write the report file
    #[arg(long, help_heading = "Report")]
    pub no_report: bool,

    /// Entries shown per category on the console (default: 5)
    #[arg(long, value_name = "COUNT", help_heading = "Report")]
    pub preview: Option<usize>,

    // Filtering & Thresholds
    /// Path patterns to leave out of the comparison (regex)
    #[arg(long, value_name = "REGEX", help_heading = "Filtering & Thresholds")]
    pub exclude_pattern: Vec<String>,

    /// Fail unless at least PERCENT of the old site's URLs keep their path (0-100)
    #[arg(long, value_name = "PERCENT", help_heading = "Filtering & Thresholds")]
    pub min_match: Option<f64>,

    // Output & Verbosity
    /// Suppress console output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed CLI arguments into CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        output_file: cli.output.clone(),
        no_report: cli.no_report,
        preview_limit: cli.preview,
        exclude_patterns: if cli.exclude_pattern.is_empty() {
            None
        } else {
            Some(cli.exclude_pattern.clone())
        },
        min_match: cli.min_match,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
