//! Application-wide constants to avoid magic values throughout the codebase.
//!
//! Report headers, labels and separators live here so that the console
//! preview and the file report stay in sync.

/// Output format constants
pub mod output_formats {
    /// Text output format - colored console preview with summary
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - one tab-separated line per entry
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Default configuration values
pub mod defaults {
    /// File the full comparison report is written to
    pub const REPORT_FILE: &str = "comparison_results.txt";
    /// Entries shown per category on the console
    pub const PREVIEW_LIMIT: usize = 5;
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE: &str = ".sitecmp.toml";
    /// How many parent directories are searched for the config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Validation constants
pub mod validation {
    /// Maximum percentage value
    pub const MAX_PERCENTAGE: f64 = 100.0;
    /// Minimum percentage value
    pub const MIN_PERCENTAGE: f64 = 0.0;
}

/// Section headers and entry labels of the report
pub mod report {
    pub const SAME_HEADER: &str = "Same URLs";
    pub const OLD_ONLY_HEADER: &str = "Different URLs (old only)";
    pub const NEW_ONLY_HEADER: &str = "Different URLs (new only)";
    pub const BROKEN_HEADER: &str = "Broken URLs";

    pub const OLD_LABEL: &str = "Old: ";
    pub const NEW_LABEL: &str = "New: ";
    pub const URL_LABEL: &str = "URL: ";
    pub const PATH_LABEL: &str = "Path: ";
    pub const SITE_LABEL: &str = "Site: ";
    pub const ERROR_LABEL: &str = "Error: ";

    /// Width of the `=` rule around file report headers
    pub const FILE_RULE_WIDTH: usize = 50;
    /// Width of the `-` rule after each file report entry
    pub const FILE_ENTRY_RULE_WIDTH: usize = 30;
    /// Width of the `=` rule around console banners
    pub const CONSOLE_RULE_WIDTH: usize = 60;
    /// Width of the `-` rule after each console entry
    pub const CONSOLE_ENTRY_RULE_WIDTH: usize = 40;
}

/// Display and formatting constants
pub mod display {
    /// Emoji for a full match
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for a partial match
    pub const WARNING_EMOJI: &str = "⚠️";
    /// Emoji for a failed threshold
    pub const ERROR_EMOJI: &str = "❌";
    /// Emoji for file information
    pub const FILE_EMOJI: &str = "📁";
}
