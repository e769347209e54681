use std::fmt;

/// Error types for sitecmp operations
#[derive(Debug)]
pub enum SiteCmpError {
    /// IO error (reading URL lists, writing the report)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// A URL that could not be parsed into a path
    UrlParse {
        url: String,
        source: url::ParseError,
    },

    /// Regex compilation error
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl SiteCmpError {
    /// Whether the error only affects a single URL and the run can continue
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SiteCmpError::UrlParse { .. })
    }
}

impl fmt::Display for SiteCmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteCmpError::Io(err) => write!(f, "IO error: {err}"),
            SiteCmpError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SiteCmpError::UrlParse { url, source } => {
                write!(f, "Invalid URL: {url} - {source}")
            }
            SiteCmpError::Regex(err) => write!(f, "Regex error: {err}"),
            SiteCmpError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            SiteCmpError::Json(err) => write!(f, "JSON error: {err}"),
            SiteCmpError::FileNotFound(path) => write!(f, "File not found: {path}"),
            SiteCmpError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for SiteCmpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteCmpError::Io(err) => Some(err),
            SiteCmpError::UrlParse { source, .. } => Some(source),
            SiteCmpError::Regex(err) => Some(err),
            SiteCmpError::TomlParsing(err) => Some(err),
            SiteCmpError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SiteCmpError {
    fn from(err: std::io::Error) -> Self {
        SiteCmpError::Io(err)
    }
}

impl From<regex::Error> for SiteCmpError {
    fn from(err: regex::Error) -> Self {
        SiteCmpError::Regex(err)
    }
}

impl From<toml::de::Error> for SiteCmpError {
    fn from(err: toml::de::Error) -> Self {
        SiteCmpError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for SiteCmpError {
    fn from(err: serde_json::Error) -> Self {
        SiteCmpError::Json(err)
    }
}

/// Type alias for Results using SiteCmpError
pub type Result<T> = std::result::Result<T, SiteCmpError>;
