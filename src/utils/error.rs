use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Common result type for pagemark operations
pub type Result<T> = std::result::Result<T, PagemarkError>;

/// Error types for pagemark operations
#[derive(Debug, Error)]
pub enum PagemarkError {
    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document or fixture could not be understood
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML configuration file that does not parse
    #[error("Failed to parse YAML configuration ({}): {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A TOML configuration file that does not parse
    #[error("Failed to parse TOML configuration ({}): {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A heading id that is not part of the current table of contents
    #[error("Unknown heading: {0}")]
    UnknownHeading(String),
}

impl From<String> for PagemarkError {
    fn from(msg: String) -> Self {
        PagemarkError::Parse(msg)
    }
}

impl From<&str> for PagemarkError {
    fn from(msg: &str) -> Self {
        PagemarkError::Parse(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = PagemarkError::Config("compact_range exceeds full_range".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: compact_range exceeds full_range"
        );

        let err: PagemarkError = "bad fixture".into();
        assert_eq!(err.to_string(), "Parse error: bad fixture");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: PagemarkError = io_err.into();
        assert!(matches!(err, PagemarkError::Io(_)));
    }
}
