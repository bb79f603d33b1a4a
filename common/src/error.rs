//! Error type shared by the CLI and Web (WASM) clients

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    /// Failure reported by the analysis service. The message is the
    /// server-supplied `detail` string, surfaced verbatim.
    #[error("{0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Unsupported file type: {0}. Please upload a PDF or DOCX file")]
    UnsupportedFile(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_detail_verbatim() {
        let error = Error::Api("Resume text is empty".to_string());
        assert_eq!(format!("{}", error), "Resume text is empty");
    }

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("connection refused".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Network error"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_display_unsupported_file() {
        let error = Error::UnsupportedFile("resume.png".to_string());
        let display = format!("{}", error);
        assert!(display.contains("resume.png"));
        assert!(display.contains("PDF or DOCX"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Config("missing base URL".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Config"));
        assert!(debug.contains("missing base URL"));
    }
}
