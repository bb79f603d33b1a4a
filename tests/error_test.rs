//! Error handling tests
//!
//! Verifies display output and conversions across the error layers.

use resume_ai_common::Error;
use resume_ai_rust::error::ResumeAiError;

/// Every variant renders a non-empty message
#[test]
fn test_error_display_non_empty() {
    let errors = vec![
        ResumeAiError::Config("bad config".to_string()),
        ResumeAiError::MissingBaseUrl,
        ResumeAiError::FileNotFound("resume.pdf".to_string()),
        ResumeAiError::Analysis(Error::Network("connection refused".to_string())),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty error message: {:?}", err);
    }
}

/// The server's detail message survives both error layers verbatim
#[test]
fn test_api_detail_propagates_verbatim() {
    let err: ResumeAiError = Error::Api("Resume text is empty".to_string()).into();
    assert_eq!(format!("{}", err), "Resume text is empty");
}

/// MissingBaseUrl explains how to fix the problem
#[test]
fn test_missing_base_url_message() {
    let display = format!("{}", ResumeAiError::MissingBaseUrl);
    assert!(display.contains("RESUME_AI_API_BASE_URL"));
    assert!(display.contains("resume-ai config"));
}

/// IO and JSON errors convert via From
#[test]
fn test_error_conversions() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let err: ResumeAiError = io_error.into();
    assert!(matches!(err, ResumeAiError::Io(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ResumeAiError = json_error.into();
    assert!(matches!(err, ResumeAiError::Json(_)));
}

/// Unsupported upload types carry the offending file name
#[test]
fn test_unsupported_file_message() {
    let err: ResumeAiError = Error::UnsupportedFile("resume.png".to_string()).into();
    let display = format!("{}", err);
    assert!(display.contains("resume.png"));
    assert!(display.contains("PDF or DOCX"));
}
