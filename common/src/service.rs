//! Analysis service contract
//!
//! Both front-ends talk to the remote analyzer through this trait, and
//! the mock implementation satisfies it too, so mock/real selection is a
//! composition-time decision rather than an internal fallback.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::AnalysisPayload;

/// A resume file handed to the service as raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Lowercased file extension, if any
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

/// Health probe result. The probe is infallible by contract: transport
/// failures are recovered into `error` by the implementation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    pub fn error() -> Self {
        Self {
            status: "error".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub const GENERIC_ERROR: &str = "An error occurred while processing your request";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Pull the `detail` message out of a non-2xx response body.
///
/// A JSON body without `detail` and a non-JSON body produce distinct
/// generic messages, matching the original client.
pub fn error_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("detail")
            .and_then(|detail| detail.as_str())
            .map(str::to_owned)
            .unwrap_or_else(|| GENERIC_ERROR.to_string()),
        Err(_) => UNKNOWN_ERROR.to_string(),
    }
}

/// The analysis service capability
#[async_trait(?Send)]
pub trait ResumeAnalyzer {
    /// Analyze resume text, optionally against a job description
    async fn analyze_text(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<AnalysisPayload>;

    /// Upload and analyze a resume file (PDF or DOCX)
    async fn analyze_file(
        &self,
        upload: FileUpload,
        job_description: Option<&str>,
    ) -> Result<AnalysisPayload>;

    /// Probe the service. Never fails; a dead service reports `error`.
    async fn check_health(&self) -> HealthStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_upload_extension() {
        let upload = FileUpload::new("Resume.PDF", vec![1, 2, 3]);
        assert_eq!(upload.extension().as_deref(), Some("pdf"));

        let no_ext = FileUpload::new("resume", vec![]);
        assert_eq!(no_ext.extension(), None);
    }

    #[test]
    fn test_health_status_constructors() {
        assert!(!HealthStatus::ok().is_error());
        assert!(HealthStatus::error().is_error());
    }

    #[test]
    fn test_health_status_deserialize() {
        let health: HealthStatus = serde_json::from_str(r#"{"status": "healthy"}"#).unwrap();
        assert_eq!(health.status, "healthy");
        assert!(!health.is_error());
    }

    // =============================================
    // error_detail
    // =============================================

    #[test]
    fn test_error_detail_present() {
        assert_eq!(
            error_detail(r#"{"detail": "Resume text is empty"}"#),
            "Resume text is empty"
        );
    }

    #[test]
    fn test_error_detail_missing_field() {
        assert_eq!(error_detail(r#"{"message": "nope"}"#), GENERIC_ERROR);
    }

    #[test]
    fn test_error_detail_unparseable_body() {
        assert_eq!(error_detail("<html>502 Bad Gateway</html>"), UNKNOWN_ERROR);
    }
}
