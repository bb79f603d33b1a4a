//! HTTP client for the remote analysis service
//!
//! Implements the shared [`ResumeAnalyzer`] contract over reqwest. Error
//! bodies carry a `detail` field which is surfaced to the user verbatim;
//! the health probe recovers every failure locally.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use resume_ai_common::error::{Error, Result};
use resume_ai_common::service::{error_detail, FileUpload, HealthStatus, ResumeAnalyzer};
use resume_ai_common::types::{AnalysisPayload, AnalysisRequest};

pub struct HttpResumeService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpResumeService {
    /// No request timeout: a call resolves, fails, or hangs with the
    /// service, matching the browser client.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl ResumeAnalyzer for HttpResumeService {
    async fn analyze_text(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<AnalysisPayload> {
        let url = format!("{}/api/resume/analyze", self.base_url);
        tracing::debug!(%url, "submitting resume text");

        let request = AnalysisRequest {
            resume_text: resume_text.to_string(),
            job_description: job_description.map(str::to_string),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        decode_response(response).await
    }

    async fn analyze_file(
        &self,
        upload: FileUpload,
        job_description: Option<&str>,
    ) -> Result<AnalysisPayload> {
        let url = format!("{}/api/resume/analyze/file", self.base_url);
        tracing::debug!(%url, file = %upload.file_name, "uploading resume file");

        let content_type = content_type_for(upload.extension().as_deref());
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(content_type)
            .map_err(|e| Error::Network(e.to_string()))?;

        let mut form = Form::new().part("file", part);
        if let Some(job_description) = job_description {
            form = form.text("job_description", job_description.to_string());
        }

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        decode_response(response).await
    }

    async fn check_health(&self) -> HealthStatus {
        let url = format!("{}/health", self.base_url);
        tracing::debug!(%url, "health probe");

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response
                .json::<HealthStatus>()
                .await
                .unwrap_or_else(|_| HealthStatus::error()),
            Ok(response) => {
                tracing::warn!(status = %response.status(), "health probe failed");
                HealthStatus::error()
            }
            Err(e) => {
                tracing::warn!(error = %e, "health probe unreachable");
                HealthStatus::error()
            }
        }
    }
}

async fn decode_response(response: reqwest::Response) -> Result<AnalysisPayload> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !status.is_success() {
        tracing::warn!(%status, "analysis request rejected");
        return Err(Error::Api(error_detail(&body)));
    }

    serde_json::from_str(&body).map_err(|e| Error::InvalidResponse(e.to_string()))
}

fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("pdf") => "application/pdf",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}
