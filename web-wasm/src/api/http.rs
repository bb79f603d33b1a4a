//! Fetch-based client for the remote analysis service
//!
//! Same contract as the CLI client: error bodies carry a `detail` field
//! surfaced verbatim, the health probe recovers all failures locally,
//! and no timeout is applied.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Request, RequestInit, RequestMode, Response};

use resume_ai_common::error::{Error, Result};
use resume_ai_common::service::{error_detail, FileUpload, HealthStatus, ResumeAnalyzer};
use resume_ai_common::types::{AnalysisPayload, AnalysisRequest};

pub struct HttpResumeService {
    base_url: String,
}

impl HttpResumeService {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl ResumeAnalyzer for HttpResumeService {
    async fn analyze_text(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<AnalysisPayload> {
        let url = self.endpoint("/api/resume/analyze");
        web_sys::console::debug_1(&format!("POST {}", url).into());

        let body = serde_json::to_string(&AnalysisRequest {
            resume_text: resume_text.to_string(),
            job_description: job_description.map(str::to_string),
        })?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let (status, body) = fetch_text(&request).await?;
        decode_response(status, &body)
    }

    async fn analyze_file(
        &self,
        upload: FileUpload,
        job_description: Option<&str>,
    ) -> Result<AnalysisPayload> {
        let url = self.endpoint("/api/resume/analyze/file");
        web_sys::console::debug_1(&format!("POST {} ({})", url, upload.file_name).into());

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(upload.bytes.as_slice()));
        let blob = Blob::new_with_u8_array_sequence(&parts).map_err(js_error)?;

        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", &blob, &upload.file_name)
            .map_err(js_error)?;
        if let Some(job_description) = job_description {
            form.append_with_str("job_description", job_description)
                .map_err(js_error)?;
        }

        // no Content-Type header: the browser sets the multipart boundary
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(form.as_ref());

        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

        let (status, body) = fetch_text(&request).await?;
        decode_response(status, &body)
    }

    async fn check_health(&self) -> HealthStatus {
        let url = self.endpoint("/health");

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = match Request::new_with_str_and_init(&url, &opts) {
            Ok(request) => request,
            Err(_) => return HealthStatus::error(),
        };

        match fetch_text(&request).await {
            Ok((status, body)) if is_success(status) => {
                serde_json::from_str(&body).unwrap_or_else(|_| HealthStatus::error())
            }
            Ok(_) | Err(_) => {
                web_sys::console::error_1(&"Health check error".into());
                HealthStatus::error()
            }
        }
    }
}

/// Run a request through the browser fetch API, returning the status
/// code and the body text
async fn fetch_text(request: &Request) -> Result<(u16, String)> {
    let window = web_sys::window().ok_or_else(|| Error::Network("no window".to_string()))?;

    let response_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| Error::Network("unexpected fetch result".to_string()))?;

    let status = response.status();
    let text_value = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok((status, text_value.as_string().unwrap_or_default()))
}

fn decode_response(status: u16, body: &str) -> Result<AnalysisPayload> {
    if !is_success(status) {
        return Err(Error::Api(error_detail(body)));
    }
    serde_json::from_str(body).map_err(|e| Error::InvalidResponse(e.to_string()))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn js_error(value: JsValue) -> Error {
    Error::Network(format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let service = HttpResumeService::new("http://localhost:8000/".to_string());
        assert_eq!(
            service.endpoint("/api/resume/analyze"),
            "http://localhost:8000/api/resume/analyze"
        );
        assert_eq!(service.endpoint("/health"), "http://localhost:8000/health");
    }

    #[test]
    fn test_is_success_range() {
        assert!(is_success(200));
        assert!(is_success(299));
        assert!(!is_success(302));
        assert!(!is_success(404));
        assert!(!is_success(500));
    }

    #[test]
    fn test_decode_response_error_detail() {
        let result = decode_response(422, r#"{"detail": "Resume text is empty"}"#);
        match result {
            Err(Error::Api(message)) => assert_eq!(message, "Resume text is empty"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_response_structured() {
        let payload = decode_response(200, r#"{"status": "success"}"#).unwrap();
        assert!(matches!(payload, AnalysisPayload::Structured(_)));
    }

    #[test]
    fn test_decode_response_report() {
        let payload =
            decode_response(200, r#"{"status": "success", "analysis": "text"}"#).unwrap();
        assert!(matches!(payload, AnalysisPayload::Report(_)));
    }

    #[test]
    fn test_decode_response_invalid_json() {
        let result = decode_response(200, "not json");
        assert!(matches!(result, Err(Error::InvalidResponse(_))));
    }
}
