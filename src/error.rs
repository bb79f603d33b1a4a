use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAiError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("API base URL is not configured. Set RESUME_AI_API_BASE_URL or run `resume-ai config --set-api-url <URL>`")]
    MissingBaseUrl,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Analysis-layer failure; API errors surface the server's detail
    /// message unchanged.
    #[error("{0}")]
    Analysis(#[from] resume_ai_common::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ResumeAiError>;
