//! Analysis service access for the web app

mod http;

pub use http::HttpResumeService;

use resume_ai_common::ResumeAnalyzer;
use std::sync::Arc;

/// The service handle passed through context at composition time
pub type SharedAnalyzer = Arc<dyn ResumeAnalyzer + Send + Sync>;
