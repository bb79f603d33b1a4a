//! Resume AI Common Library
//!
//! Types and utilities shared between the CLI and Web (WASM) clients

pub mod error;
pub mod mock;
pub mod report;
pub mod score;
pub mod service;
pub mod types;

pub use error::{Error, Result};
pub use mock::MockResumeService;
pub use report::{classify_line, segment, CategoryScore, LineKind, SegmentedReport};
pub use score::{display_name_for, max_score_for, reputation_band, ScoreBand, ScoreBands};
pub use service::{error_detail, FileUpload, HealthStatus, ResumeAnalyzer};
pub use types::{
    is_education_point, AnalysisPayload, AnalysisRequest, AnalysisResponse, AnalysisStatus,
    JobMatchAnalysis, ReportAnalysis, ResumePoint, ResumeSection,
};
