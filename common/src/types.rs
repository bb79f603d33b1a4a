//! Wire types for the resume analysis service
//!
//! Shared between the CLI and Web (WASM) clients:
//! - AnalysisPayload: either wire shape, decoded at a single boundary
//! - AnalysisResponse: the structured JSON contract
//! - ReportAnalysis: the free-text report variant (see `report` for parsing)

use serde::{Deserialize, Serialize};

/// Request body for text analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRequest {
    pub resume_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
}

/// Top-level service status
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Success,
    #[default]
    Error,
}

impl<'de> Deserialize<'de> for AnalysisStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // anything other than "success" degrades to error, matching the
        // render-time defaulting of the original contract
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "success" => AnalysisStatus::Success,
            _ => AnalysisStatus::Error,
        })
    }
}

/// Either of the two mutually exclusive response shapes.
///
/// The free-text variant is the only one carrying an `analysis` string, so
/// one untagged decode discriminates them. The report variant must be
/// tried first: with every field defaulted, the structured shape accepts
/// any object at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnalysisPayload {
    Report(ReportAnalysis),
    Structured(AnalysisResponse),
}

/// Free-text report shape
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportAnalysis {
    #[serde(default)]
    pub status: AnalysisStatus,
    pub analysis: String,
}

/// Structured analysis response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub status: AnalysisStatus,

    #[serde(rename = "resumeAnalysis", default)]
    pub resume_analysis: ResumeAnalysis,

    #[serde(rename = "tokenUsage", default)]
    pub token_usage: TokenUsage,

    #[serde(rename = "jobMatchAnalysis", default)]
    pub job_match_analysis: Option<JobMatchAnalysis>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResumeAnalysis {
    #[serde(default)]
    pub sections: Vec<ResumeSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResumeSection {
    #[serde(rename = "type")]
    pub section_type: String,

    #[serde(default)]
    pub points: Vec<ResumePoint>,
}

/// A scored resume bullet.
///
/// The service marks no explicit tag; education points are recognized by
/// their four discriminating fields, so the education variant is tried
/// first and everything else degrades to a standard point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ResumePoint {
    Education(EducationPoint),
    Standard(StandardPoint),
}

impl ResumePoint {
    pub fn is_education(&self) -> bool {
        matches!(self, ResumePoint::Education(_))
    }

    pub fn text(&self) -> &str {
        match self {
            ResumePoint::Education(p) => &p.text,
            ResumePoint::Standard(p) => &p.text,
        }
    }
}

/// Experience/project bullet scored against the STAR rubric
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StandardPoint {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub star: StarAnalysis,

    #[serde(default)]
    pub metrics: Vec<String>,

    #[serde(default)]
    pub technical_score: u8,

    #[serde(default)]
    pub improvement: String,
}

/// Education bullet with institution reputation scoring
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EducationPoint {
    #[serde(default)]
    pub text: String,

    pub subject: String,
    pub course: String,
    pub school: String,
    pub subject_course_school_reputation: EducationReputation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement: Option<String>,
}

/// Situation/Task/Action/Result coverage of one bullet
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StarAnalysis {
    #[serde(default)]
    pub situation: bool,
    #[serde(default)]
    pub task: bool,
    #[serde(default)]
    pub action: bool,
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub complete: bool,
}

/// Institution reputation on a 0-10 scale, domestic and international
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EducationReputation {
    #[serde(default)]
    pub domestic_score: u8,
    #[serde(default)]
    pub domestic_score_rationale: String,
    #[serde(default)]
    pub international_score: u8,
    #[serde(default)]
    pub international_score_rationale: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokenUsage {
    #[serde(default)]
    pub total_tokens: u32,
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_cost: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobMatchAnalysis {
    #[serde(default)]
    pub match_score: u32,
    #[serde(default)]
    pub technical_match: TechnicalMatch,
    #[serde(default)]
    pub experience_match: ExperienceMatch,
    #[serde(default)]
    pub key_requirements: KeyRequirements,
    #[serde(default)]
    pub section_recommendations: SectionRecommendations,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TechnicalMatch {
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub skill_coverage_score: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExperienceMatch {
    #[serde(default)]
    pub required_years: f32,
    #[serde(default)]
    pub actual_years: f32,
    #[serde(default)]
    pub experience_score: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyRequirements {
    #[serde(default)]
    pub met: Vec<String>,
    #[serde(default)]
    pub partially_met: Vec<String>,
    #[serde(default)]
    pub not_met: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SectionRecommendations {
    #[serde(default)]
    pub experience_projects: Vec<PointRevision>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills_certs: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PointRevision {
    #[serde(default)]
    pub original_point: String,
    #[serde(default)]
    pub improved_version: String,
}

/// Structural check for an education point over raw JSON.
///
/// Mirrors the typed discrimination: all four fields must be present
/// (values may be anything). Non-objects, including null, classify false.
pub fn is_education_point(value: &serde_json::Value) -> bool {
    const REQUIRED: [&str; 4] = [
        "subject",
        "course",
        "school",
        "subject_course_school_reputation",
    ];

    value
        .as_object()
        .map(|obj| REQUIRED.iter().all(|key| obj.contains_key(*key)))
        .unwrap_or(false)
}
