//! Mock analysis service
//!
//! Deterministic stand-in for the remote analyzer, used to develop the
//! front-ends without the live service. Identical inputs always produce
//! identical payloads.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::service::{FileUpload, HealthStatus, ResumeAnalyzer};
use crate::types::{
    AnalysisPayload, AnalysisResponse, AnalysisStatus, EducationPoint, EducationReputation,
    ExperienceMatch, JobMatchAnalysis, KeyRequirements, PointRevision, ResumeAnalysis,
    ResumePoint, ResumeSection, SectionRecommendations, StandardPoint, StarAnalysis,
    TechnicalMatch, TokenUsage,
};

const TEXT_DELAY_MS: u32 = 1500;
const FILE_DELAY_MS: u32 = 2000;

const SUPPORTED_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

/// Mock implementation of [`ResumeAnalyzer`]
#[derive(Debug, Clone)]
pub struct MockResumeService {
    text_delay_ms: u32,
    file_delay_ms: u32,
    report_mode: bool,
}

impl Default for MockResumeService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockResumeService {
    /// Mock with realistic simulated network delays
    pub fn new() -> Self {
        Self {
            text_delay_ms: TEXT_DELAY_MS,
            file_delay_ms: FILE_DELAY_MS,
            report_mode: false,
        }
    }

    /// Mock without delays, for tests
    pub fn instant() -> Self {
        Self {
            text_delay_ms: 0,
            file_delay_ms: 0,
            report_mode: false,
        }
    }

    /// Return the free-text report shape instead of the structured one,
    /// to exercise the segmenter path
    pub fn report_mode(mut self) -> Self {
        self.report_mode = true;
        self
    }

    fn payload(&self, job_description: Option<&str>) -> AnalysisPayload {
        let with_job_match = job_description.is_some_and(|jd| !jd.trim().is_empty());
        if self.report_mode {
            AnalysisPayload::Report(crate::types::ReportAnalysis {
                status: AnalysisStatus::Success,
                analysis: sample_report(with_job_match),
            })
        } else {
            AnalysisPayload::Structured(sample_response(with_job_match))
        }
    }
}

#[async_trait(?Send)]
impl ResumeAnalyzer for MockResumeService {
    async fn analyze_text(
        &self,
        _resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<AnalysisPayload> {
        simulate_delay(self.text_delay_ms).await;
        Ok(self.payload(job_description))
    }

    async fn analyze_file(
        &self,
        upload: FileUpload,
        job_description: Option<&str>,
    ) -> Result<AnalysisPayload> {
        let extension = upload.extension().unwrap_or_default();
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(Error::UnsupportedFile(upload.file_name));
        }

        simulate_delay(self.file_delay_ms).await;
        Ok(self.payload(job_description))
    }

    async fn check_health(&self) -> HealthStatus {
        HealthStatus::ok()
    }
}

async fn simulate_delay(ms: u32) {
    if ms == 0 {
        return;
    }
    #[cfg(feature = "native")]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
    #[cfg(all(feature = "wasm", not(feature = "native")))]
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Deterministic structured sample, mirroring a real service response
pub fn sample_response(with_job_match: bool) -> AnalysisResponse {
    let experience = ResumeSection {
        section_type: "Experience".to_string(),
        points: vec![
            ResumePoint::Standard(StandardPoint {
                text: "Led development of cloud-based microservices architecture, improving system reliability by 99.9%".to_string(),
                star: StarAnalysis {
                    situation: true,
                    task: true,
                    action: true,
                    result: true,
                    complete: true,
                },
                metrics: vec!["99.9%".to_string()],
                technical_score: 5,
                improvement: "Name the platform and the team size to anchor the scope.".to_string(),
            }),
            ResumePoint::Standard(StandardPoint {
                text: "Mentored junior developers and conducted code reviews for team of 8 engineers".to_string(),
                star: StarAnalysis {
                    situation: true,
                    task: true,
                    action: true,
                    result: false,
                    complete: false,
                },
                metrics: vec!["8 engineers".to_string()],
                technical_score: 3,
                improvement: "Close with an outcome, e.g. defect rate or review turnaround improvement.".to_string(),
            }),
            ResumePoint::Standard(StandardPoint {
                text: "Developed and maintained RESTful APIs serving 1M+ daily requests".to_string(),
                star: StarAnalysis {
                    situation: true,
                    task: true,
                    action: true,
                    result: true,
                    complete: true,
                },
                metrics: vec!["1M+ daily requests".to_string()],
                technical_score: 5,
                improvement: "Add p99 latency or availability to quantify quality of service.".to_string(),
            }),
        ],
    };

    let education = ResumeSection {
        section_type: "Education".to_string(),
        points: vec![ResumePoint::Education(EducationPoint {
            text: "BSc in Computer Science, 2016-2020".to_string(),
            subject: "Computer Science".to_string(),
            course: "BSc".to_string(),
            school: "State Technical University".to_string(),
            subject_course_school_reputation: EducationReputation {
                domestic_score: 8,
                domestic_score_rationale: "Well regarded engineering program nationally.".to_string(),
                international_score: 6,
                international_score_rationale: "Known in the region, limited global ranking presence.".to_string(),
            },
            improvement: Some("List relevant coursework or thesis topic.".to_string()),
        })],
    };

    let job_match_analysis = with_job_match.then(|| JobMatchAnalysis {
        match_score: 76,
        technical_match: TechnicalMatch {
            matched_skills: vec![
                "Rust".to_string(),
                "REST APIs".to_string(),
                "Microservices".to_string(),
            ],
            missing_skills: vec!["Kubernetes".to_string(), "Terraform".to_string()],
            skill_coverage_score: 72,
        },
        experience_match: ExperienceMatch {
            required_years: 5.0,
            actual_years: 6.0,
            experience_score: 90,
        },
        key_requirements: KeyRequirements {
            met: vec![
                "Backend service ownership".to_string(),
                "API design".to_string(),
            ],
            partially_met: vec!["Cloud infrastructure".to_string()],
            not_met: vec!["Container orchestration at scale".to_string()],
        },
        section_recommendations: SectionRecommendations {
            experience_projects: vec![PointRevision {
                original_point: "Developed and maintained RESTful APIs serving 1M+ daily requests"
                    .to_string(),
                improved_version:
                    "Designed and operated RESTful APIs on a managed Kubernetes platform, sustaining 1M+ daily requests"
                        .to_string(),
            }],
            education: "Education section already matches the posting's requirements.".to_string(),
            skills_certs: "Add the listed infrastructure tooling you have used, even briefly."
                .to_string(),
        },
        recommendations: vec![
            "Mirror the posting's terminology for infrastructure work.".to_string(),
            "Surface any container orchestration exposure near the top.".to_string(),
        ],
    });

    AnalysisResponse {
        status: AnalysisStatus::Success,
        resume_analysis: ResumeAnalysis {
            sections: vec![experience, education],
            recommendations: Some(vec![
                "Quantify the remaining unmeasured bullets.".to_string(),
                "Tighten the summary to three lines.".to_string(),
            ]),
        },
        token_usage: TokenUsage {
            total_tokens: 1742,
            prompt_tokens: 1320,
            completion_tokens: 422,
            total_cost: 0.031,
        },
        job_match_analysis,
    }
}

/// Deterministic free-text sample in the report format the legacy
/// service emits
pub fn sample_report(with_job_match: bool) -> String {
    let mut report = String::from(
        "\
1. OVERALL RESUME STRENGTH SCORE (0-100):
78
Strong technical depth, held back by formatting and an unfocused summary.

RESUME STRENGTH CATEGORIES
Technical Skills: 17
Experience Quality: 16
Education: 14
Resume Format: 12
Overall Presentation: 13

2. KEY STRENGTHS:
- Clear ownership of production systems
- Metrics attached to most experience bullets

3. AREAS FOR IMPROVEMENT:
- Summary repeats the experience section
Original: Responsible for backend APIs.
→ Improved: Built and operated REST APIs serving 1M+ daily requests.
",
    );

    if with_job_match {
        report.push_str(
            "\
6. JOB MATCH CATEGORIES
Skills Match: 19
Experience Match: 21
Education Match: 15
Requirements Match: 14
Overall Fit: 7

7. OVERALL MATCH SCORE (0-100):
76
",
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // determinism
    // =============================================

    #[tokio::test]
    async fn test_mock_text_analysis_is_deterministic() {
        let service = MockResumeService::instant();
        let first = service.analyze_text("resume body", None).await.unwrap();
        let second = service.analyze_text("resume body", None).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_mock_roundtrip_byte_identical() {
        let service = MockResumeService::instant();
        let first = service.analyze_text("resume body", None).await.unwrap();
        let second = service.analyze_text("resume body", None).await.unwrap();
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    // =============================================
    // job description handling
    // =============================================

    #[tokio::test]
    async fn test_job_match_present_only_with_job_description() {
        let service = MockResumeService::instant();

        let without = service.analyze_text("resume", None).await.unwrap();
        let AnalysisPayload::Structured(without) = without else {
            panic!("expected structured payload");
        };
        assert!(without.job_match_analysis.is_none());

        let with = service
            .analyze_text("resume", Some("Senior backend engineer"))
            .await
            .unwrap();
        let AnalysisPayload::Structured(with) = with else {
            panic!("expected structured payload");
        };
        assert!(with.job_match_analysis.is_some());
    }

    #[tokio::test]
    async fn test_blank_job_description_ignored() {
        let service = MockResumeService::instant();
        let payload = service.analyze_text("resume", Some("   ")).await.unwrap();
        let AnalysisPayload::Structured(response) = payload else {
            panic!("expected structured payload");
        };
        assert!(response.job_match_analysis.is_none());
    }

    // =============================================
    // file validation
    // =============================================

    #[tokio::test]
    async fn test_file_analysis_rejects_unknown_extension() {
        let service = MockResumeService::instant();
        let upload = FileUpload::new("resume.png", vec![0u8; 16]);

        let result = service.analyze_file(upload, None).await;
        assert!(matches!(result, Err(Error::UnsupportedFile(_))));
    }

    #[tokio::test]
    async fn test_file_analysis_accepts_pdf_and_docx() {
        let service = MockResumeService::instant();
        for name in ["resume.pdf", "resume.DOCX"] {
            let upload = FileUpload::new(name, vec![0u8; 16]);
            assert!(service.analyze_file(upload, None).await.is_ok());
        }
    }

    // =============================================
    // report mode
    // =============================================

    #[tokio::test]
    async fn test_report_mode_returns_report_shape() {
        let service = MockResumeService::instant().report_mode();
        let payload = service.analyze_text("resume", Some("jd")).await.unwrap();
        let AnalysisPayload::Report(report) = payload else {
            panic!("expected report payload");
        };

        let segmented = crate::report::segment(&report.analysis);
        assert_eq!(segmented.strength_scores.len(), 5);
        assert_eq!(segmented.job_match_scores.len(), 5);
        assert_eq!(segmented.overall_score, Some(78));
    }

    #[tokio::test]
    async fn test_health_check_is_ok() {
        let service = MockResumeService::instant();
        assert!(!service.check_health().await.is_error());
    }
}
