//! Structured analysis results view

use leptos::prelude::*;
use resume_ai_common::types::{AnalysisResponse, ResumePoint};

use super::education_card::EducationCard;
use super::improvement_suggestions::ImprovementSuggestions;
use super::job_match_section::JobMatchSection;
use super::star_analysis_card::StarAnalysisCard;

#[component]
pub fn ResumeAnalysisView(response: AnalysisResponse) -> impl IntoView {
    view! {
        <div class="analysis-results">
            <h1>"Resume Analysis Results"</h1>

            {response
                .resume_analysis
                .sections
                .iter()
                .map(|section| view! {
                    <section class="resume-section">
                        <h2>{section.section_type.clone()}</h2>
                        {section
                            .points
                            .iter()
                            .map(|point| match point {
                                ResumePoint::Education(education) => view! {
                                    <EducationCard education=education.clone() />
                                }
                                .into_any(),
                                ResumePoint::Standard(standard) => view! {
                                    <StarAnalysisCard point=standard.clone() />
                                }
                                .into_any(),
                            })
                            .collect_view()}
                    </section>
                })
                .collect_view()}

            {response
                .resume_analysis
                .recommendations
                .clone()
                .map(|recommendations| view! {
                    <ImprovementSuggestions recommendations=recommendations />
                })}

            {response
                .job_match_analysis
                .clone()
                .map(|job_match| view! { <JobMatchSection job_match=job_match /> })}

            {(response.token_usage.total_tokens > 0).then(|| view! {
                <p class="token-usage">
                    {format!(
                        "{} tokens, ${:.3}",
                        response.token_usage.total_tokens,
                        response.token_usage.total_cost,
                    )}
                </p>
            })}
        </div>
    }
}
