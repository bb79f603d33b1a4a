//! Education card with institution reputation scores

use leptos::prelude::*;
use resume_ai_common::reputation_band;
use resume_ai_common::types::EducationPoint;

#[component]
pub fn EducationCard(education: EducationPoint) -> impl IntoView {
    let reputation = education.subject_course_school_reputation.clone();

    view! {
        <div class="education-card">
            <div class="education-info">
                <h3>{format!("{} in {}", education.course, education.subject)}</h3>
                <p class="education-school">{education.school.clone()}</p>
                {(!education.text.is_empty()).then(|| view! {
                    <p class="education-details">{education.text.clone()}</p>
                })}
                {education.improvement.clone().map(|improvement| view! {
                    <p class="education-improvement">{improvement}</p>
                })}
            </div>

            <div class="reputation-cards">
                <ReputationCard
                    title="Domestic Reputation"
                    score=reputation.domestic_score
                    rationale=reputation.domestic_score_rationale.clone()
                />
                <ReputationCard
                    title="International Reputation"
                    score=reputation.international_score
                    rationale=reputation.international_score_rationale
                />
            </div>
        </div>
    }
}

#[component]
fn ReputationCard(
    title: &'static str,
    score: u8,
    rationale: String,
) -> impl IntoView {
    let band = reputation_band(score);
    let width = (score as u32 * 10).min(100);

    view! {
        <div class=format!("reputation-card {}", band.css_class())>
            <span class="reputation-title">{title}</span>
            <span class="reputation-score">{score} "/10"</span>
            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}%", width) />
            </div>
            {(!rationale.is_empty()).then(|| view! {
                <p class="reputation-rationale">{rationale.clone()}</p>
            })}
        </div>
    }
}
