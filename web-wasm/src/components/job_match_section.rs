//! Job match analysis panel

use leptos::prelude::*;
use resume_ai_common::types::JobMatchAnalysis;
use resume_ai_common::ScoreBands;

use super::score_display::ScoreDisplay;

#[component]
pub fn JobMatchSection(job_match: JobMatchAnalysis) -> impl IntoView {
    let bands = ScoreBands::default();
    let coverage_band = bands.band(job_match.technical_match.skill_coverage_score as f32);

    view! {
        <section class="job-match-section">
            <h2>"Job Match Analysis"</h2>

            <ScoreDisplay score=job_match.match_score is_job_match=true />

            <div class="skill-match">
                <h3>
                    "Skill Coverage: "
                    <span class=coverage_band.css_class()>
                        {job_match.technical_match.skill_coverage_score} "%"
                    </span>
                </h3>
                {(!job_match.technical_match.matched_skills.is_empty()).then(|| view! {
                    <div class="skill-chips matched">
                        {job_match
                            .technical_match
                            .matched_skills
                            .iter()
                            .map(|skill| view! { <span class="chip matched">{skill.clone()}</span> })
                            .collect_view()}
                    </div>
                })}
                {(!job_match.technical_match.missing_skills.is_empty()).then(|| view! {
                    <div class="skill-chips missing">
                        {job_match
                            .technical_match
                            .missing_skills
                            .iter()
                            .map(|skill| view! { <span class="chip missing">{skill.clone()}</span> })
                            .collect_view()}
                    </div>
                })}
            </div>

            <div class="experience-match">
                <h3>"Experience"</h3>
                <p>
                    {format!(
                        "{} years of {} required (score {})",
                        job_match.experience_match.actual_years,
                        job_match.experience_match.required_years,
                        job_match.experience_match.experience_score,
                    )}
                </p>
            </div>

            <div class="key-requirements">
                <h3>"Key Requirements"</h3>
                <RequirementList
                    label="Met"
                    class_name="met"
                    items=job_match.key_requirements.met.clone()
                />
                <RequirementList
                    label="Partially met"
                    class_name="partially-met"
                    items=job_match.key_requirements.partially_met.clone()
                />
                <RequirementList
                    label="Not met"
                    class_name="not-met"
                    items=job_match.key_requirements.not_met.clone()
                />
            </div>

            {(!job_match.section_recommendations.experience_projects.is_empty()).then(|| view! {
                <div class="point-revisions">
                    <h3>"Suggested Rewrites"</h3>
                    {job_match
                        .section_recommendations
                        .experience_projects
                        .iter()
                        .map(|revision| view! {
                            <div class="point-revision">
                                <h4>"Original:"</h4>
                                <p>{revision.original_point.clone()}</p>
                                <h4>"Improved Version:"</h4>
                                <p>{revision.improved_version.clone()}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            })}

            {(!job_match.recommendations.is_empty()).then(|| view! {
                <ul class="job-match-recommendations">
                    {job_match
                        .recommendations
                        .iter()
                        .map(|recommendation| view! { <li>{recommendation.clone()}</li> })
                        .collect_view()}
                </ul>
            })}
        </section>
    }
}

#[component]
fn RequirementList(
    label: &'static str,
    class_name: &'static str,
    items: Vec<String>,
) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class=format!("requirement-list {}", class_name)>
                <h4>{label}</h4>
                <ul>
                    {items
                        .into_iter()
                        .map(|item| view! { <li>{item}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    })
}
