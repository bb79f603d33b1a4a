//! Free-text report view
//!
//! Renders the legacy report shape: segment the text, chart the category
//! scores, then format the remaining prose line by line. Score lines are
//! suppressed because the charts already present them.

use leptos::prelude::*;
use resume_ai_common::report::{classify_line, segment, CategoryScore, LineKind};

use super::score_card::ScoreCard;
use super::score_display::ScoreDisplay;

#[component]
pub fn ReportView(analysis: String) -> impl IntoView {
    let report = segment(&analysis);
    let is_job_match = report.has_job_match();

    view! {
        <div class="report-view">
            <h1>"Resume Analysis Results"</h1>

            {report
                .overall_score
                .map(|score| view! { <ScoreDisplay score=score is_job_match=is_job_match /> })}

            {(!report.strength_scores.is_empty()).then(|| view! {
                <section class="report-chart">
                    <h2>"Resume Strength Analysis"</h2>
                    <div class="score-cards">
                        {report
                            .strength_scores
                            .iter()
                            .cloned()
                            .map(|category| view! { <ScoreCard category=category /> })
                            .collect_view()}
                    </div>
                </section>
            })}

            {(!report.job_match_scores.is_empty()).then(|| view! {
                <section class="report-chart">
                    <h2>"Job Match Analysis"</h2>
                    <div class="score-cards">
                        {report
                            .job_match_scores
                            .iter()
                            .cloned()
                            .map(|category| view! { <ScoreCard category=category /> })
                            .collect_view()}
                    </div>
                </section>
            })}

            {report
                .sections
                .iter()
                .map(|section| {
                    let lines = format_section(
                        &section.text,
                        &report.strength_scores,
                        &report.job_match_scores,
                    );
                    view! { <div class="report-prose">{lines}</div> }
                })
                .collect_view()}
        </div>
    }
}

fn format_section(
    text: &str,
    strength_scores: &[CategoryScore],
    job_match_scores: &[CategoryScore],
) -> Vec<AnyView> {
    text.lines()
        .filter_map(|line| {
            match classify_line(line, strength_scores, job_match_scores) {
                LineKind::Spacer => Some(view! { <div class="spacer" /> }.into_any()),
                LineKind::Suppressed => None,
                LineKind::Bullet(content) => Some(
                    view! { <p class="report-bullet">{content.to_string()}</p> }.into_any(),
                ),
                LineKind::Heading(heading) => Some(
                    view! { <h3 class="report-heading">{heading.to_string()}</h3> }.into_any(),
                ),
                LineKind::Original(content) => Some(
                    view! {
                        <div class="point-revision">
                            <h4>"Original:"</h4>
                            <p>{content.to_string()}</p>
                        </div>
                    }
                    .into_any(),
                ),
                LineKind::Improved(content) => Some(
                    view! {
                        <div class="point-revision">
                            <h4>"Improved Version:"</h4>
                            <p>{content.to_string()}</p>
                        </div>
                    }
                    .into_any(),
                ),
                LineKind::Paragraph(content) => {
                    Some(view! { <p>{content.to_string()}</p> }.into_any())
                }
            }
        })
        .collect()
}
