//! STAR analysis card for one experience bullet

use leptos::prelude::*;
use resume_ai_common::types::StandardPoint;

#[component]
pub fn StarAnalysisCard(point: StandardPoint) -> impl IntoView {
    let cells = [
        ("Situation", point.star.situation),
        ("Task", point.star.task),
        ("Action", point.star.action),
        ("Result", point.star.result),
    ];

    view! {
        <div class="star-card">
            <p class="star-text">{point.text.clone()}</p>

            <div class="star-grid">
                {cells
                    .into_iter()
                    .map(|(label, covered)| view! {
                        <div class="star-cell">
                            <span class="star-label">{label}</span>
                            <span class=if covered { "star-mark covered" } else { "star-mark" }>
                                {if covered { "✓" } else { "×" }}
                            </span>
                        </div>
                    })
                    .collect_view()}
            </div>

            {(!point.metrics.is_empty()).then(|| view! {
                <div class="star-metrics">
                    <h4>"Metrics"</h4>
                    {point
                        .metrics
                        .iter()
                        .map(|metric| view! { <span class="chip">{metric.clone()}</span> })
                        .collect_view()}
                </div>
            })}

            <div class="star-score">"Technical depth: " {point.technical_score} "/5"</div>

            {(!point.improvement.is_empty()).then(|| view! {
                <p class="star-improvement">{point.improvement.clone()}</p>
            })}
        </div>
    }
}
