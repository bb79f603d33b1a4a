//! Overall score display with band legend

use leptos::prelude::*;
use resume_ai_common::ScoreBands;

#[component]
pub fn ScoreDisplay(score: u32, is_job_match: bool) -> impl IntoView {
    let band = ScoreBands::default().band(score as f32);

    view! {
        <div class="score-display">
            <h2>{if is_job_match { "MATCH SCORE" } else { "RESUME STRENGTH" }}</h2>
            <div class=format!("score-value {}", band.css_class())>{score}</div>
            <div class="score-legend">
                <span class="legend-item excellent">"Excellent (≥80)"</span>
                <span class="legend-item good">"Good (60-79)"</span>
                <span class="legend-item needs-improvement">"Needs Work (<60)"</span>
            </div>
        </div>
    }
}
