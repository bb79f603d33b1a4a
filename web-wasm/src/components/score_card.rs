//! Category score card with progress bar

use leptos::prelude::*;
use resume_ai_common::{CategoryScore, ScoreBands};

#[component]
pub fn ScoreCard(category: CategoryScore) -> impl IntoView {
    let band = ScoreBands::default().band(category.percentage);
    let width = category.percentage.clamp(0.0, 100.0);

    view! {
        <div class=format!("score-card {}", band.css_class())>
            <div class="score-card-header">
                <h3>{category.display_name.clone()}</h3>
                <span class="score-card-value">
                    {category.score} <span class="score-card-max">"/" {category.max_score}</span>
                </span>
            </div>
            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}%", width) />
            </div>
        </div>
    }
}
