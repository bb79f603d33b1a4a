//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"AI Resume Analyzer"</h1>
            <p class="tagline">"Upload or paste your resume for STAR-format feedback and job-match scoring"</p>
        </header>
    }
}
