//! Overall improvement suggestions list

use leptos::prelude::*;

#[component]
pub fn ImprovementSuggestions(recommendations: Vec<String>) -> impl IntoView {
    (!recommendations.is_empty()).then(|| {
        view! {
            <section class="improvement-suggestions">
                <h2>"Improvement Suggestions"</h2>
                <ul>
                    {recommendations
                        .into_iter()
                        .map(|recommendation| view! { <li>{recommendation}</li> })
                        .collect_view()}
                </ul>
            </section>
        }
    })
}
