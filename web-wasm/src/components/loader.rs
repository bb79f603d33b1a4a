//! Full-screen loader shown while a request is in flight

use leptos::prelude::*;

#[component]
pub fn FullScreenLoader(visible: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="loader-overlay">
                <div class="loader-spinner" />
                <p>"Analyzing your resume..."</p>
            </div>
        </Show>
    }
}
