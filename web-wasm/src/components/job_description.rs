//! Job description input

use leptos::prelude::*;

#[component]
pub fn JobDescriptionInput(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="job-description">"Job Description (optional)"</label>
            <textarea
                id="job-description"
                rows="6"
                placeholder="Paste the job description to get match analysis..."
                prop:value=move || value.get()
                on:input=move |ev| {
                    set_value.set(event_target_value(&ev));
                }
            />
        </div>
    }
}
