//! Main application component

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use resume_ai_common::{AnalysisPayload, FileUpload, MockResumeService};

use crate::api::{HttpResumeService, SharedAnalyzer};
use crate::components::{
    header::Header, health_check::HealthCheck, job_description::JobDescriptionInput,
    loader::FullScreenLoader, report_view::ReportView, resume_analysis::ResumeAnalysisView,
    upload_area::UploadArea,
};
use crate::config::AppConfig;
use crate::store::provide_analysis_store;

/// Which input the user is providing
#[derive(Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Paste,
    Upload,
}

#[component]
pub fn App() -> impl IntoView {
    let config = match AppConfig::from_build_env() {
        Ok(config) => config,
        Err(message) => {
            return view! { <div class="config-error">{message}</div> }.into_any();
        }
    };

    // mock/real selection happens here, at composition time
    let service: SharedAnalyzer = if config.use_mock {
        Arc::new(MockResumeService::new())
    } else {
        Arc::new(HttpResumeService::new(config.api_base_url.clone()))
    };
    provide_context(service.clone());

    let store = provide_analysis_store();

    let (mode, set_mode) = signal(InputMode::Paste);
    let (resume_text, set_resume_text) = signal(String::new());
    let (file_name, set_file_name) = signal(None::<String>);
    let (file_bytes, set_file_bytes) = signal(None::<Vec<u8>>);
    let (job_description, set_job_description) = signal(String::new());
    let (is_analyzing, set_is_analyzing) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let can_submit = move || {
        !is_analyzing.get()
            && match mode.get() {
                InputMode::Paste => !resume_text.get().trim().is_empty(),
                InputMode::Upload => file_name.get().is_some(),
            }
    };

    let on_analyze = {
        let service = service.clone();
        move |_| {
            let service = service.clone();
            set_error.set(None);
            set_is_analyzing.set(true);

            let job_description = job_description.get_untracked();
            let job_description = (!job_description.trim().is_empty()).then_some(job_description);
            let mode_now = mode.get_untracked();
            let resume_text_now = resume_text.get_untracked();
            let file_now = file_name.get_untracked().zip(file_bytes.get_untracked());

            spawn_local(async move {
                let result = match mode_now {
                    InputMode::Paste => {
                        service
                            .analyze_text(&resume_text_now, job_description.as_deref())
                            .await
                    }
                    InputMode::Upload => match file_now {
                        Some((name, bytes)) => {
                            service
                                .analyze_file(FileUpload::new(name, bytes), job_description.as_deref())
                                .await
                        }
                        None => {
                            set_is_analyzing.set(false);
                            return;
                        }
                    },
                };

                match result {
                    Ok(payload) => store.set(payload),
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_is_analyzing.set(false);
            });
        }
    };

    view! {
        <div class="container">
            <Header />

            <div class="input-tabs">
                <button
                    class=move || if mode.get() == InputMode::Paste { "tab active" } else { "tab" }
                    on:click=move |_| set_mode.set(InputMode::Paste)
                >
                    "Paste Text"
                </button>
                <button
                    class=move || if mode.get() == InputMode::Upload { "tab active" } else { "tab" }
                    on:click=move |_| set_mode.set(InputMode::Upload)
                >
                    "Upload File"
                </button>
            </div>

            <Show
                when=move || mode.get() == InputMode::Paste
                fallback=move || view! {
                    <UploadArea
                        selected_name=file_name
                        disabled=is_analyzing
                        on_file_selected={move |name: String, bytes: Vec<u8>| {
                            set_file_name.set(Some(name));
                            set_file_bytes.set(Some(bytes));
                        }}
                    />
                }
            >
                <div class="form-group">
                    <label for="resume-text">"Resume Text"</label>
                    <textarea
                        id="resume-text"
                        rows="12"
                        placeholder="Paste your resume here..."
                        prop:value=move || resume_text.get()
                        on:input=move |ev| {
                            set_resume_text.set(event_target_value(&ev));
                        }
                    />
                </div>
            </Show>

            <JobDescriptionInput value=job_description set_value=set_job_description />

            <button
                class="btn btn-primary analyze-button"
                disabled=move || !can_submit()
                on:click=on_analyze
            >
                {move || if is_analyzing.get() { "Analyzing..." } else { "Analyze Resume" }}
            </button>

            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            <FullScreenLoader visible=is_analyzing />

            {move || store.get().map(|payload| match payload {
                AnalysisPayload::Structured(response) => view! {
                    <ResumeAnalysisView response=response />
                }
                .into_any(),
                AnalysisPayload::Report(report) => view! {
                    <ReportView analysis=report.analysis />
                }
                .into_any(),
            })}

            {config.is_development().then(|| view! { <HealthCheck /> })}
        </div>
    }
    .into_any()
}
