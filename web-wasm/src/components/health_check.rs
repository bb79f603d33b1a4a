//! Development-only API health indicator

use leptos::prelude::*;
use leptos::task::spawn_local;
use resume_ai_common::HealthStatus;

use crate::api::SharedAnalyzer;

#[component]
pub fn HealthCheck() -> impl IntoView {
    let service = expect_context::<SharedAnalyzer>();
    let (status, set_status) = signal(None::<HealthStatus>);

    spawn_local(async move {
        let health = service.check_health().await;
        set_status.set(Some(health));
    });

    view! {
        <div class="health-check">
            <h2>"API Health Status"</h2>
            {move || match status.get() {
                None => view! { <p>"Checking API health..."</p> }.into_any(),
                Some(health) if health.is_error() => {
                    view! { <p class="health-error">"Status: " {health.status}</p> }.into_any()
                }
                Some(health) => {
                    view! { <p class="health-ok">"Status: " {health.status}</p> }.into_any()
                }
            }}
            <p class="text-muted">"Development Mode Only"</p>
        </div>
    }
}
