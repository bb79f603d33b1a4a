//! Analysis result store
//!
//! Single slot holding the most recent analysis, overwritten per run and
//! cleared on reload. Provided through Leptos context so consumers get
//! explicit state rather than a module-level singleton.

use leptos::prelude::*;
use resume_ai_common::AnalysisPayload;

#[derive(Clone, Copy)]
pub struct AnalysisStore {
    result: RwSignal<Option<AnalysisPayload>>,
}

impl Default for AnalysisStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisStore {
    pub fn new() -> Self {
        Self {
            result: RwSignal::new(None),
        }
    }

    pub fn get(&self) -> Option<AnalysisPayload> {
        self.result.get()
    }

    pub fn set(&self, payload: AnalysisPayload) {
        self.result.set(Some(payload));
    }

    pub fn clear(&self) {
        self.result.set(None);
    }
}

pub fn provide_analysis_store() -> AnalysisStore {
    let store = AnalysisStore::new();
    provide_context(store);
    store
}

pub fn use_analysis_store() -> AnalysisStore {
    expect_context::<AnalysisStore>()
}
