use std::sync::Arc;

use services::ProgressService;
use tracker_core::model::{ProgressStore, Schedule};

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn schedule(&self) -> Arc<Schedule>;
    fn initial_progress(&self) -> ProgressStore;
    fn progress_service(&self) -> Arc<ProgressService>;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    schedule: Arc<Schedule>,
    initial_progress: ProgressStore,
    progress_service: Arc<ProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            schedule: app.schedule(),
            initial_progress: app.initial_progress(),
            progress_service: app.progress_service(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn schedule(&self) -> Arc<Schedule> {
        Arc::clone(&self.schedule)
    }

    /// Progress as loaded at startup. Live state lives in `ProgressState`.
    #[must_use]
    pub fn initial_progress(&self) -> &ProgressStore {
        &self.initial_progress
    }

    #[must_use]
    pub fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
