use std::sync::Arc;

use services::StudySessionService;

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn study_sessions(&self) -> Arc<StudySessionService>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    study_sessions: Arc<StudySessionService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_owned(),
            study_sessions: app.study_sessions(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn study_sessions(&self) -> Arc<StudySessionService> {
        Arc::clone(&self.study_sessions)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
