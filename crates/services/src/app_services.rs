use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::study_session_service::StudySessionService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    study_sessions: Arc<StudySessionService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// Opens the database at `db_url` and creates the sessions table when it
    /// does not exist yet. Existing rows are kept.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened or migrated.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock))
    }

    /// Build services over an already opened storage backend.
    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        let study_sessions = Arc::new(StudySessionService::new(
            clock,
            Arc::clone(&storage.sessions),
        ));
        Self { study_sessions }
    }

    #[must_use]
    pub fn study_sessions(&self) -> Arc<StudySessionService> {
        Arc::clone(&self.study_sessions)
    }
}
