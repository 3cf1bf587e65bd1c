use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use study_core::model::{SessionDetails, SessionName, StudySession};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// The backing store could not be reached (pool closed or timed out, I/O).
    #[error("connection error: {0}")]
    Connection(String),

    /// A statement was rejected or failed after the store was reached.
    #[error("query failed: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for study sessions.
///
/// Session names are not unique. Updates and deletes address every record
/// with the given name and report how many rows they touched.
#[async_trait]
pub trait StudySessionRepository: Send + Sync {
    /// Append a session. No duplicate detection is performed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the session cannot be stored.
    async fn insert_session(&self, session: &StudySession) -> Result<(), StorageError>;

    /// List every readable session in insertion order.
    ///
    /// Stored rows that cannot be turned back into a session are left out.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    async fn list_sessions(&self) -> Result<Vec<StudySession>, StorageError>;

    /// Replace subject, description, status and date of every session named `name`.
    ///
    /// Returns the number of rows changed; `0` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the update fails.
    async fn update_sessions(
        &self,
        name: &SessionName,
        details: &SessionDetails,
    ) -> Result<u64, StorageError>;

    /// Remove every session named `name`, returning the number removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    async fn delete_sessions(&self, name: &SessionName) -> Result<u64, StorageError>;

    /// Distinct session names in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails or a row cannot be mapped.
    async fn list_session_names(&self) -> Result<Vec<SessionName>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    sessions: Arc<Mutex<Vec<StudySession>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl StudySessionRepository for InMemoryRepository {
    async fn insert_session(&self, session: &StudySession) -> Result<(), StorageError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.push(session.clone());
        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<StudySession>, StorageError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn update_sessions(
        &self,
        name: &SessionName,
        details: &SessionDetails,
    ) -> Result<u64, StorageError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut changed = 0_u64;
        for session in guard.iter_mut().filter(|s| s.name() == name) {
            session.apply_details(details.clone());
            changed += 1;
        }
        Ok(changed)
    }

    async fn delete_sessions(&self, name: &SessionName) -> Result<u64, StorageError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let before = guard.len();
        guard.retain(|s| s.name() != name);
        Ok((before - guard.len()) as u64)
    }

    async fn list_session_names(&self) -> Result<Vec<SessionName>, StorageError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut names: Vec<SessionName> = guard.iter().map(|s| s.name().clone()).collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}

/// Holds the session repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn StudySessionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let sessions: Arc<dyn StudySessionRepository> = Arc::new(InMemoryRepository::new());
        Self { sessions }
    }
}
