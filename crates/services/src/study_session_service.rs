use std::sync::Arc;

use chrono::NaiveDate;
use storage::repository::StudySessionRepository;
use study_core::model::{
    SessionDetailsDraft, SessionName, StatusBreakdown, StudySession, StudySessionDraft,
};

use crate::Clock;
use crate::error::StudySessionServiceError;

/// Result of an update or delete addressed by session name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// At least one record matched; `rows` records were changed.
    Applied { rows: u64 },
    /// No record has the given name. Nothing was changed.
    NoMatch,
}

impl MutationOutcome {
    fn from_rows(rows: u64) -> Self {
        if rows == 0 {
            Self::NoMatch
        } else {
            Self::Applied { rows }
        }
    }

    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Create, read, update and delete study sessions.
#[derive(Clone)]
pub struct StudySessionService {
    clock: Clock,
    sessions: Arc<dyn StudySessionRepository>,
}

impl StudySessionService {
    #[must_use]
    pub fn new(clock: Clock, sessions: Arc<dyn StudySessionRepository>) -> Self {
        Self { clock, sessions }
    }

    /// Date a new session form starts with.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Validate and store a new session.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionServiceError::Validation` if the name, subject or
    /// description is blank; nothing is stored in that case.
    /// Returns `StudySessionServiceError::Storage` if persistence fails.
    pub async fn create_session(
        &self,
        draft: StudySessionDraft,
    ) -> Result<StudySession, StudySessionServiceError> {
        let session = draft.validate()?;
        self.sessions.insert_session(&session).await?;
        tracing::info!(session = %session.name(), status = %session.status(), "study session created");
        Ok(session)
    }

    /// List all sessions in the order they were created.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionServiceError::Storage` if repository access fails.
    pub async fn list_sessions(&self) -> Result<Vec<StudySession>, StudySessionServiceError> {
        let sessions = self.sessions.list_sessions().await?;
        tracing::debug!(count = sessions.len(), "listed study sessions");
        Ok(sessions)
    }

    /// First session (in creation order) with the given name.
    ///
    /// Returns `Ok(None)` when the name is blank or unknown.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionServiceError::Storage` if repository access fails.
    pub async fn find_session(
        &self,
        name: &str,
    ) -> Result<Option<StudySession>, StudySessionServiceError> {
        let Ok(name) = SessionName::new(name) else {
            return Ok(None);
        };
        let sessions = self.sessions.list_sessions().await?;
        Ok(sessions.into_iter().find(|s| s.name() == &name))
    }

    /// Replace subject, description, status and date of every session named `name`.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionServiceError::Validation` if the name or any new
    /// text field is blank.
    /// Returns `StudySessionServiceError::Storage` if persistence fails.
    pub async fn update_session(
        &self,
        name: &str,
        details: SessionDetailsDraft,
    ) -> Result<MutationOutcome, StudySessionServiceError> {
        let name = SessionName::new(name)?;
        let details = details.validate()?;
        let rows = self.sessions.update_sessions(&name, &details).await?;
        let outcome = MutationOutcome::from_rows(rows);
        match outcome {
            MutationOutcome::Applied { rows } => {
                tracing::info!(session = %name, rows, "study session updated");
            }
            MutationOutcome::NoMatch => {
                tracing::warn!(session = %name, "update matched no study session");
            }
        }
        Ok(outcome)
    }

    /// Delete every session named `name`.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionServiceError::Validation` if the name is blank.
    /// Returns `StudySessionServiceError::Storage` if persistence fails.
    pub async fn delete_session(
        &self,
        name: &str,
    ) -> Result<MutationOutcome, StudySessionServiceError> {
        let name = SessionName::new(name)?;
        let rows = self.sessions.delete_sessions(&name).await?;
        let outcome = MutationOutcome::from_rows(rows);
        match outcome {
            MutationOutcome::Applied { rows } => {
                tracing::info!(session = %name, rows, "study session deleted");
            }
            MutationOutcome::NoMatch => {
                tracing::warn!(session = %name, "delete matched no study session");
            }
        }
        Ok(outcome)
    }

    /// Distinct session names, sorted, for selection controls.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionServiceError::Storage` if repository access fails.
    pub async fn session_names(&self) -> Result<Vec<SessionName>, StudySessionServiceError> {
        let names = self.sessions.list_session_names().await?;
        Ok(names)
    }

    /// Count sessions per status.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionServiceError::Storage` if repository access fails.
    pub async fn status_breakdown(&self) -> Result<StatusBreakdown, StudySessionServiceError> {
        let sessions = self.sessions.list_sessions().await?;
        Ok(StatusBreakdown::from_sessions(&sessions))
    }
}
