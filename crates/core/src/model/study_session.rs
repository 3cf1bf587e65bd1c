use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudySessionError {
    #[error("session name cannot be empty")]
    EmptySession,

    #[error("subject cannot be empty")]
    EmptySubject,

    #[error("description cannot be empty")]
    EmptyDescription,

    #[error("unknown session status: {0}")]
    UnknownStatus(String),
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Progress of a study session.
///
/// The persisted text form (`as_str`) is part of the table layout and must
/// not change.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum SessionStatus {
    #[default]
    #[serde(rename = "Planned")]
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl SessionStatus {
    /// All statuses in display order.
    pub const ALL: [SessionStatus; 3] = [
        SessionStatus::Planned,
        SessionStatus::InProgress,
        SessionStatus::Completed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Planned => "Planned",
            SessionStatus::InProgress => "In Progress",
            SessionStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = StudySessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planned" => Ok(SessionStatus::Planned),
            "In Progress" => Ok(SessionStatus::InProgress),
            "Completed" => Ok(SessionStatus::Completed),
            other => Err(StudySessionError::UnknownStatus(other.to_owned())),
        }
    }
}

//
// ─── SESSION NAME ──────────────────────────────────────────────────────────────
//

/// Validated session name (trimmed, non-empty).
///
/// This is the key used to address records for update and delete. It is not
/// unique: several records may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionName(String);

impl SessionName {
    /// Create a validated session name.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionError::EmptySession` if the name is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, StudySessionError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StudySessionError::EmptySession);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SessionName {
    type Error = StudySessionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionName> for String {
    fn from(value: SessionName) -> Self {
        value.0
    }
}

//
// ─── DETAILS ───────────────────────────────────────────────────────────────────
//

/// Unvalidated replacement values for an existing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDetailsDraft {
    pub subject: String,
    pub description: String,
    pub status: SessionStatus,
    pub date: NaiveDate,
}

impl SessionDetailsDraft {
    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionError::EmptySubject` or `EmptyDescription` when a
    /// text field is blank.
    pub fn validate(self) -> Result<SessionDetails, StudySessionError> {
        let subject = required(self.subject, StudySessionError::EmptySubject)?;
        let description = required(self.description, StudySessionError::EmptyDescription)?;
        Ok(SessionDetails {
            subject,
            description,
            status: self.status,
            date: self.date,
        })
    }
}

/// The mutable part of a study session: everything except its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDetails {
    subject: String,
    description: String,
    status: SessionStatus,
    date: NaiveDate,
}

impl SessionDetails {
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

//
// ─── STUDY SESSION ─────────────────────────────────────────────────────────────
//

/// Form input for a new study session, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySessionDraft {
    pub session: String,
    pub subject: String,
    pub description: String,
    pub status: SessionStatus,
    pub date: NaiveDate,
}

impl StudySessionDraft {
    /// Validate the draft into a storable session.
    ///
    /// # Errors
    ///
    /// Returns the first `StudySessionError` found, checking the session name,
    /// subject and description in that order.
    pub fn validate(self) -> Result<StudySession, StudySessionError> {
        let name = SessionName::new(self.session)?;
        let details = SessionDetailsDraft {
            subject: self.subject,
            description: self.description,
            status: self.status,
            date: self.date,
        }
        .validate()?;
        Ok(StudySession { name, details })
    }
}

/// A single planned, in-progress or completed block of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    name: SessionName,
    #[serde(flatten)]
    details: SessionDetails,
}

impl StudySession {
    /// Rehydrate a session from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `StudySessionError` if a persisted text field is blank or the
    /// status text is not recognized.
    pub fn from_persisted(
        session: String,
        subject: String,
        description: String,
        status: &str,
        date: NaiveDate,
    ) -> Result<Self, StudySessionError> {
        StudySessionDraft {
            session,
            subject,
            description,
            status: status.parse()?,
            date,
        }
        .validate()
    }

    #[must_use]
    pub fn name(&self) -> &SessionName {
        &self.name
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        self.details.subject()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.details.description()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.details.status()
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.details.date()
    }

    /// Replace everything but the name.
    pub fn apply_details(&mut self, details: SessionDetails) {
        self.details = details;
    }
}

fn required(value: String, err: StudySessionError) -> Result<String, StudySessionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_string())
}
