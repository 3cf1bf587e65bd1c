use services::{MutationOutcome, StudySessionServiceError};
use study_core::model::{SessionStatus, StudySessionError};

/// Message shown under a form after an action completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackVm {
    Success(String),
    Error(String),
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            FeedbackVm::Success(_) => "feedback feedback--success",
            FeedbackVm::Error(_) => "feedback feedback--error",
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            FeedbackVm::Success(msg) | FeedbackVm::Error(msg) => msg,
        }
    }
}

#[must_use]
pub fn created_feedback(name: &str) -> FeedbackVm {
    FeedbackVm::Success(format!("Successfully added study session: {name}"))
}

#[must_use]
pub fn updated_feedback(name: &str, outcome: MutationOutcome) -> FeedbackVm {
    match outcome {
        MutationOutcome::Applied { .. } => {
            FeedbackVm::Success(format!("Successfully updated study session: {name}"))
        }
        MutationOutcome::NoMatch => FeedbackVm::Error(format!("No session named {name}")),
    }
}

#[must_use]
pub fn deleted_feedback(name: &str, outcome: MutationOutcome) -> FeedbackVm {
    match outcome {
        MutationOutcome::Applied { rows: 1 } => {
            FeedbackVm::Success(format!("Study session {name} has been deleted"))
        }
        MutationOutcome::Applied { rows } => {
            FeedbackVm::Success(format!("{rows} study sessions named {name} have been deleted"))
        }
        MutationOutcome::NoMatch => FeedbackVm::Error(format!("No session named {name}")),
    }
}

/// Status picked in a form. An unknown value is reported like any other invalid input.
///
/// # Errors
///
/// Returns the error feedback to show when `raw` is not a known status.
pub fn parse_status_choice(raw: &str) -> Result<SessionStatus, FeedbackVm> {
    raw.parse::<SessionStatus>()
        .map_err(|err| error_feedback(&StudySessionServiceError::from(err)))
}

#[must_use]
pub fn error_feedback(err: &StudySessionServiceError) -> FeedbackVm {
    let message = match err {
        StudySessionServiceError::Validation(
            StudySessionError::EmptySession
            | StudySessionError::EmptySubject
            | StudySessionError::EmptyDescription,
        ) => format!("All fields must be filled ({err})."),
        StudySessionServiceError::Validation(other) => format!("Invalid input: {other}."),
        StudySessionServiceError::Storage(storage) => format!("Database error: {storage}"),
        other => format!("Something went wrong: {other}"),
    };
    FeedbackVm::Error(message)
}
