use study_core::model::{SessionName, SessionStatus, StudySession};

use crate::vm::date_fmt::format_date;

/// One row of the sessions table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRowVm {
    pub session: String,
    pub subject: String,
    pub description: String,
    pub status: String,
    pub date_str: String,
}

impl From<&StudySession> for SessionRowVm {
    fn from(session: &StudySession) -> Self {
        Self {
            session: session.name().to_string(),
            subject: session.subject().to_owned(),
            description: session.description().to_owned(),
            status: session.status().to_string(),
            date_str: format_date(session.date()),
        }
    }
}

#[must_use]
pub fn map_session_rows(sessions: &[StudySession]) -> Vec<SessionRowVm> {
    sessions.iter().map(SessionRowVm::from).collect()
}

/// Labels for the session picker on the update and delete pages.
#[must_use]
pub fn map_session_options(names: &[SessionName]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Values for the status select, in display order.
#[must_use]
pub fn status_options() -> Vec<&'static str> {
    SessionStatus::ALL.iter().map(|s| s.as_str()).collect()
}
