mod status_breakdown;
mod study_session;

pub use status_breakdown::{StatusBreakdown, StatusCount};
pub use study_session::{
    SessionDetails, SessionDetailsDraft, SessionName, SessionStatus, StudySession,
    StudySessionDraft, StudySessionError,
};
