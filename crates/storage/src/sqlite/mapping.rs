use chrono::NaiveDate;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use study_core::model::{SessionName, StudySession};

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Classifies a driver error: failures to reach the database are `Connection`,
/// everything else is a failed statement.
pub(crate) fn query_err(err: sqlx::Error) -> StorageError {
    let unavailable = matches!(
        err,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
    );
    if unavailable {
        StorageError::Connection(err.to_string())
    } else {
        StorageError::Query(err.to_string())
    }
}

pub(crate) fn map_session_row(row: &SqliteRow) -> Result<StudySession, StorageError> {
    let status: String = row.try_get("session_status").map_err(ser)?;
    let date: NaiveDate = row.try_get("session_date").map_err(ser)?;

    StudySession::from_persisted(
        row.try_get::<String, _>("session").map_err(ser)?,
        row.try_get::<String, _>("subject").map_err(ser)?,
        row.try_get::<String, _>("description").map_err(ser)?,
        status.as_str(),
        date,
    )
    .map_err(ser)
}

pub(crate) fn map_session_name_row(row: &SqliteRow) -> Result<SessionName, StorageError> {
    SessionName::new(row.try_get::<String, _>("session").map_err(ser)?).map_err(ser)
}
