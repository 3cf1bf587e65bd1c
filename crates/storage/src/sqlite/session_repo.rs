use async_trait::async_trait;
use sqlx::Row;
use study_core::model::{SessionDetails, SessionName, StudySession};

use super::SqliteRepository;
use super::mapping::{map_session_name_row, map_session_row, query_err};
use super::migrate::TRIM_CHARS;
use crate::repository::{StorageError, StudySessionRepository};

#[async_trait]
impl StudySessionRepository for SqliteRepository {
    async fn insert_session(&self, session: &StudySession) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO sessionstable (session, subject, description, session_status, session_date)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(session.name().as_str())
        .bind(session.subject())
        .bind(session.description())
        .bind(session.status().as_str())
        .bind(session.date())
        .execute(&self.pool)
        .await
        .map_err(query_err)?;

        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<StudySession>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT rowid, session, subject, description, session_status, session_date
            FROM sessionstable
            ORDER BY rowid ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_err)?;

        let mut sessions = Vec::with_capacity(rows.len());
        for row in rows {
            match map_session_row(&row) {
                Ok(session) => sessions.push(session),
                Err(err) => {
                    let rowid: i64 = row.try_get("rowid").unwrap_or_default();
                    tracing::warn!(rowid, error = %err, "skipping unreadable study session row");
                }
            }
        }
        Ok(sessions)
    }

    async fn update_sessions(
        &self,
        name: &SessionName,
        details: &SessionDetails,
    ) -> Result<u64, StorageError> {
        let sql = format!(
            r"
            UPDATE sessionstable
            SET subject = ?1, description = ?2, session_status = ?3, session_date = ?4
            WHERE TRIM(session, {TRIM_CHARS}) = ?5
            "
        );
        let res = sqlx::query(&sql)
            .bind(details.subject())
            .bind(details.description())
            .bind(details.status().as_str())
            .bind(details.date())
            .bind(name.as_str())
            .execute(&self.pool)
            .await
            .map_err(query_err)?;

        Ok(res.rows_affected())
    }

    async fn delete_sessions(&self, name: &SessionName) -> Result<u64, StorageError> {
        let sql = format!("DELETE FROM sessionstable WHERE TRIM(session, {TRIM_CHARS}) = ?1");
        let res = sqlx::query(&sql)
            .bind(name.as_str())
            .execute(&self.pool)
            .await
            .map_err(query_err)?;

        Ok(res.rows_affected())
    }

    async fn list_session_names(&self) -> Result<Vec<SessionName>, StorageError> {
        let sql = format!(
            r"
            SELECT DISTINCT TRIM(session, {TRIM_CHARS}) AS session
            FROM sessionstable
            WHERE session IS NOT NULL AND TRIM(session, {TRIM_CHARS}) != ''
            ORDER BY 1 ASC
            "
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(query_err)?;

        rows.iter().map(map_session_name_row).collect()
    }
}
