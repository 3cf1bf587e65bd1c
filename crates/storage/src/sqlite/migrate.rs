use chrono::Utc;
use sqlx::SqlitePool;

use super::SqliteInitError;

/// SQL expression for the characters trimmed from stored text: space, tab,
/// line feed, vertical tab, form feed, carriage return.
pub(crate) const TRIM_CHARS: &str = "char(32, 9, 10, 11, 12, 13)";

/// Runs pending schema migrations.
///
/// Safe to call on every start: each version is applied once and tracked in
/// `schema_migrations`. A `sessionstable` created by an older build keeps its
/// rows; version 2 only trims their text columns.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    async fn is_applied(pool: &SqlitePool, version: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
            .bind(version)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
            ",
    )
    .execute(pool)
    .await?;

    // Version 1: sessions table.
    if !is_applied(pool, 1).await? {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS sessionstable (
                    session TEXT NOT NULL,
                    subject TEXT NOT NULL,
                    description TEXT NOT NULL,
                    session_status TEXT NOT NULL
                        CHECK (session_status IN ('Planned', 'In Progress', 'Completed')),
                    session_date DATE NOT NULL
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE INDEX IF NOT EXISTS idx_sessionstable_session
                    ON sessionstable (session);
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                INSERT INTO schema_migrations (version, applied_at)
                VALUES (?1, ?2)
                ON CONFLICT(version) DO NOTHING
            ",
        )
        .bind(1_i64)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(version = 1, "applied schema migration");
    }

    // Version 2: strip padding from rows written before names were trimmed.
    if !is_applied(pool, 2).await? {
        let mut tx = pool.begin().await?;

        let sql = format!(
            r"
                UPDATE sessionstable
                SET session = TRIM(session, {TRIM_CHARS}),
                    subject = TRIM(subject, {TRIM_CHARS}),
                    description = TRIM(description, {TRIM_CHARS})
            "
        );
        let trimmed = sqlx::query(&sql).execute(&mut *tx).await?.rows_affected();

        sqlx::query(
            r"
                INSERT INTO schema_migrations (version, applied_at)
                VALUES (?1, ?2)
                ON CONFLICT(version) DO NOTHING
            ",
        )
        .bind(2_i64)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(version = 2, rows = trimmed, "applied schema migration");
    }

    Ok(())
}
