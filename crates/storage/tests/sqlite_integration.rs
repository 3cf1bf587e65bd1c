use chrono::NaiveDate;
use storage::repository::{StorageError, StudySessionRepository};
use storage::sqlite::SqliteRepository;
use study_core::model::{
    SessionDetailsDraft, SessionName, SessionStatus, StudySession, StudySessionDraft,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn build_session(name: &str, subject: &str, status: SessionStatus) -> StudySession {
    StudySessionDraft {
        session: name.to_string(),
        subject: subject.to_string(),
        description: format!("{subject} notes"),
        status,
        date: date(2024, 1, 10),
    }
    .validate()
    .unwrap()
}

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_math_homework_lifecycle() {
    let repo = connect("memdb_lifecycle").await;

    let session = StudySessionDraft {
        session: "Math HW".to_string(),
        subject: "Math".to_string(),
        description: "Chapter 3 problems".to_string(),
        status: SessionStatus::Planned,
        date: date(2024, 1, 10),
    }
    .validate()
    .unwrap();
    repo.insert_session(&session).await.unwrap();

    let listed = repo.list_sessions().await.unwrap();
    assert_eq!(listed, vec![session.clone()]);

    let details = SessionDetailsDraft {
        subject: "Math".to_string(),
        description: "Chapter 3 problems".to_string(),
        status: SessionStatus::Completed,
        date: date(2024, 1, 11),
    }
    .validate()
    .unwrap();
    let changed = repo
        .update_sessions(session.name(), &details)
        .await
        .unwrap();
    assert_eq!(changed, 1);

    let listed = repo.list_sessions().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name().as_str(), "Math HW");
    assert_eq!(listed[0].subject(), "Math");
    assert_eq!(listed[0].description(), "Chapter 3 problems");
    assert_eq!(listed[0].status(), SessionStatus::Completed);
    assert_eq!(listed[0].date(), date(2024, 1, 11));

    let removed = repo.delete_sessions(session.name()).await.unwrap();
    assert_eq!(removed, 1);
    assert!(repo.list_sessions().await.unwrap().is_empty());
}

#[tokio::test]
async fn sqlite_migrate_is_idempotent_and_keeps_rows() {
    let repo = connect("memdb_idempotent").await;
    repo.insert_session(&build_session("Reading", "History", SessionStatus::InProgress))
        .await
        .unwrap();

    repo.migrate().await.expect("second migrate");
    repo.migrate().await.expect("third migrate");

    let listed = repo.list_sessions().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status(), SessionStatus::InProgress);
}

#[tokio::test]
async fn sqlite_duplicates_are_updated_and_deleted_together() {
    let repo = connect("memdb_duplicates").await;
    repo.insert_session(&build_session("Review", "Physics", SessionStatus::Planned))
        .await
        .unwrap();
    repo.insert_session(&build_session("Lab", "Chemistry", SessionStatus::Planned))
        .await
        .unwrap();
    repo.insert_session(&build_session("Review", "Biology", SessionStatus::InProgress))
        .await
        .unwrap();

    let names = repo.list_session_names().await.unwrap();
    let names: Vec<_> = names.iter().map(SessionName::as_str).collect();
    assert_eq!(names, vec!["Lab", "Review"]);

    let key = SessionName::new("Review").unwrap();
    let details = SessionDetailsDraft {
        subject: "Science".to_string(),
        description: "Combined".to_string(),
        status: SessionStatus::Completed,
        date: date(2024, 2, 1),
    }
    .validate()
    .unwrap();
    assert_eq!(repo.update_sessions(&key, &details).await.unwrap(), 2);

    let listed = repo.list_sessions().await.unwrap();
    let subjects: Vec<_> = listed.iter().map(StudySession::subject).collect();
    assert_eq!(subjects, vec!["Science", "Chemistry", "Science"]);

    assert_eq!(repo.delete_sessions(&key).await.unwrap(), 2);
    let listed = repo.list_sessions().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name().as_str(), "Lab");
}

#[tokio::test]
async fn sqlite_unmatched_key_changes_nothing() {
    let repo = connect("memdb_unmatched").await;
    let session = build_session("Essay", "English", SessionStatus::Planned);
    repo.insert_session(&session).await.unwrap();

    let key = SessionName::new("Missing").unwrap();
    let details = SessionDetailsDraft {
        subject: "Other".to_string(),
        description: "Other".to_string(),
        status: SessionStatus::Completed,
        date: date(2024, 3, 1),
    }
    .validate()
    .unwrap();
    assert_eq!(repo.update_sessions(&key, &details).await.unwrap(), 0);
    assert_eq!(repo.delete_sessions(&key).await.unwrap(), 0);
    assert_eq!(repo.list_sessions().await.unwrap(), vec![session]);
}

#[tokio::test]
async fn sqlite_names_skip_blank_legacy_rows() {
    let repo = connect("memdb_blank_names").await;
    repo.insert_session(&build_session("Flashcards", "Spanish", SessionStatus::Planned))
        .await
        .unwrap();
    // Older databases did not constrain the name column.
    sqlx::query(
        "INSERT INTO sessionstable (session, subject, description, session_status, session_date)
         VALUES ('', 'x', 'y', 'Planned', '2024-01-01')",
    )
    .execute(repo.pool())
    .await
    .unwrap();

    let names = repo.list_session_names().await.unwrap();
    assert_eq!(names, vec![SessionName::new("Flashcards").unwrap()]);

    // The blank row cannot be turned back into a session and is left out.
    let listed = repo.list_sessions().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name().as_str(), "Flashcards");
}

#[tokio::test]
async fn sqlite_padded_legacy_names_collapse_to_one_key() {
    let repo = connect("memdb_padded_names").await;
    sqlx::query(
        "INSERT INTO sessionstable (session, subject, description, session_status, session_date)
         VALUES ('Math', 'Algebra', 'Worksheet', 'Planned', '2024-01-01'),
                (char(77, 97, 116, 104, 10), 'Geometry', 'Proofs', 'Planned', '2024-01-02'),
                ('  Essay ', 'English', 'Outline', 'Planned', '2024-01-03')",
    )
    .execute(repo.pool())
    .await
    .unwrap();

    let names = repo.list_session_names().await.unwrap();
    let names: Vec<_> = names.iter().map(SessionName::as_str).collect();
    assert_eq!(names, vec!["Essay", "Math"]);

    let details = SessionDetailsDraft {
        subject: "Math".to_string(),
        description: "Review".to_string(),
        status: SessionStatus::Completed,
        date: date(2024, 2, 1),
    }
    .validate()
    .unwrap();
    let math = SessionName::new("Math").unwrap();
    assert_eq!(repo.update_sessions(&math, &details).await.unwrap(), 2);

    let listed = repo.list_sessions().await.unwrap();
    let statuses: Vec<_> = listed
        .iter()
        .filter(|s| s.name() == &math)
        .map(StudySession::status)
        .collect();
    assert_eq!(statuses, vec![SessionStatus::Completed, SessionStatus::Completed]);

    let essay = SessionName::new("Essay").unwrap();
    assert_eq!(repo.delete_sessions(&essay).await.unwrap(), 1);
    assert_eq!(repo.list_sessions().await.unwrap().len(), 2);
}

#[tokio::test]
async fn sqlite_unreadable_rows_are_skipped_and_still_deletable() {
    let repo = connect("memdb_unreadable").await;
    repo.insert_session(&build_session("Good", "History", SessionStatus::Planned))
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO sessionstable (session, subject, description, session_status, session_date)
         VALUES ('Bad', '  ', 'notes', 'Planned', '2024-01-01')",
    )
    .execute(repo.pool())
    .await
    .unwrap();

    let listed = repo.list_sessions().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name().as_str(), "Good");

    let names = repo.list_session_names().await.unwrap();
    let names: Vec<_> = names.iter().map(SessionName::as_str).collect();
    assert_eq!(names, vec!["Bad", "Good"]);

    let bad = SessionName::new("Bad").unwrap();
    assert_eq!(repo.delete_sessions(&bad).await.unwrap(), 1);
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessionstable")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(remaining, 1);
}

#[tokio::test]
async fn sqlite_migrate_trims_rows_from_unconstrained_table() {
    let url = "sqlite:file:memdb_legacy_table?mode=memory&cache=shared";
    let repo = SqliteRepository::connect(url).await.expect("connect");
    sqlx::query(
        "CREATE TABLE sessionstable (session TEXT, subject TEXT, description TEXT,
                                     session_status TEXT, session_date DATE)",
    )
    .execute(repo.pool())
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO sessionstable VALUES
            (' Lab' || char(10), 'Chemistry ', char(9) || 'Titration', 'In Progress', '2024-03-04'),
            ('Empty', NULL, 'x', 'Planned', '2024-03-05')",
    )
    .execute(repo.pool())
    .await
    .unwrap();

    repo.migrate().await.expect("migrate legacy table");

    let raw: Vec<String> = sqlx::query_scalar("SELECT session FROM sessionstable ORDER BY rowid")
        .fetch_all(repo.pool())
        .await
        .unwrap();
    assert_eq!(raw, vec!["Lab".to_string(), "Empty".to_string()]);

    let listed = repo.list_sessions().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].subject(), "Chemistry");
    assert_eq!(listed[0].description(), "Titration");
    assert_eq!(listed[0].status(), SessionStatus::InProgress);
}

#[tokio::test]
async fn sqlite_rejects_unknown_status_text() {
    let repo = connect("memdb_bad_status").await;
    let err = sqlx::query(
        "INSERT INTO sessionstable (session, subject, description, session_status, session_date)
         VALUES ('a', 'b', 'c', 'Someday', '2024-01-01')",
    )
    .execute(repo.pool())
    .await;
    assert!(err.is_err(), "status check constraint should reject the row");
}

#[tokio::test]
async fn sqlite_closed_pool_reports_connection_error() {
    let repo = connect("memdb_closed").await;
    repo.close().await;
    let err = repo.list_sessions().await.unwrap_err();
    assert!(matches!(err, StorageError::Connection(_)), "got {err:?}");
}
