use std::sync::Arc;

use chrono::NaiveDate;
use storage::repository::{Storage, StorageError, StudySessionRepository};
use study_core::model::{
    SessionDetails, SessionName, SessionStatus, StudySession, StudySessionDraft,
};

use super::test_harness::{
    ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_repo,
};

fn build_session(name: &str, status: SessionStatus) -> StudySession {
    StudySessionDraft {
        session: name.to_string(),
        subject: "Math".to_string(),
        description: "Chapter 3 problems".to_string(),
        status,
        date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    }
    .validate()
    .unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn create_view_smoke_prefills_today() {
    let mut harness = setup_view_harness(ViewKind::Create);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Add Study Session"), "missing title in {html}");
    assert!(html.contains("2023-11-14"), "missing default date in {html}");
    assert!(html.contains("In Progress"), "missing status option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn read_view_smoke_renders_sessions_and_chart() {
    let mut harness = setup_view_harness(ViewKind::Read);
    harness
        .storage
        .sessions
        .insert_session(&build_session("Math HW", SessionStatus::Planned))
        .await
        .expect("insert");
    harness
        .storage
        .sessions
        .insert_session(&build_session("Essay", SessionStatus::Completed))
        .await
        .expect("insert");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Math HW"), "missing row in {html}");
    assert!(html.contains("Essay"), "missing row in {html}");
    assert!(
        html.contains("Session Status Distribution"),
        "missing chart in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn read_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Read);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No sessions found."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn delete_view_smoke_lists_session_names() {
    let mut harness = setup_view_harness(ViewKind::Delete);
    harness
        .storage
        .sessions
        .insert_session(&build_session("Lab", SessionStatus::InProgress))
        .await
        .expect("insert");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Select Session"), "missing picker in {html}");
    assert!(html.contains("Delete Session"), "missing button in {html}");
    assert!(html.contains("Lab"), "missing option in {html}");
}

async fn settle(harness: &mut ViewHarness) {
    // Overview load, default selection, then the selected session lookup.
    for _ in 0..8 {
        harness.drive_async().await;
    }
}

#[tokio::test(flavor = "current_thread")]
async fn update_view_smoke_prefills_first_session() {
    let mut harness = setup_view_harness(ViewKind::Update);
    let essay = StudySessionDraft {
        session: "Essay".to_string(),
        subject: "English".to_string(),
        description: "Outline and first paragraph".to_string(),
        status: SessionStatus::InProgress,
        date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
    };
    harness
        .storage
        .sessions
        .insert_session(&build_session("Math HW", SessionStatus::Planned))
        .await
        .expect("insert");
    harness
        .storage
        .sessions
        .insert_session(&essay.validate().unwrap())
        .await
        .expect("insert");

    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("Select Session"), "missing picker in {html}");
    assert!(html.contains("Update Session"), "missing form in {html}");
    // Names are sorted, so "Essay" is picked and its date fills the form.
    assert!(html.contains("value=\"2024-02-02\""), "missing prefilled date in {html}");
    assert!(!html.contains("value=\"2024-01-10\""), "wrong session prefilled in {html}");
    assert!(html.contains("value=\"English\""), "missing prefilled subject in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn update_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Update);
    harness.rebuild();
    settle(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("No sessions found."), "missing empty state in {html}");
    assert!(!html.contains("Update Session"), "unexpected form in {html}");
}

struct FailingRepo;

#[async_trait::async_trait]
impl StudySessionRepository for FailingRepo {
    async fn insert_session(&self, _session: &StudySession) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_sessions(&self) -> Result<Vec<StudySession>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn update_sessions(
        &self,
        _name: &SessionName,
        _details: &SessionDetails,
    ) -> Result<u64, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn delete_sessions(&self, _name: &SessionName) -> Result<u64, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_session_names(&self) -> Result<Vec<SessionName>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn read_view_smoke_renders_error_state() {
    let mut harness =
        setup_view_harness_with_repo(ViewKind::Read, Storage::in_memory(), Arc::new(FailingRepo));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Database error"), "missing error in {html}");
}
