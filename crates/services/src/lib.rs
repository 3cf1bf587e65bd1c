#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod study_session_service;

pub use study_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, StudySessionServiceError};
pub use study_session_service::{MutationOutcome, StudySessionService};
