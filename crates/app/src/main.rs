use std::fmt;
use std::sync::Arc;

use chrono::{Days, NaiveDate};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, StudySessionService};
use study_core::model::{SessionStatus, StudySessionDraft};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const APP_NAME: &str = "Stream_Study";
const DEFAULT_DB_URL: &str = "sqlite://study_sessions.db";
const DEFAULT_SEED_COUNT: u32 = 3;
const MAX_SEED_COUNT: u32 = 1_000;

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidCount { raw: String },
    HelpRequested,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
            ArgsError::HelpRequested => write!(f, "help requested"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    study_sessions: Arc<StudySessionService>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn study_sessions(&self) -> Arc<StudySessionService> {
        Arc::clone(&self.study_sessions)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    seed_count: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  study ui   [--db <sqlite_url>]");
    eprintln!("  study seed [--db <sqlite_url>] [--count <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --count {DEFAULT_SEED_COUNT} (at most {MAX_SEED_COUNT})");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDY_DB_URL, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Seed,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "seed" => Some(Self::Seed),
            _ => None,
        }
    }
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
        env_db_url: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env_db_url
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut seed_count = DEFAULT_SEED_COUNT;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--count" if cmd == Command::Seed => {
                    let value = require_value(args, "--count")?;
                    seed_count = value
                        .parse::<u32>()
                        .ok()
                        .filter(|count| *count <= MAX_SEED_COUNT)
                        .ok_or_else(|| ArgsError::InvalidCount { raw: value.clone() })?;
                }
                "--help" | "-h" => return Err(ArgsError::HelpRequested),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if db_url == DEFAULT_DB_URL {
            db_url = normalize_sqlite_url(db_url);
        }

        Ok(Self { db_url, seed_count })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = match Args::parse(cmd, &mut iter, std::env::var("STUDY_DB_URL").ok()) {
        Ok(parsed) => parsed,
        Err(ArgsError::HelpRequested) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            return Err(e.into());
        }
    };

    // Open + migrate SQLite at startup. A database that cannot be opened is fatal.
    prepare_sqlite_file(&parsed.db_url)?;
    let clock = Clock::default_clock();
    let services = AppServices::new_sqlite(&parsed.db_url, clock).await?;
    tracing::info!(db_url = %parsed.db_url, "study session store ready");

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                study_sessions: services.study_sessions(),
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Study Session Manager")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Seed => {
            let created = seed_sessions(&services.study_sessions(), parsed.seed_count).await?;
            eprintln!("seed: added {created} study sessions to {}", parsed.db_url);
            Ok(())
        }
    }
}

const SEED_SAMPLES: [(&str, &str, &str, SessionStatus); 4] = [
    ("Math HW", "Math", "Chapter 3 problems", SessionStatus::Planned),
    ("Essay draft", "English", "Outline and first paragraph", SessionStatus::InProgress),
    ("Lab report", "Chemistry", "Write up titration results", SessionStatus::Completed),
    ("Vocab review", "French", "Unit 4 word list", SessionStatus::Planned),
];

fn seed_drafts(today: NaiveDate, count: u32) -> Vec<StudySessionDraft> {
    (0..count)
        .map(|i| {
            let (session, subject, description, status) =
                SEED_SAMPLES[i as usize % SEED_SAMPLES.len()];
            let round = i as usize / SEED_SAMPLES.len();
            let session = if round == 0 {
                session.to_string()
            } else {
                format!("{session} #{}", round + 1)
            };
            StudySessionDraft {
                session,
                subject: subject.to_string(),
                description: description.to_string(),
                status,
                date: today
                    .checked_sub_days(Days::new(u64::from(i)))
                    .unwrap_or(NaiveDate::MIN),
            }
        })
        .collect()
}

async fn seed_sessions(
    service: &StudySessionService,
    count: u32,
) -> Result<u32, Box<dyn std::error::Error>> {
    let mut created = 0_u32;
    for draft in seed_drafts(service.today(), count) {
        service.create_session(draft).await?;
        created += 1;
    }
    Ok(created)
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        tracing::error!(error = %err, "study session manager failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
