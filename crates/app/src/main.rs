use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, TrailService};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use trail_core::model::ResourceAccess;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://trail.sqlite3";
const DEFAULT_LOG_FILTER: &str = "trail=info,services=info,storage=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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
    trail: Arc<TrailService>,
}

impl UiApp for DesktopApp {
    fn trail(&self) -> Arc<TrailService> {
        Arc::clone(&self.trail)
    }
}

struct Args {
    db_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p trail -- ui     [--db <sqlite_url>]");
    eprintln!("  cargo run -p trail -- status [--db <sqlite_url>]");
    eprintln!("  cargo run -p trail -- reset  [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRAIL_DB_URL, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Status,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "status" => Some(Self::Status),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("TRAIL_DB_URL")
            .ok()
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
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

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn open_sqlite_services(db_url: &str) -> Result<AppServices, Box<dyn std::error::Error>> {
    prepare_sqlite_file(db_url)?;
    Ok(AppServices::new_sqlite(db_url).await?)
}

/// Opens the progress database for the desktop UI. An unusable database degrades to
/// session-only progress instead of refusing to start.
async fn open_ui_services(db_url: &str) -> Result<AppServices, Box<dyn std::error::Error>> {
    match open_sqlite_services(db_url).await {
        Ok(services) => Ok(services),
        Err(err) => {
            tracing::warn!(error = %err, db_url, "progress database unavailable, keeping progress in memory");
            Ok(AppServices::from_storage(Storage::in_memory()).await?)
        }
    }
}

fn print_status(trail: &TrailService) {
    let progress = trail.snapshot();
    println!(
        "{} de {} etapas concluídas ({}%)",
        progress.completed_count(),
        progress.total(),
        progress.percentage()
    );
    for resource in trail.trail().resources() {
        let marker = match trail.access(resource.id()) {
            Some(ResourceAccess::Completed) => "concluído",
            Some(ResourceAccess::Available) => "disponível",
            Some(ResourceAccess::Locked) | None => "bloqueado",
        };
        let pointer = if resource.id() == progress.current() {
            ">"
        } else {
            " "
        };
        println!(
            "{pointer} {}. {} [{marker}]",
            resource.id().value() + 1,
            resource.title()
        );
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Launch the UI when no subcommand is provided.
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
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    match cmd {
        Command::Ui => {
            let services = open_ui_services(&parsed.db_url).await?;
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                trail: services.trail(),
            });
            let context = build_app_context(&app);

            tracing::info!(db_url = %parsed.db_url, "starting Guardiões da Floresta");

            // Some dev setups default tao windows to always-on-top.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Guardiões da Floresta")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Status => {
            let services = open_sqlite_services(&parsed.db_url).await?;
            print_status(&services.trail());
            Ok(())
        }
        Command::Reset => {
            let services = open_sqlite_services(&parsed.db_url).await?;
            services.trail().reset().await;
            println!("Progresso apagado.");
            Ok(())
        }
    }
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
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
