use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CourseService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};
use upskill_core::model::CourseStatus;

const DEFAULT_DB_URL: &str = "sqlite://upskill.sqlite3";

#[derive(Parser)]
#[command(name = "upskill")]
#[command(version)]
#[command(about = "Course recommendations for your skill gaps")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the desktop UI (default)
    Ui(SourceArgs),
    /// Store the gap skills the courses page recommends against
    Seed {
        /// Gap skill; repeat for several. None clears the stored list.
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// `SQLite` URL or file path
        #[arg(long, env = "UPSKILL_DB_URL", default_value = DEFAULT_DB_URL)]
        db: String,
    },
    /// Print the gap list and recommended courses
    Show(SourceArgs),
}

#[derive(Args, Clone)]
struct SourceArgs {
    /// `SQLite` URL or file path
    #[arg(long, env = "UPSKILL_DB_URL", default_value = DEFAULT_DB_URL)]
    db: String,

    /// JSON course catalog; the built-in catalog is used when omitted
    #[arg(long, env = "UPSKILL_CATALOG")]
    catalog: Option<PathBuf>,
}

impl Default for SourceArgs {
    fn default() -> Self {
        Self {
            db: std::env::var("UPSKILL_DB_URL").unwrap_or_else(|_| DEFAULT_DB_URL.to_owned()),
            catalog: std::env::var_os("UPSKILL_CATALOG").map(PathBuf::from),
        }
    }
}

struct DesktopApp {
    course_service: Arc<CourseService>,
}

impl UiApp for DesktopApp {
    fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_owned();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> anyhow::Result<()> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let Some(path) = db_url.strip_prefix("sqlite://") else {
        bail!("invalid --db value: {db_url}");
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        bail!("invalid --db value: {db_url}");
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("creating {}", path.display()))?;
    }

    Ok(())
}

async fn open_services(db: &str, catalog: Option<&Path>) -> anyhow::Result<AppServices> {
    let db_url = normalize_sqlite_url(db);
    prepare_sqlite_file(&db_url)?;
    let services = AppServices::new_sqlite(&db_url, catalog)
        .await
        .with_context(|| format!("opening {db_url}"))?;
    info!(db = %db_url, "storage ready");
    Ok(services)
}

fn launch_ui(services: &AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        course_service: services.course_service(),
    });
    let context = build_app_context(&app);

    // Some dev setups default the window to always-on-top; turn it off explicitly.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Upskill")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn seed(skills: Vec<String>, db: &str) -> anyhow::Result<()> {
    let services = open_services(db, None).await?;
    let reader = services.gap_reader();
    if skills.is_empty() {
        reader.clear().await?;
        println!("cleared stored skill gaps");
    } else {
        reader.save_gap_skills(&skills).await?;
        println!("stored {} skill gap(s)", skills.len());
    }
    Ok(())
}

async fn show(args: &SourceArgs) -> anyhow::Result<()> {
    let services = open_services(&args.db, args.catalog.as_deref()).await?;
    let page = services.course_service().load_page().await?;

    if page.gaps.is_empty() {
        println!("skill gaps: (none)");
    } else {
        println!("skill gaps: {}", page.gaps.skills().join(", "));
    }
    if page.fallback {
        println!("no course targets these gaps; showing the full catalog");
    }

    for course in page.courses.courses() {
        let mark = match course.status() {
            CourseStatus::Completed => "x",
            CourseStatus::NotStarted => " ",
        };
        println!(
            "[{mark}] {:>3}  {}  ({}, {})",
            course.id().as_str(),
            course.title(),
            course.difficulty(),
            course.duration()
        );
        println!("        skills: {}", course.skills().join(", "));
    }
    println!(
        "{}/{} completed",
        page.courses.completed_count(),
        page.courses.total()
    );
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or_else(|| Commands::Ui(SourceArgs::default())) {
        Commands::Ui(args) => {
            let services = open_services(&args.db, args.catalog.as_deref()).await?;
            launch_ui(&services);
            Ok(())
        }
        Commands::Seed { skills, db } => seed(skills, &db).await,
        Commands::Show(args) => show(&args).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse()).await
}
