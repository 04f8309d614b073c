mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use server::{create_router, state::AppState};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{StudioConfig, CONFIG_FILE, STUDIO_DIR};

#[derive(Parser)]
#[command(name = "prototyper")]
#[command(about = "Turn five answers into a clickable UI prototype", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long, env = "SERVER_PORT", global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .prototyper/ with a config file and an empty database
    Init,
    /// Start the HTTP API
    Serve {
        /// Built frontend to serve for non-API paths
        #[arg(long)]
        app_dir: Option<PathBuf>,
    },
    /// List stored prototypes
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    match cli.command {
        Some(Commands::Init) => init_project(&cwd).await,
        Some(Commands::Serve { app_dir }) => serve(&cwd, cli.port, app_dir).await,
        Some(Commands::Status) => status(&cwd).await,
        None => serve(&cwd, cli.port, None).await,
    }
}

async fn init_project(cwd: &Path) -> Result<()> {
    let studio_dir = cwd.join(STUDIO_DIR);

    if studio_dir.exists() {
        println!("Project already initialized at {}", studio_dir.display());
        return Ok(());
    }

    println!("Initializing Prototyper in {}", cwd.display());

    let mut config = StudioConfig::default();
    if let Some(name) = cwd.file_name().and_then(|n| n.to_str()) {
        config.project.name = name.to_string();
    }
    config
        .write(cwd)
        .await
        .context("Failed to write config file")?;

    let db_path = config.database_path(cwd);
    let pool = db::create_pool(&db::database_url(&db_path)).await?;
    db::run_migrations(&pool).await?;

    println!();
    println!("Initialized Prototyper for '{}'", config.project.name);
    println!();
    println!("Created:");
    println!("  {}/", STUDIO_DIR);
    println!("  ├── {}", CONFIG_FILE);
    println!("  └── {}", db_path.file_name().unwrap_or_default().to_string_lossy());
    println!();
    println!("Next step: run 'prototyper serve' and POST your answers to /api/prototypes");

    Ok(())
}

async fn serve(cwd: &Path, port: Option<u16>, app_dir: Option<PathBuf>) -> Result<()> {
    init_tracing();

    if !cwd.join(STUDIO_DIR).exists() {
        tracing::warn!(
            "No {} directory found, using default configuration. Run 'prototyper init' to create one.",
            STUDIO_DIR
        );
    }

    let config = StudioConfig::read(cwd).await;
    let port = port.unwrap_or(config.server.port);
    let db_path = config.database_path(cwd);
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    tracing::info!("Database: {}", db_path.display());

    let pool = db::create_pool(&db::database_url(&db_path))
        .await
        .context("Failed to create database pool")?;
    db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let mut state = AppState::new(pool);
    if let Some(app_dir) = app_dir.or(config.server.app_dir.clone()) {
        tracing::info!("Serving frontend from {}", app_dir.display());
        state = state.with_app_dir(app_dir);
    }
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    println!();
    println!("Prototyper - {}", config.project.name);
    println!("════════════════════════════════════════");
    println!();
    println!("  API Server:  http://localhost:{}", port);
    println!("  Swagger UI:  http://localhost:{}/swagger-ui", port);
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app).await?;

    Ok(())
}

async fn status(cwd: &Path) -> Result<()> {
    if !cwd.join(STUDIO_DIR).exists() {
        println!("Not a Prototyper project.");
        println!("Run 'prototyper init' to initialize.");
        return Ok(());
    }

    let config = StudioConfig::read(cwd).await;
    let db_path = config.database_path(cwd);

    if !db_path.exists() {
        println!("Project: {} (database not initialized)", config.project.name);
        return Ok(());
    }

    let pool = db::create_pool(&db::database_url(&db_path)).await?;
    let repo = db::PrototypeRepository::new(pool);
    let prototypes = repo.find_all().await?;

    println!();
    println!("Project: {}", config.project.name);
    println!("Path:    {}", cwd.display());
    println!();

    if prototypes.is_empty() {
        println!("No prototypes yet.");
    } else {
        println!("Prototypes ({}):", prototypes.len());
        for prototype in &prototypes {
            let ui = &prototype.ui_config;
            let kinds: Vec<&str> = ui.components.iter().map(|c| c.kind.as_str()).collect();
            let title = ui
                .component(prototyper_core::generator::rules::HEADING_ID)
                .and_then(|c| c.content.as_deref())
                .unwrap_or("-");
            println!("  ● {} {}", ui.primary_color, title);
            println!("      {} · {} · {}", ui.layout.as_str(), ui.theme.as_str(), kinds.join(", "));
        }
    }

    println!();

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prototyper=info,server=info,db=info,tower_http=info".into()),
        )
        .init();
}
