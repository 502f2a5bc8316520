/// Movies Server - in-memory movie catalogue API
use clap::{Parser, Subcommand};
use movie_core::{seed, InMemoryMovieStore, MovieStore};
use movie_server::{config::ServerConfig, create_router, middleware::CorsPolicy, state::AppState};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "movie-server")]
#[command(about = "In-memory movies CRUD API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides MOVIES_SERVER__HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
        /// JSON file of movies to load at startup
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },
    /// Validate a seed file without starting the server
    CheckSeed {
        /// Seed file path
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_server=info,movie_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, seed } => {
            serve(host, port, seed).await?;
        }
        Commands::CheckSeed { path } => {
            check_seed(&path)?;
        }
    }

    Ok(())
}

async fn serve(
    host: Option<String>,
    port: Option<u16>,
    seed_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Load configuration, then apply command-line overrides
    let mut config = ServerConfig::load()?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if seed_path.is_some() {
        config.storage.seed_path = seed_path;
    }
    config.validate()?;

    tracing::info!("Starting Movies Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize store
    let store = match &config.storage.seed_path {
        Some(path) => seed::seeded_store(path)?,
        None => InMemoryMovieStore::new(),
    };
    tracing::info!("Movie store ready with {} movies", store.len()?);

    // Build application state
    let app_state = AppState::new(Arc::new(store), Arc::new(CorsPolicy::default()));

    // Build router
    let app = create_router(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Server running on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn check_seed(path: &Path) -> anyhow::Result<()> {
    let movies = seed::load_seed(path)?;
    println!("{}: {} valid movies", path.display(), movies.len());
    Ok(())
}
