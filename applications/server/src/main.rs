/// TubeDeck Server - per-user playlist/favorites service
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tubedeck_core::NewUser;
use tubedeck_server::{config::ServerConfig, create_router, state::AppState};
use tubedeck_storage::{JsonLibraryStore, PlaylistStore, UserRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tubedeck-server")]
#[command(about = "TubeDeck playlist/favorites server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Register a new user
    AddUser {
        /// Username (unique, case-insensitive)
        #[arg(short, long)]
        username: String,
        /// Display name
        #[arg(short, long)]
        display_name: String,
        /// Avatar URL
        #[arg(short, long)]
        image_url: Option<String>,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tubedeck_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::AddUser {
            username,
            display_name,
            image_url,
        } => {
            add_user(username, display_name, image_url).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting TubeDeck Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize storage
    let backend = JsonLibraryStore::open(&config.storage.data_dir).await?;
    let store = Arc::new(PlaylistStore::with_max_rating(
        backend,
        config.library.max_rating,
    ));
    let users = Arc::new(UserRegistry::open(&config.storage.data_dir).await?);
    tracing::info!("Data directory: {}", config.storage.data_dir.display());

    // Build application state and router
    let app_state = AppState::new(store, users);
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(
    username: String,
    display_name: String,
    image_url: Option<String>,
) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let users = UserRegistry::open(&config.storage.data_dir).await?;

    let user = users
        .register(NewUser {
            username,
            display_name,
            image_url,
        })
        .await?;

    println!("Created user {} ({})", user.username, user.id);
    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let users = UserRegistry::open(&config.storage.data_dir).await?;

    println!("Users:");
    for user in users.list().await? {
        println!("  {} - {} ({})", user.id, user.username, user.display_name);
    }

    Ok(())
}
