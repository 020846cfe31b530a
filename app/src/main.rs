use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use treasurehunt_app::graphql;
use treasurehunt_app::state::GameStore;

#[derive(Parser, Debug, Clone)]
#[command(name = "treasurehunt", about = "Relay treasure hunt GraphQL server")]
struct Config {
    /// Address to serve the GraphQL endpoint on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("treasurehunt=info,treasurehunt_app=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Config::parse();

    // Seed the one process-wide game before serving anything.
    let store = Arc::new(GameStore::new());
    let game = store.initialize();
    tracing::info!(
        "new game started, {} turns to find the treasure",
        game.turns_remaining
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run(cli.bind, store))
}

/// Run the server. Blocks until ctrl-c.
async fn run(addr: SocketAddr, store: Arc<GameStore>) -> anyhow::Result<()> {
    let schema = graphql::build_schema(store);
    let app = graphql::router(schema);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("GraphQL server listening on http://{addr}/graphql");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            drop(tokio::signal::ctrl_c().await);
            tracing::info!("shutting down...");
        })
        .await?;
    Ok(())
}
