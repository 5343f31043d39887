use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use carelog::api::ApiContext;
use carelog::{api, config, db};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let data_dir = config::app_data_dir();
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::error!("Cannot create data directory {}: {e}", data_dir.display());
        std::process::exit(1);
    }

    // Run migrations once at startup; handlers open their own connections.
    let db_path = config::database_path();
    if let Err(e) = db::open_database(&db_path) {
        tracing::error!("Cannot open database {}: {e}", db_path.display());
        std::process::exit(1);
    }

    let addr: SocketAddr = config::DEFAULT_BIND_ADDR
        .parse()
        .expect("default bind address is valid");
    let ctx = ApiContext::new(db_path);
    if let Err(e) = api::serve(ctx, addr).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
