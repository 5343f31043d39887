//! HTTP server — binds the API router on a local address.

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::api::router::api_router;
use crate::api::types::ApiContext;

/// Bind `addr` and serve the API until the process exits.
pub async fn serve(ctx: ApiContext, addr: SocketAddr) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API listening on {}", listener.local_addr()?);
    axum::serve(listener, api_router(ctx)).await
}
