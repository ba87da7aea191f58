use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

mod urls {
    pub const ROOT: &str = "/";
}

mod handlers {
    pub const ALIVE: &str = "✅ ربات زنده است.";

    pub async fn root() -> &'static str {
        ALIVE
    }
}

pub fn router() -> Router {
    Router::new().route(urls::ROOT, get(handlers::root))
}

pub async fn run(addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("liveness endpoint listening on {}", listener.local_addr()?);

    axum::serve(listener, router()).await
}
