//! Shared utilities for integration testing.

use std::net::SocketAddr;

use axum::{routing::any, Router};
use blockpath::{BlockPathConfig, BlockPathLayer};

/// Start a catch-all backend answering 200 "ok", wrapped in a path filter
/// built from `config`. Returns the bound address.
///
/// Panics on invalid patterns; construction failures have their own tests.
pub async fn serve_filtered(config: &BlockPathConfig) -> SocketAddr {
    let layer = BlockPathLayer::new(config, "test-filter").expect("patterns should compile");

    let app = Router::new()
        .route("/", any(ok))
        .route("/{*path}", any(ok))
        .layer(layer);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}

async fn ok() -> &'static str {
    "ok"
}

/// Non-pooled client so every request exercises a fresh connection.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
