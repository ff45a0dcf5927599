pub use axum::Router;
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use base64::{engine::general_purpose, Engine as _};
use std::net::SocketAddr;
use reqwest::Client;

use crate::auth::ClientBuilder;

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// Address nothing listens on: bind an ephemeral port, then release it.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

/// Builder preloaded with test credentials and a short-timeout transport.
pub fn test_builder(url: &str) -> ClientBuilder {
    ClientBuilder::new()
        .basic_auth("user", "pass")
        .service_url(url)
        .http_client(build_reqwest_client())
}

pub fn basic_auth_header(username: &str, password: &str) -> String {
    format!("Basic {}", general_purpose::STANDARD.encode(format!("{}:{}", username, password)))
}
