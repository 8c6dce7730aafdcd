//! dmgate server binary.
//!
//! - Strict YAML config (`dmgate.yaml`)
//! - Access-policy gate in front of every DM operation
//! - HTTP debug adapter + ops endpoints

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use dmgate_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("dmgate.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "dmgate-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
