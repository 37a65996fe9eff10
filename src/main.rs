use registrar::config::AppConfig;
use registrar::{routes, state};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::new();

    let app = routes::app(state);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "registrar listening");
    axum::serve(listener, app).await.expect("server failed");
}
