#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;
    if config.insecure_tls {
        tracing::warn!(url = %config.player_api_url, "upstream certificate verification disabled");
    }
    tracing::info!(url = %config.player_api_url, timeout = ?config.upstream_timeout, "player service configured");

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "player console listening");
    axum::serve(listener, app).await.expect("server failed");
}
