mod config;
mod routes;

use leptos::prelude::*;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let leptos_options = get_configuration(None)
        .expect("leptos configuration")
        .leptos_options;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.addr(), "labdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
