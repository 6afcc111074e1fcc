use tracing_subscriber::EnvFilter;

use pulse_server::config::Config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().expect("Invalid server configuration");

    let app = pulse_server::router::create_router();

    let addr = config.addr();
    tracing::info!("Server is running on port {}", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
