/**
 * Tradeboard Server Entry Point
 *
 * This is the main entry point for the tradeboard backend server.
 * It initializes logging, builds the Axum app, and serves it.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with INFO level by default
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[Startup] Server initialization started");

    let config = tradeboard::backend::server::ServerConfig::from_env();
    let port = config.port;
    let app = tradeboard::backend::server::create_app_with_config(config).await;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("[Startup] Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
