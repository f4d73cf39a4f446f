//! Gateway entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::{create_router, AppState, GatewayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway=info,gateway_lib=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!("Starting sum gateway v{}", config.version);

    let state = AppState::from_config(&config);
    let app = create_router(state);

    let addr = config.listen_addr();
    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
