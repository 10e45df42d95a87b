pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use contracts::domain::a001_menu_item::{GENERATE_ITEM_DETAILS_PATH, HEALTH_PATH};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    system::tracing::initialize()?;

    // Loads config.toml next to the executable, env overrides on top
    let config = shared::config::load_config()?;

    let state = routes::AppState::from_config(&config);
    if config.rate_limit.disabled {
        tracing::warn!("Development mode: rate limiting disabled");
    }
    tracing::info!("Content generation mode: {}", state.content.mode());

    let app = routes::configure_routes(state, &config.server.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    tracing::info!("POST {} - generate menu content", GENERATE_ITEM_DETAILS_PATH);
    tracing::info!("GET  {} - health check", HEALTH_PATH);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
