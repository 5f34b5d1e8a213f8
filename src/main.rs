mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roster=info,tower_http=info")))
        .init();

    let config = config::ServerConfig::from_env()?;
    let app = routes::app(config.leptos_options());
    let listener = tokio::net::TcpListener::bind(config.bind).await?;

    tracing::info!(addr = %config.bind, site_root = %config.site_root, "roster listening");
    axum::serve(listener, app).await?;
    Ok(())
}
