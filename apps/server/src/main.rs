use anyhow::Context;
use rikol_server::{serve, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rikol_server=info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env();
    serve(config)
        .await
        .context("rikol-server exited with an error")
}
