//! Serve a parts catalog over HTTP
//!
//! ```text
//! cargo run --example serve                      # data.json, 127.0.0.1:8000
//! cargo run --example serve -- browser.yaml      # YAML configuration
//! RUST_LOG=parts_browser=debug cargo run --example serve
//! ```

use parts_browser::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("parts_browser=info,tower_http=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => CatalogConfig::from_yaml_file(&path)?,
        None => CatalogConfig::default_config(),
    };

    tracing::info!(
        source = ?config.source,
        page_size = config.page_size,
        "Starting parts browser"
    );

    ServerBuilder::new().with_config(config).serve().await
}
