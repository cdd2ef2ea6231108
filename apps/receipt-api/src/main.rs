//! # Receipt API
//!
//! Binary entry point. See the library crate for routes and configuration.

use receipt_api::{init_tracing, run, ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load()?;
    init_tracing(config.debug);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.socket_addr(),
        "Starting Receipt API"
    );

    run(config).await
}
