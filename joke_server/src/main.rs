use std::net::TcpListener;

use anyhow::Context;
use joke_server::{initialise_tracing, run_server, Configuration};

fn load_config() -> Result<Configuration, anyhow::Error> {
    Configuration::from_env()
}

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = load_config().context("Failed to load server configuration")?;
    initialise_tracing(&config.log_filter);
    let address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&address).context(format!("Failed to bind to {}", address))?;
    tracing::info!(%address, "Serving the joke card");
    run_server(config, listener)
        .await
        .context("Failed to build server")?
        .await
        .context("Server terminated unexpectedly")?;
    Ok(())
}
