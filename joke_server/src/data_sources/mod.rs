use anyhow::Context;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

pub mod joke_api;

/// Builds the outbound http client, with a span recorded for every request.
pub fn build_client() -> Result<ClientWithMiddleware, anyhow::Error> {
    let client = ClientBuilder::new(
        reqwest::ClientBuilder::new()
            .build()
            .context("Failed to build http client")?,
    )
    .with(TracingMiddleware::default())
    .build();

    Ok(client)
}
