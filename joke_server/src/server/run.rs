use crate::component::JokeCard;
use crate::data_sources::build_client;
use crate::data_sources::joke_api::JokeApi;
use crate::{Configuration, BUNDLED_BACKGROUND_IMAGE_PATH};
use actix_web::dev::Server;
use actix_web::web::{get, post, Data};
use actix_web::{App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use anyhow::{anyhow, Context};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use super::joke_routes;

/// Mounts the joke card (which starts its first fetch) and builds the server
/// hosting it. Must be called from within the actix runtime that will run the
/// returned server.
pub async fn run_server(
    config: Configuration,
    listener: TcpListener,
) -> Result<Server, anyhow::Error> {
    let client = build_client()?;

    let card = Data::new(JokeCard::mount(JokeApi::new(
        config.joke_api_base_url.clone(),
        client,
    )));

    let prometheus = PrometheusMetricsBuilder::new("")
        .endpoint("/metrics")
        .build()
        .map_err(|error| anyhow!("Failed to build metrics middleware: {}", error))?;

    let config = Data::new(config);

    let server = HttpServer::new(move || {
        App::new()
            // The /metrics endpoint shares the server with the card. A public
            // deployment would likely expose it on a separate listener.
            .wrap(prometheus.clone())
            .wrap(TracingLogger::default())
            .app_data(card.clone())
            .app_data(config.clone())
            .route("/", get().to(joke_routes::page))
            .route("/joke", get().to(joke_routes::current))
            .route("/joke", post().to(joke_routes::request_new))
            .route("/joke/events", get().to(joke_routes::events))
            .route(
                BUNDLED_BACKGROUND_IMAGE_PATH,
                get().to(joke_routes::background_image),
            )
    })
    .listen(listener)
    .context("Failed to listen on the provided socket")?
    .run();

    Ok(server)
}
