use actix_web::http::header;
use actix_web::web::{self, Bytes};
use actix_web::{HttpResponse, Responder};
use futures::StreamExt;
use serde::Serialize;
use std::convert::Infallible;
use tokio_stream::wrappers::WatchStream;
use tracing::instrument;

use crate::component::view::{render_event, render_page};
use crate::component::JokeCard;
use crate::Configuration;

const BACKGROUND_IMAGE: &str = include_str!("../../assets/background.svg");

#[derive(Serialize)]
struct CurrentJoke {
    pub text: String,
}

#[instrument(skip(card, config))]
pub async fn page(card: web::Data<JokeCard>, config: web::Data<Configuration>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(&card.display_text(), &config.background_image_url))
}

#[instrument(skip(card))]
pub async fn current(card: web::Data<JokeCard>) -> impl Responder {
    HttpResponse::Ok().json(CurrentJoke {
        text: card.display_text().rendered().to_owned(),
    })
}

/// The "Get New Joke" control: starts one fetch and sends the browser back to
/// the card, which picks up the result from the event stream.
#[instrument(skip(card))]
pub async fn request_new(card: web::Data<JokeCard>) -> impl Responder {
    drop(card.request_new_joke());
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

#[instrument(skip(card))]
pub async fn events(card: web::Data<JokeCard>) -> impl Responder {
    let stream = WatchStream::new(card.subscribe())
        .map(|text| Ok::<_, Infallible>(Bytes::from(render_event(&text))));

    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .content_type("text/event-stream")
        .streaming(stream)
}

pub async fn background_image() -> impl Responder {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "public, max-age=86400"))
        .content_type("image/svg+xml")
        .body(BACKGROUND_IMAGE)
}
