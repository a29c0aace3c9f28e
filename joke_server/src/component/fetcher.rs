use tracing::instrument;

use super::DisplayText;
use crate::data_sources::joke_api::JokeApi;

/// Makes one round trip to the joke API and turns the outcome into the text
/// the card should show.
///
/// Every failure, whether the request itself or the decoding of its body,
/// collapses into [`DisplayText::Failed`] after a single `ERROR` event.
#[instrument(skip(joke_api))]
pub async fn fetch_display_text(joke_api: &JokeApi) -> DisplayText {
    match joke_api.get_joke().await {
        Ok(joke) => DisplayText::from(joke),
        Err(error) => {
            tracing::error!(error = %format!("{:#}", error), "Failed to fetch joke");
            DisplayText::Failed
        }
    }
}
