use anyhow::Context;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;

/// The body returned by the joke API. Other fields (`id`, `type`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

pub struct JokeApi {
    client: ClientWithMiddleware,
    base_url: String,
}

impl JokeApi {
    pub fn new(base_url: String, client: ClientWithMiddleware) -> Self {
        Self { client, base_url }
    }

    pub async fn get_joke(&self) -> Result<Joke, anyhow::Error> {
        // For an example, see: https://official-joke-api.appspot.com/random_joke
        let joke = self
            .client
            .get(format!("{}/random_joke", self.base_url))
            .send()
            .await
            .context("Failed to make request")?
            .json::<Joke>()
            .await
            .context("Invalid response returned")?;

        Ok(joke)
    }
}
