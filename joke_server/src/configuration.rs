use anyhow::Context;

/// The public joke API the card fetches from.
pub const DEFAULT_JOKE_API_BASE_URL: &str = "https://official-joke-api.appspot.com";

/// Where the server serves its bundled card background.
pub const BUNDLED_BACKGROUND_IMAGE_PATH: &str = "/img/background.svg";

#[derive(Clone, Debug)]
pub struct Configuration {
    pub host: String,
    pub port: u16,
    pub joke_api_base_url: String,
    pub background_image_url: String,
    /// An `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 12345,
            joke_api_base_url: DEFAULT_JOKE_API_BASE_URL.into(),
            background_image_url: BUNDLED_BACKGROUND_IMAGE_PATH.into(),
            log_filter: "info".into(),
        }
    }
}

impl Configuration {
    /// Applies the `JOKE_SERVER_PORT`, `JOKE_API_BASE_URL` and
    /// `JOKE_BACKGROUND_IMAGE_URL` overrides on top of the defaults.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(port) = lookup("JOKE_SERVER_PORT") {
            config.port = port
                .parse()
                .context(format!("JOKE_SERVER_PORT is not a valid port: {}", port))?;
        }
        if let Some(base_url) = lookup("JOKE_API_BASE_URL") {
            config.joke_api_base_url = base_url.trim_end_matches('/').to_owned();
        }
        if let Some(image_url) = lookup("JOKE_BACKGROUND_IMAGE_URL") {
            config.background_image_url = image_url;
        }
        Ok(config)
    }
}
