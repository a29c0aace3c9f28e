use crate::data_sources::joke_api::Joke;

/// What the card shows right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayText {
    /// No fetch has completed yet.
    #[default]
    Empty,
    Joke(String),
    Failed,
}

impl DisplayText {
    pub const LOADING: &'static str = "Loading...";
    pub const FAILURE_MESSAGE: &'static str = "Failed to fetch joke. Please try again.";

    pub fn as_str(&self) -> &str {
        match self {
            DisplayText::Empty => "",
            DisplayText::Joke(text) => text,
            DisplayText::Failed => Self::FAILURE_MESSAGE,
        }
    }

    /// The text as presented: the loading placeholder stands in for an empty value.
    pub fn rendered(&self) -> &str {
        match self.as_str() {
            "" => Self::LOADING,
            text => text,
        }
    }
}

impl From<Joke> for DisplayText {
    fn from(joke: Joke) -> Self {
        DisplayText::Joke(format!("{} - {}", joke.setup, joke.punchline))
    }
}
