use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug_span, Instrument};

use super::fetcher::fetch_display_text;
use super::{DisplayState, DisplayText};
use crate::data_sources::joke_api::JokeApi;

/// A mounted joke card.
///
/// Mounting fetches one joke; [`JokeCard::request_new_joke`] fetches another.
/// Dropping the card unmounts it: fetches still in flight are abandoned and
/// will not touch the display state.
pub struct JokeCard {
    inner: Arc<Inner>,
}

struct Inner {
    joke_api: JokeApi,
    state: DisplayState,
    issued_generations: AtomicU64,
    mounted: CancellationToken,
}

impl JokeCard {
    /// Must be called from within a tokio runtime.
    pub fn mount(joke_api: JokeApi) -> Self {
        let card = Self {
            inner: Arc::new(Inner {
                joke_api,
                state: DisplayState::new(),
                issued_generations: AtomicU64::new(0),
                mounted: CancellationToken::new(),
            }),
        };
        card.request_new_joke();
        card
    }

    /// Starts exactly one fetch. Overlapping fetches are allowed; whichever
    /// was requested last wins once it completes.
    pub fn request_new_joke(&self) -> JoinHandle<()> {
        let generation = self.inner.issued_generations.fetch_add(1, Ordering::AcqRel) + 1;
        let inner = Arc::clone(&self.inner);

        tokio::spawn(
            async move {
                tokio::select! {
                    biased;
                    _ = inner.mounted.cancelled() => {
                        tracing::debug!("Card unmounted, abandoning fetch");
                    }
                    text = fetch_display_text(&inner.joke_api) => {
                        if !inner.state.write(generation, text) {
                            tracing::debug!("A newer joke is already shown, discarding result");
                        }
                    }
                }
            }
            .instrument(debug_span!("joke_fetch", generation)),
        )
    }

    pub fn display_text(&self) -> DisplayText {
        self.inner.state.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplayText> {
        self.inner.state.subscribe()
    }

    /// Number of fetches started since mount, including the initial one.
    pub fn fetches_requested(&self) -> u64 {
        self.inner.issued_generations.load(Ordering::Acquire)
    }
}

impl Drop for JokeCard {
    fn drop(&mut self) {
        self.inner.mounted.cancel();
    }
}
