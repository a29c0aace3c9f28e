use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

use super::DisplayText;

/// Holds the card's single [`DisplayText`] and notifies subscribers when it
/// changes.
///
/// Writes carry the generation of the fetch that produced them. A write from a
/// generation older than the one currently shown is discarded, so a slow,
/// earlier fetch can never replace the result of a later one.
pub struct DisplayState {
    sender: watch::Sender<DisplayText>,
    shown_generation: AtomicU64,
}

impl DisplayState {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(DisplayText::default());
        Self {
            sender,
            shown_generation: AtomicU64::new(0),
        }
    }

    pub fn current(&self) -> DisplayText {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplayText> {
        self.sender.subscribe()
    }

    /// Returns `false` when the write was stale and dropped.
    pub(crate) fn write(&self, generation: u64, text: DisplayText) -> bool {
        // The closure runs under the channel's write lock, which serialises the
        // generation check with the update.
        self.sender.send_if_modified(|current| {
            if generation < self.shown_generation.load(Ordering::Acquire) {
                return false;
            }
            self.shown_generation.store(generation, Ordering::Release);
            *current = text;
            true
        })
    }
}
