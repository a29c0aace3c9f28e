//! The joke card: a fetcher, the observable text it writes, and the view that
//! renders that text.

pub mod display_state;
pub mod display_text;
pub mod fetcher;
pub mod joke_card;
pub mod view;

pub use display_state::DisplayState;
pub use display_text::DisplayText;
pub use joke_card::JokeCard;
