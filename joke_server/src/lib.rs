pub mod component;
mod configuration;
pub mod data_sources;
mod server;
mod telemetry;

pub use configuration::{Configuration, BUNDLED_BACKGROUND_IMAGE_PATH};
pub use server::run_server;
pub use telemetry::initialise_tracing;
