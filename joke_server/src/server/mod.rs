mod joke_routes;
mod run;

pub use run::run_server;
