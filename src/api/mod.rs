pub mod handlers;
mod lichess_client;
pub mod models;
pub mod parsers;
pub mod routes;

pub use lichess_client::LichessClient;
