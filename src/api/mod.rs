pub mod routes;
mod server;

pub mod public;
mod state;

pub use server::{app, serve};
pub use state::AppState;
