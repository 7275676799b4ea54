pub mod about;
pub mod app;
pub mod chatbox;
pub mod config;
pub mod errors;
pub mod fitness;
pub mod handlers;
pub mod inflight;
pub mod models;
pub mod mood;
pub mod nav;
pub mod state;
pub mod transport;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use transport::{BackendClient, Endpoint, TransportError};
