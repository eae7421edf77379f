//! Web layer for the bus routing daemon.
//!
//! Provides the single HTTP endpoint for direct-route queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
