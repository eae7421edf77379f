//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::RouteSet;

/// Shared application state.
///
/// The route set is loaded once at startup and never mutated, so every
/// handler reads it through the same `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// All known routes, in dataset order.
    pub routes: Arc<RouteSet>,

    /// Gates verbose per-route scan logging during matching.
    pub debug_logging: bool,
}

impl AppState {
    /// Create a new app state.
    pub fn new(routes: RouteSet, debug_logging: bool) -> Self {
        Self {
            routes: Arc::new(routes),
            debug_logging,
        }
    }
}
