//! Data transfer objects for web responses.

use serde::Serialize;

/// Successful resolution of a direct-route query.
#[derive(Debug, Serialize)]
pub struct DirectRouteResponse {
    /// Stop the trip starts from
    pub from: i32,

    /// Stop the trip should reach
    pub to: i32,

    /// Whether a single route covers the trip
    pub direct: bool,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
