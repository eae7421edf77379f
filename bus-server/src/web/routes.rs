//! HTTP route handlers.
//!
//! A request runs through one pipeline: method check, path match,
//! parameter validation, route matching. The first failing step
//! short-circuits to its error response; nothing escapes as a panic or a
//! non-JSON error.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use tower_http::trace::TraceLayer;

use crate::domain::StopId;

use super::dto::{DirectRouteResponse, ErrorResponse};
use super::state::AppState;

/// Fixed message for any invalid `from`/`to` parameter.
const MSG_INVALID_PARAMS: &str =
    "Request parameters must take positive values in the range 1 .. 2,147,483,647.";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/route/direct", any(direct_route))
        .fallback(unknown_path)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve a direct-route query.
///
/// The query string is extracted as raw key/value pairs rather than a
/// typed struct: extraction then never fails, so the method check really
/// does run before any parameter is looked at, and oddities like a
/// duplicated key fall through to the ordinary validation path (first
/// occurrence of each key wins).
async fn direct_route(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<DirectRouteResponse>, AppError> {
    check_method(&method)?;

    let first = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    let (from, to) = parse_stop_pair(first("from"), first("to"))?;

    let direct = state.routes.is_direct(from, to, state.debug_logging);

    Ok(Json(DirectRouteResponse {
        from: from.get(),
        to: to.get(),
        direct,
    }))
}

/// Fallback for unrecognized paths.
///
/// The method check still comes first: a wrong method anywhere is 405,
/// only then is an unknown path 404.
async fn unknown_path(method: Method) -> AppError {
    match check_method(&method) {
        Ok(()) => AppError::NotFound,
        Err(e) => e,
    }
}

fn check_method(method: &Method) -> Result<(), AppError> {
    if method == Method::GET || method == Method::HEAD {
        Ok(())
    } else {
        Err(AppError::MethodNotAllowed)
    }
}

/// Validate raw `from`/`to` values into stop ids.
///
/// A missing key, non-numeric text, zero, a negative value and a value
/// past the i32 range all fail identically, with the fixed message.
fn parse_stop_pair(
    raw_from: Option<&str>,
    raw_to: Option<&str>,
) -> Result<(StopId, StopId), AppError> {
    let parse = |raw: Option<&str>| {
        raw.and_then(|s| StopId::parse(s).ok())
            .ok_or(AppError::BadRequest {
                message: MSG_INVALID_PARAMS,
            })
    };
    Ok((parse(raw_from)?, parse(raw_to)?))
}

/// Application error type, mapped to the wire responses.
#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    /// 400 with a JSON error body.
    BadRequest { message: &'static str },

    /// 404 with the fixed JSON error body.
    NotFound,

    /// 405, no body, `Allow: GET, HEAD`.
    MethodNotAllowed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: message.to_string(),
                }),
            )
                .into_response(),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "404 Not Found.".to_string(),
                }),
            )
                .into_response(),
            AppError::MethodNotAllowed => {
                let mut response = StatusCode::METHOD_NOT_ALLOWED.into_response();
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static("GET, HEAD"));
                response
            }
        }
    }
}
