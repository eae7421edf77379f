//! Ingestion of the routes data store.
//!
//! The data store is a UTF-8 text file with one route per line. Each line
//! is `<label> <stop-id> <stop-id> ...`, whitespace-separated; the label
//! token (leading digits) names the route and is not a stop.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{Route, RouteSet, StopId};

/// Failure to read the routes data store.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The data store file does not exist.
    #[error("routes data store not found: {path}")]
    NotFound { path: PathBuf },

    /// The data store exists but could not be read.
    #[error("cannot read routes data store {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// Read and parse the routes data store at `path`.
///
/// A missing file is fatal to startup. A file that parses to zero routes
/// is not: the daemon still serves, and no query ever resolves as direct.
pub fn load_routes(path: &Path) -> Result<RouteSet, DatasetError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            DatasetError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let routes = parse_routes(&text);
    if routes.is_empty() {
        warn!(path = %path.display(), "routes data store yielded no routes");
    }
    Ok(routes)
}

/// Parse the raw data store text into a route set.
///
/// Empty lines (including the trailing one left by a final newline) are
/// dropped. Within a line, the first token is discarded as the route
/// label when it starts with a digit; every remaining token that parses
/// as a positive integer becomes a stop, in order. Tokens that do not
/// parse are skipped, and a line left with no stops produces no route.
pub fn parse_routes(text: &str) -> RouteSet {
    let mut routes = Vec::new();

    for line in text.lines() {
        let mut tokens = line.split_ascii_whitespace().peekable();

        if tokens
            .peek()
            .is_some_and(|t| t.starts_with(|c: char| c.is_ascii_digit()))
        {
            tokens.next();
        }

        let stops: Vec<StopId> = tokens
            .filter_map(|token| match StopId::parse(token) {
                Ok(stop) => Some(stop),
                Err(_) => {
                    debug!(token, "skipping malformed stop token");
                    None
                }
            })
            .collect();

        if !stops.is_empty() {
            routes.push(Route::new(stops));
        }
    }

    RouteSet::new(routes)
}
