//! Daemon settings.
//!
//! Settings are read once at startup from a TOML file and resolved into a
//! plain [`Settings`] value that is passed to the components that need
//! it. The daemon always starts: a missing or malformed settings file
//! falls back to defaults with a warning.
//!
//! ```toml
//! [server]
//! port = 8765
//! debug-logging = true
//!
//! [routes]
//! datastore = "./data/routes.txt"
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Settings file location used when `SETTINGS_PATH` is not set.
pub const DEFAULT_SETTINGS_PATH: &str = "./etc/settings.conf";

/// Port used when the settings file names none (or an invalid one).
pub const DEFAULT_PORT: u16 = 8080;

/// Data store location used when the settings file names none.
pub const DEFAULT_DATASTORE: &str = "./data/routes.txt";

/// Registered-port range the daemon is willing to listen on.
const PORT_RANGE: std::ops::RangeInclusive<u16> = 1024..=49151;

/// Resolved daemon settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Port the HTTP server listens on.
    pub server_port: u16,

    /// Gates verbose per-route scan logging during matching.
    pub debug_logging: bool,

    /// Path to the routes data store.
    pub datastore: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            server_port: DEFAULT_PORT,
            debug_logging: false,
            datastore: PathBuf::from(DEFAULT_DATASTORE),
        }
    }
}

/// On-disk shape of the settings file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    routes: RoutesSection,
}

#[derive(Debug, Default, Deserialize)]
struct ServerSection {
    port: Option<u16>,
    #[serde(rename = "debug-logging")]
    debug_logging: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RoutesSection {
    datastore: Option<String>,
}

/// Settings file location: the `SETTINGS_PATH` environment variable when
/// set and non-empty, otherwise [`DEFAULT_SETTINGS_PATH`].
fn resolve_path(override_var: Option<OsString>) -> PathBuf {
    match override_var {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_SETTINGS_PATH),
    }
}

impl Settings {
    /// Load settings from the default location, honouring the
    /// `SETTINGS_PATH` environment variable override.
    pub fn load_default() -> Self {
        Settings::load(&resolve_path(std::env::var_os("SETTINGS_PATH")))
    }

    /// Load settings from `path`, falling back to defaults when the file
    /// is missing or malformed.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "settings file unreadable, using defaults");
                return Settings::default();
            }
        };

        match toml::from_str::<SettingsFile>(&text) {
            Ok(file) => Settings::resolve(file),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "settings file malformed, using defaults");
                Settings::default()
            }
        }
    }

    fn resolve(file: SettingsFile) -> Self {
        let server_port = match file.server.port {
            Some(port) if PORT_RANGE.contains(&port) => port,
            Some(port) => {
                warn!(port, "configured port outside the registered range, using default");
                DEFAULT_PORT
            }
            None => DEFAULT_PORT,
        };

        let datastore = match file.routes.datastore {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(DEFAULT_DATASTORE),
        };

        Settings {
            server_port,
            debug_logging: file.server.debug_logging.unwrap_or(false),
            datastore,
        }
    }
}
