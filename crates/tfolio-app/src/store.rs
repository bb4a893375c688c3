//! Persisted user preferences.
//!
//! Two string keys round-tripped through one JSON file, the terminal
//! analog of the page's local storage. No versioning, no migration: an
//! absent, unreadable, or corrupt file simply yields the defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

fn default_theme() -> String {
    "dark".to_string()
}

fn default_language() -> String {
    "pt".to_string()
}

/// The two persisted keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: default_language(),
        }
    }
}

/// File-backed preference storage.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read preferences, falling back to defaults on any failure.
    #[must_use]
    pub fn load(&self) -> Preferences {
        match fs::read_to_string(&self.path) {
            Ok(body) => match serde_json::from_str(&body) {
                Ok(prefs) => prefs,
                Err(err) => {
                    warn!(path = %self.path.display(), %err, "corrupt preferences, using defaults");
                    Preferences::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Preferences::default(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "unreadable preferences, using defaults");
                Preferences::default()
            }
        }
    }

    /// Write preferences, creating parent directories as needed.
    pub fn save(&self, prefs: &Preferences) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(prefs).map_err(io::Error::other)?;
        fs::write(&self.path, body)?;
        debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}
