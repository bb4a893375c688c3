//! Per-language dictionary loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::dictionary::Dictionary;

/// Why a language could not be loaded. Both variants carry the language
/// code so callers can log which selection failed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dictionary resource was missing or unreadable.
    #[error("could not load language file: {code}.json")]
    Fetch {
        code: String,
        #[source]
        source: io::Error,
    },
    /// The resource was read but is not a flat JSON string map.
    #[error("malformed language file: {code}.json")]
    Parse {
        code: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The language code whose load failed.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Fetch { code, .. } | Self::Parse { code, .. } => code,
        }
    }
}

/// Loads translation dictionaries from `<root>/languages/<code>.json`.
///
/// The code string is interpolated into the path verbatim, mirroring the
/// original resource convention. One fresh dictionary per call: no cache,
/// no retry.
#[derive(Debug, Clone)]
pub struct Loader {
    root: PathBuf,
}

impl Loader {
    /// A loader resolving against `root` (the directory that contains
    /// `languages/`).
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The on-disk path a code resolves to.
    #[must_use]
    pub fn resource_path(&self, code: &str) -> PathBuf {
        self.root.join("languages").join(format!("{code}.json"))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load and parse the dictionary for `code`. Single attempt.
    pub fn load(&self, code: &str) -> Result<Dictionary, LoadError> {
        let path = self.resource_path(code);
        debug!(code, path = %path.display(), "loading language dictionary");

        let body = fs::read_to_string(&path).map_err(|source| LoadError::Fetch {
            code: code.to_string(),
            source,
        })?;

        let dictionary: Dictionary =
            serde_json::from_str(&body).map_err(|source| LoadError::Parse {
                code: code.to_string(),
                source,
            })?;

        debug!(code, entries = dictionary.len(), "language dictionary loaded");
        Ok(dictionary)
    }
}
