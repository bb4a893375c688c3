#![forbid(unsafe_code)]

//! Internationalization for the tfolio page.
//!
//! Translations live in flat JSON dictionaries, one file per language under
//! `languages/<code>.json`. A [`Loader`] reads and parses one dictionary per
//! language selection; nothing is cached across selections, so editing a
//! dictionary on disk takes effect on the next switch.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing file | No `languages/<code>.json` | `LoadError::Fetch` with the code |
//! | Unreadable file | I/O error mid-read | `LoadError::Fetch` with the code |
//! | Malformed body | Not a JSON string map | `LoadError::Parse` with the code |
//! | Missing key | Key absent from dictionary | Lookup returns `None`, no error |

pub mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;
pub use loader::{LoadError, Loader};
