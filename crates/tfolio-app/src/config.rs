//! Application configuration.

use std::env;
use std::path::PathBuf;

/// Paths the app works with. Both have defaults so `tfolio` can be run
/// from a checkout with no arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory containing `languages/`.
    pub content_root: PathBuf,
    /// Preferences file (theme + language).
    pub prefs_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let home = env::var_os("HOME").map(PathBuf::from);
        let prefs_path = home
            .map(|h| h.join(".config").join("tfolio").join("prefs.json"))
            .unwrap_or_else(|| PathBuf::from("prefs.json"));
        Self {
            content_root: PathBuf::from("."),
            prefs_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_root_is_cwd() {
        let config = AppConfig::default();
        assert_eq!(config.content_root, PathBuf::from("."));
        assert!(config.prefs_path.ends_with("prefs.json"));
    }
}
