// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! Resolution order for the config directory:
//! 1. Explicit override (tests)
//! 2. `ARCANA_CONFIG_DIR` environment variable
//! 3. Platform config directory via the `dirs` crate

use std::path::{Path, PathBuf};

/// Application name used for directory naming.
const APP_NAME: &str = "Arcana";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ARCANA_CONFIG_DIR";

/// Returns the application config directory path.
///
/// Returns `None` only when the platform has no config directory and no
/// override is set.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory, honoring an explicit override first.
pub fn config_dir_with_override(override_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.to_path_buf());
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|base| base.join(APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = config_dir_with_override(Some(Path::new("/tmp/arcana-test")));
        assert_eq!(dir, Some(PathBuf::from("/tmp/arcana-test")));
    }

    #[test]
    fn platform_dir_ends_with_app_name() {
        // The env var case is covered by the config module's serial tests.
        if std::env::var(ENV_CONFIG_DIR).is_err() {
            if let Some(dir) = config_dir() {
                assert!(dir.ends_with(APP_NAME));
            }
        }
    }
}
