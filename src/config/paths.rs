// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - the `--config-dir` flag, or a path passed by tests
//! 2. **Environment variable** (`LOCALE_LENS_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
pub const APP_NAME: &str = "LocaleLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LOCALE_LENS_CONFIG_DIR";

/// Returns the application config directory path, unless `override_path`
/// is given.
///
/// - Linux: `~/.config/LocaleLens/`
/// - macOS: `~/Library/Application Support/LocaleLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\LocaleLens\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
