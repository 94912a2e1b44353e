// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`]
//!    (CLI `--config-dir`, tests)
//! 2. **Environment variable** `CROP_LENS_CONFIG_DIR`
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "CropLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CROP_LENS_CONFIG_DIR";

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/CropLens/`
/// - macOS: `~/Library/Application Support/CropLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\CropLens\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching the process environment must not interleave.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let custom = PathBuf::from("/tmp/crop_lens_override");
        assert_eq!(
            get_app_config_dir_with_override(Some(custom.clone())),
            Some(custom)
        );
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/crop_lens_env");
        let resolved = get_app_config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(resolved, Some(PathBuf::from("/tmp/crop_lens_env")));
    }

    #[test]
    fn platform_default_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);
        if let Some(path) = get_app_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
