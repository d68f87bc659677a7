// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--session-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`CITYSYNC_CONFIG_DIR`, `CITYSYNC_SESSION_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The session directory holds state that must not outlive the login
//! session, so its platform default is the runtime directory
//! (`$XDG_RUNTIME_DIR` on Linux), which is emptied at logout. Without one
//! there is no session directory and the shell keeps its state in memory.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "CitySync";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CITYSYNC_CONFIG_DIR";

/// Environment variable to override the session directory.
pub const ENV_SESSION_DIR: &str = "CITYSYNC_SESSION_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for session directory (set once at startup).
static CLI_SESSION_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for config and session directories.
///
/// Should be called once at startup, before any path resolution. Later calls
/// are ignored.
pub fn init_cli_overrides(config_dir: Option<String>, session_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
    if CLI_SESSION_DIR.set(session_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("session dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_session_dir() -> Option<PathBuf> {
    CLI_SESSION_DIR.get().and_then(Clone::clone)
}

/// Reads a directory from an environment variable, ignoring empty values.
fn env_dir(name: &str) -> Option<PathBuf> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Returns the application config directory path (holds `settings.toml`).
///
/// - Linux: `~/.config/CitySync/`
/// - macOS: `~/Library/Application Support/CitySync/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\CitySync\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the session-scoped directory (holds `session.cbor`).
pub fn get_session_dir() -> Option<PathBuf> {
    get_session_dir_with_override(None)
}

/// Returns the session directory path with an optional override.
///
/// Returns `None` when nothing is overridden and the platform has no runtime
/// directory.
pub fn get_session_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_session_dir() {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_SESSION_DIR) {
        return Some(path);
    }

    dirs::runtime_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Serializes tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Runs `f` with `XDG_RUNTIME_DIR` and the session dir variable unset,
/// restoring both afterwards.
#[cfg(test)]
pub(crate) fn without_runtime_dir<T>(f: impl FnOnce() -> T) -> T {
    let saved: Vec<_> = ["XDG_RUNTIME_DIR", ENV_SESSION_DIR]
        .into_iter()
        .map(|name| (name, std::env::var_os(name)))
        .collect();
    for (name, _) in &saved {
        std::env::remove_var(name);
    }
    let result = f();
    for (name, value) in saved {
        if let Some(value) = value {
            std::env::set_var(name, value);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_LOCK.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn session_dir_contains_app_name() {
        let _lock = ENV_LOCK.lock().unwrap();
        std::env::remove_var(ENV_SESSION_DIR);

        if let Some(path) = get_session_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn no_runtime_dir_means_no_session_dir() {
        let _lock = ENV_LOCK.lock().unwrap();
        let resolved = without_runtime_dir(get_session_dir);
        assert_eq!(resolved, None);
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn override_path_takes_precedence_for_session_dir() {
        let override_path = PathBuf::from("/custom/session/path");
        let result = get_session_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_session_dir() {
        let _lock = ENV_LOCK.lock().unwrap();
        let test_path = "/test/session/dir";
        std::env::set_var(ENV_SESSION_DIR, test_path);

        let result = get_session_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_SESSION_DIR);
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_LOCK.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_LOCK.lock().unwrap();
        std::env::set_var(ENV_SESSION_DIR, "");

        if let Some(path) = get_session_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_SESSION_DIR);
    }
}
