// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_override`]
//! 3. **Environment variable** (`HERALD_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The explicit override has highest priority because it's the most specific.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Herald";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "HERALD_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Only the first call has an effect; later calls are ignored.
pub fn init_cli_override(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// - Linux: `~/.config/Herald/`
/// - macOS: `~/Library/Application Support/Herald/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Herald\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
