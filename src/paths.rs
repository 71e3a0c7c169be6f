// SPDX-License-Identifier: MPL-2.0
//! Directory resolution for settings and stored segments.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** passed to the `_with_override()` functions
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) set via [`init_cli_overrides`]
//! 3. **Environment variables** (`SEGLOOP_DATA_DIR`, `SEGLOOP_CONFIG_DIR`)
//! 4. **Platform default** via the `dirs` crate, with the app name appended
//!
//! Stored segment collections live under `<data dir>/subtitles/`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "segloop";

/// Sub-directory of the data directory holding segment files.
pub const SUBTITLES_DIR_NAME: &str = "subtitles";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "SEGLOOP_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SEGLOOP_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

#[derive(Clone, Copy)]
enum DirKind {
    Data,
    Config,
}

impl DirKind {
    fn cli(self) -> Option<PathBuf> {
        let cell = match self {
            DirKind::Data => &CLI_DATA_DIR,
            DirKind::Config => &CLI_CONFIG_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn env_var(self) -> &'static str {
        match self {
            DirKind::Data => ENV_DATA_DIR,
            DirKind::Config => ENV_CONFIG_DIR,
        }
    }

    fn platform(self) -> Option<PathBuf> {
        match self {
            DirKind::Data => dirs::data_dir(),
            DirKind::Config => dirs::config_dir(),
        }
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = override_path {
            return Some(path);
        }
        if let Some(path) = self.cli() {
            return Some(path);
        }
        if let Ok(env_path) = std::env::var(self.env_var()) {
            if !env_path.is_empty() {
                return Some(PathBuf::from(env_path));
            }
        }
        self.platform().map(|mut path| {
            path.push(APP_NAME);
            path
        })
    }
}

/// Records the `--data-dir` / `--config-dir` CLI values.
///
/// Call once at startup. Returns false if overrides were already set; the
/// first values are kept.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    data_set && config_set
}

/// Returns the data directory (stored segments, exported reports).
///
/// Returns `None` if no directory can be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    DirKind::Data.resolve(override_path)
}

/// Returns the config directory (`settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    DirKind::Config.resolve(override_path)
}

/// Returns `<data dir>/subtitles`.
pub fn get_subtitles_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    get_app_data_dir_with_override(override_path).map(|dir| dir.join(SUBTITLES_DIR_NAME))
}
