// SPDX-License-Identifier: MPL-2.0
//! This module handles the engine configuration, loading and saving user
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[playback]` - Loop count, inter-repeat pause, auto-pause, settle delay
//! - `[history]` - Undo depth
//! - `[regions]` - Waveform label length
//! - `[diagnostics]` - Event log size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `SEGLOOP_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use segloop::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.playback.auto_pause = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::application::orchestrator::EngineSettings;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::history::HistoryCapacity;
use crate::domain::playback::{InterPauseFraction, LoopCount, SettleDelay};
use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Playback drill settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Passes per loop: a positive integer or `"infinite"`.
    #[serde(
        default,
        deserialize_with = "deserialize_loop_count",
        serialize_with = "serialize_loop_count"
    )]
    pub loop_count: LoopCount,

    /// Pause between repeats as a fraction of the segment duration.
    #[serde(
        default = "default_inter_pause_fraction",
        skip_serializing_if = "Option::is_none"
    )]
    pub inter_pause_fraction: Option<f64>,

    /// Pause at each segment boundary.
    #[serde(default = "default_auto_pause", skip_serializing_if = "Option::is_none")]
    pub auto_pause: Option<bool>,

    /// Delay before priming the next segment after an auto-pause (ms).
    #[serde(
        default = "default_settle_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub settle_delay_ms: Option<u64>,

    /// Start playback when jumping to a segment.
    #[serde(
        default = "default_force_play_on_jump",
        skip_serializing_if = "Option::is_none"
    )]
    pub force_play_on_jump: Option<bool>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            loop_count: LoopCount::default(),
            inter_pause_fraction: default_inter_pause_fraction(),
            auto_pause: default_auto_pause(),
            settle_delay_ms: default_settle_delay_ms(),
            force_play_on_jump: default_force_play_on_jump(),
        }
    }
}

/// Undo/redo settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    /// Maximum number of undo snapshots.
    #[serde(default = "default_max_entries", skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

/// Waveform region settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionsConfig {
    /// Characters shown on a region label.
    #[serde(
        default = "default_label_max_chars",
        skip_serializing_if = "Option::is_none"
    )]
    pub label_max_chars: Option<usize>,
}

impl Default for RegionsConfig {
    fn default() -> Self {
        Self {
            label_max_chars: default_label_max_chars(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Retained drill events.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Engine configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub regions: RegionsConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Converts to engine settings, clamping every value into range.
    #[must_use]
    pub fn engine_settings(&self) -> EngineSettings {
        let playback = &self.playback;
        EngineSettings {
            loop_count: match playback.loop_count {
                LoopCount::Finite(n) => LoopCount::finite(n.min(MAX_LOOP_COUNT)),
                LoopCount::Infinite => LoopCount::Infinite,
            },
            inter_pause_fraction: InterPauseFraction::new(
                playback
                    .inter_pause_fraction
                    .unwrap_or(DEFAULT_INTER_PAUSE_FRACTION),
            ),
            auto_pause: playback.auto_pause.unwrap_or(DEFAULT_AUTO_PAUSE),
            settle_delay: SettleDelay::from_millis(
                playback.settle_delay_ms.unwrap_or(DEFAULT_SETTLE_DELAY_MS),
            ),
            force_play_on_jump: playback
                .force_play_on_jump
                .unwrap_or(DEFAULT_FORCE_PLAY_ON_JUMP),
            history_capacity: HistoryCapacity::new(
                self.history
                    .max_entries
                    .unwrap_or(DEFAULT_HISTORY_MAX_ENTRIES),
            ),
            label_max_chars: self
                .regions
                .label_max_chars
                .unwrap_or(DEFAULT_LABEL_MAX_CHARS)
                .clamp(MIN_LABEL_MAX_CHARS, MAX_LABEL_MAX_CHARS),
            diagnostics_capacity: BufferCapacity::new(
                self.diagnostics
                    .buffer_capacity
                    .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
            ),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_inter_pause_fraction() -> Option<f64> {
    Some(DEFAULT_INTER_PAUSE_FRACTION)
}

fn default_auto_pause() -> Option<bool> {
    Some(DEFAULT_AUTO_PAUSE)
}

fn default_settle_delay_ms() -> Option<u64> {
    Some(DEFAULT_SETTLE_DELAY_MS)
}

fn default_force_play_on_jump() -> Option<bool> {
    Some(DEFAULT_FORCE_PLAY_ON_JUMP)
}

fn default_max_entries() -> Option<usize> {
    Some(DEFAULT_HISTORY_MAX_ENTRIES)
}

fn default_label_max_chars() -> Option<usize> {
    Some(DEFAULT_LABEL_MAX_CHARS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

/// Accepts a positive integer or the words `infinite` / `inf`.
fn deserialize_loop_count<'de, D>(deserializer: D) -> std::result::Result<LoopCount, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Count(i64),
        Word(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Count(n) if n >= 1 => Ok(LoopCount::finite(
            u32::try_from(n).unwrap_or(MAX_LOOP_COUNT).min(MAX_LOOP_COUNT),
        )),
        Raw::Count(n) => Err(D::Error::custom(format!(
            "invalid loop_count: {n} (must be at least 1)"
        ))),
        Raw::Word(word) => match word.to_lowercase().as_str() {
            "infinite" | "inf" => Ok(LoopCount::Infinite),
            other => Err(D::Error::custom(format!("invalid loop_count: {}", other))),
        },
    }
}

fn serialize_loop_count<S>(count: &LoopCount, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match count {
        LoopCount::Finite(n) => serializer.serialize_u32(*n),
        LoopCount::Infinite => serializer.serialize_str("infinite"),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (Config::default(), Some("config-load-error".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.playback.loop_count = LoopCount::Infinite;
        config.playback.inter_pause_fraction = Some(0.5);
        config.playback.auto_pause = Some(true);
        config.history.max_entries = Some(20);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn loop_count_accepts_integer_and_word() {
        let config: Config = toml::from_str("[playback]\nloop_count = 5\n").expect("parse");
        assert_eq!(config.playback.loop_count, LoopCount::Finite(5));

        let config: Config =
            toml::from_str("[playback]\nloop_count = \"Infinite\"\n").expect("parse");
        assert_eq!(config.playback.loop_count, LoopCount::Infinite);
    }

    #[test]
    fn loop_count_rejects_zero_and_unknown_words() {
        assert!(toml::from_str::<Config>("[playback]\nloop_count = 0\n").is_err());
        assert!(toml::from_str::<Config>("[playback]\nloop_count = \"forever\"\n").is_err());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[history]\nmax_entries = 10\n").expect("parse");
        assert_eq!(config.playback, PlaybackConfig::default());
        assert_eq!(config.history.max_entries, Some(10));
    }

    #[test]
    fn engine_settings_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.playback.inter_pause_fraction = Some(3.0);
        config.playback.settle_delay_ms = Some(60_000);
        config.history.max_entries = Some(1);
        config.regions.label_max_chars = Some(1);
        config.playback.loop_count = LoopCount::Finite(5_000);

        let settings = config.engine_settings();

        assert_abs_diff_eq!(settings.inter_pause_fraction.value(), MAX_INTER_PAUSE_FRACTION);
        assert_eq!(settings.settle_delay.as_millis(), MAX_SETTLE_DELAY_MS);
        assert_eq!(settings.history_capacity.value(), MIN_HISTORY_MAX_ENTRIES);
        assert_eq!(settings.label_max_chars, MIN_LABEL_MAX_CHARS);
        assert_eq!(settings.loop_count, LoopCount::Finite(MAX_LOOP_COUNT));
    }

    #[test]
    fn default_config_maps_to_default_settings() {
        assert_eq!(Config::default().engine_settings(), EngineSettings::default());
    }

    #[test]
    fn load_with_override_reports_parse_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "playback = = 1").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
