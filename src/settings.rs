//! Game settings
//!
//! Every field defaults to the built-in constants, so running without a
//! settings file behaves exactly like the fixed configuration.

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// How the contact checks (pickup, trap, enemy) measure distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProximityRule {
    /// Entity x paired with the player's z: only x separation counts
    #[default]
    LegacyXOnly,
    /// True distance on the floor plane
    Planar,
}

impl ProximityRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProximityRule::LegacyXOnly => "legacy_x_only",
            ProximityRule::Planar => "planar",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "legacy_x_only" | "legacy" | "x" => Some(ProximityRule::LegacyXOnly),
            "planar" | "2d" => Some(ProximityRule::Planar),
            _ => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window / camera ===
    pub window_width: u32,
    pub window_height: u32,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    /// Camera eye before the first simulated frame
    pub initial_eye: Vec3,
    pub initial_target: Vec3,

    // === Session ===
    /// RNG seed for entity placement
    pub seed: u64,
    pub item_count: usize,
    pub trap_count: usize,
    pub enemy_count: usize,
    /// Delay between frames in milliseconds
    pub frame_delay_ms: u64,
    /// Headless runs stop after this many frames (0 = unlimited)
    pub max_frames: u64,

    // === Rules ===
    pub proximity: ProximityRule,
    /// Ticks a trap stays inert after firing (0 = fires every tick)
    pub trap_cooldown_ticks: u32,

    // === Leaderboard ===
    /// Where to persist high scores; nothing is written when unset
    pub highscores_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            fov_y_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 50.0,
            initial_eye: Vec3::new(0.0, 1.0, -10.0),
            initial_target: Vec3::new(0.0, 1.0, 0.0),

            seed: 0,
            item_count: DEFAULT_ITEM_COUNT,
            trap_count: DEFAULT_TRAP_COUNT,
            enemy_count: DEFAULT_ENEMY_COUNT,
            frame_delay_ms: 10,
            max_frames: 6000,

            proximity: ProximityRule::LegacyXOnly,
            trap_cooldown_ticks: 0,

            highscores_path: None,
        }
    }
}

impl Settings {
    /// Default settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "maze_walker.json";

    /// Viewport aspect ratio
    pub fn aspect(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read settings from a JSON file
    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json).map_err(|e| Error::json(path, e))
    }

    /// Load settings, falling back to defaults when the file is absent or bad
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) if e.is_not_found() => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings file: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_configuration() {
        let s = Settings::default();
        assert_eq!((s.window_width, s.window_height), (800, 600));
        assert_eq!(s.fov_y_degrees, 45.0);
        assert_eq!((s.near_plane, s.far_plane), (0.1, 50.0));
        assert_eq!(s.initial_eye, Vec3::new(0.0, 1.0, -10.0));
        assert_eq!(s.proximity, ProximityRule::LegacyXOnly);
        assert_eq!(s.trap_cooldown_ticks, 0);
        assert!(s.highscores_path.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "seed": 42, "proximity": "planar" }"#).unwrap();
        assert_eq!(s.seed, 42);
        assert_eq!(s.proximity, ProximityRule::Planar);
        assert_eq!(s.item_count, DEFAULT_ITEM_COUNT);
        assert_eq!(s.window_width, 800);
    }

    #[test]
    fn test_proximity_rule_names() {
        for rule in [ProximityRule::LegacyXOnly, ProximityRule::Planar] {
            assert_eq!(ProximityRule::from_str(rule.as_str()), Some(rule));
        }
        assert_eq!(ProximityRule::from_str("2D"), Some(ProximityRule::Planar));
        assert_eq!(ProximityRule::from_str("nope"), None);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("maze_walker_no_such_settings.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!(
            "maze_walker_bad_settings_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Settings::read(&path), Err(Error::Json { .. })));
        assert_eq!(Settings::load(&path), Settings::default());
        let _ = std::fs::remove_file(&path);
    }
}
