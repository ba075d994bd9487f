//! Data-driven game balance
//!
//! Every balance knob in one serializable struct so a tuning pass doesn't
//! require a rebuild.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Upward bullet speed, pixels per second
    pub bullet_speed: f32,
    /// Downward enemy speed at difficulty level 1, pixels per second
    pub enemy_base_speed: f32,
    /// Fractional speed gain per difficulty level above 1
    pub enemy_speed_per_level: f32,
    /// Spawn cadence in ticks at difficulty level 1
    pub spawn_base_ticks: u32,
    /// Cadence floor the difficulty scaling can't go below
    pub spawn_min_ticks: u32,
    /// Probability of a second same-lane enemy per spawn (0.0 - 1.0)
    pub double_spawn_chance: f32,
    /// Live-enemy count below which the spawner tops up immediately
    pub min_live_enemies: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            bullet_speed: BULLET_SPEED,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_speed_per_level: 0.15,
            spawn_base_ticks: SPAWN_BASE_TICKS,
            spawn_min_ticks: SPAWN_MIN_TICKS,
            double_spawn_chance: 0.10,
            min_live_enemies: 1,
        }
    }
}

impl Tuning {
    /// Enemy speed at the given difficulty, pixels per second
    pub fn enemy_speed(&self, bullets_needed: u32) -> f32 {
        self.enemy_base_speed * (1.0 + self.enemy_speed_per_level * (bullets_needed - 1) as f32)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save tuning to a JSON file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Tuning saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_speed_scales_per_level() {
        let tuning = Tuning::default();
        assert_eq!(tuning.enemy_speed(1), tuning.enemy_base_speed);
        let level2 = tuning.enemy_speed(2);
        assert!(level2 > tuning.enemy_base_speed);
        assert!((level2 - tuning.enemy_base_speed * 1.15).abs() < 0.001);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning {
            double_spawn_chance: 0.25,
            ..Default::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.double_spawn_chance, 0.25);
        assert_eq!(back.spawn_base_ticks, tuning.spawn_base_ticks);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let tuning = Tuning::load(Path::new("/nonexistent/tuning.json"));
        assert_eq!(tuning.spawn_base_ticks, SPAWN_BASE_TICKS);
    }
}
