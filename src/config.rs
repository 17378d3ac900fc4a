//! Runtime world configuration
//!
//! Persisted as JSON in LocalStorage on the web, read from a file on native.
//! Missing fields fall back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::ConfigError;
use crate::sim::WorldBounds;

/// Lowest tick rate that still yields a one-tick fire cooldown
pub const MIN_FPS: u32 = 3;

/// Largest per-axis distance anything travels in one tick (a missile fired
/// from a ship at full speed). The world must be wider than this for the
/// wrap to stay in range.
pub const MAX_STEP: f32 = consts::MAX_SPEED + consts::MISSILE_SPEED;

/// World setup parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Logical ticks per second
    pub fps: u32,
    /// Asteroids spawned at game start
    pub asteroid_count: usize,
    /// Fixed field seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: consts::WORLD_WIDTH,
            height: consts::WORLD_HEIGHT,
            fps: consts::FPS,
            asteroid_count: consts::ASTEROID_COUNT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::NonPositiveBounds {
                width: self.width,
                height: self.height,
            });
        }
        if self.width <= MAX_STEP || self.height <= MAX_STEP {
            return Err(ConfigError::WorldTooSmall {
                width: self.width,
                height: self.height,
                min: MAX_STEP,
            });
        }
        if self.fps < MIN_FPS {
            return Err(ConfigError::TickRateTooLow {
                fps: self.fps,
                min: MIN_FPS,
            });
        }
        Ok(())
    }

    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.width, self.height)
    }

    /// Ticks between missile spawns while fire is held
    pub fn fire_cooldown_ticks(&self) -> u32 {
        consts::fire_cooldown(self.fps)
    }

    /// Duration of one tick in seconds
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "drift_rocks_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_SPEED;
    use crate::sim::{InputFlag, World, tick};
    use glam::Vec2;

    #[test]
    fn test_defaults_match_reference_sizing() {
        let config = GameConfig::default();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.fps, 30);
        assert_eq!(config.asteroid_count, 10);
        assert_eq!(config.fire_cooldown_ticks(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "width": 1024, "seed": 7 }"#).unwrap();
        assert_eq!(config.width, 1024.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.asteroid_count, 10);
    }

    #[test]
    fn test_rejects_non_positive_bounds() {
        let err = GameConfig::from_json(r#"{ "height": 0 }"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonPositiveBounds {
                width: 800.0,
                height: 0.0
            }
        );
    }

    #[test]
    fn test_rejects_world_smaller_than_one_step() {
        let err = GameConfig::from_json(r#"{ "width": 12, "height": 12 }"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::WorldTooSmall {
                width: 12.0,
                height: 12.0,
                min: 14.0
            }
        );

        // Exactly one step is still too small
        let err = GameConfig::from_json(r#"{ "height": 14 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::WorldTooSmall { .. }));
    }

    #[test]
    fn test_smallest_world_keeps_missiles_in_range() {
        let config = GameConfig::from_json(r#"{ "width": 15, "height": 15 }"#).unwrap();
        let mut world = World::new(&config, 3);
        world.ship.pos = Vec2::new(7.0, 1.0);
        world.ship.vel = Vec2::new(0.0, -MAX_SPEED);
        world.set_input(InputFlag::Fire, true);

        for _ in 0..60 {
            tick(&mut world);
            assert!(world.check_invariants());
            for m in &world.missiles {
                assert!(m.pos.y >= 0.0 && m.pos.y < 15.0);
            }
        }
        assert!(!world.missiles.is_empty());
    }

    #[test]
    fn test_rejects_low_tick_rate() {
        let err = GameConfig::from_json(r#"{ "fps": 2 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::TickRateTooLow { fps: 2, min: 3 }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameConfig::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn test_cooldown_scales_with_fps() {
        let config = GameConfig {
            fps: 60,
            ..Default::default()
        };
        assert_eq!(config.fire_cooldown_ticks(), 20);
        assert!((config.tick_seconds() - 1.0 / 60.0).abs() < 1e-7);
    }
}
