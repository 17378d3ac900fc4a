//! Drift Rocks - a wrap-around asteroid field arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, asteroids, missile pool)
//! - `config`: Runtime world configuration
//! - `error`: Configuration errors
//! - `renderer`: Canvas 2D rendering (browser only)

pub mod config;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;

use glam::Vec2;

use crate::sim::WorldBounds;

/// Game configuration constants
///
/// Every value here is expressed per tick and only holds at [`consts::FPS`].
pub mod consts {
    /// Nominal logical tick rate
    pub const FPS: u32 = 30;

    /// Default playfield size
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Heading change per tick while a turn key is held (radians)
    pub const TURN_STEP: f32 = std::f32::consts::PI / 16.0;
    /// Velocity added per tick while thrusting
    pub const THRUST_ACCEL: f32 = 0.5;
    /// Per-axis ship speed limit
    pub const MAX_SPEED: f32 = 6.0;

    /// Asteroid field defaults
    pub const ASTEROID_COUNT: usize = 10;
    pub const ASTEROID_RADIUS: f32 = 50.0;
    pub const ASTEROID_PATH_LEN: usize = 12;
    pub const ASTEROID_PATH_MIN: f32 = 0.7;
    pub const ASTEROID_PATH_MAX: f32 = 1.1;
    pub const ASTEROID_SPEED_MIN: f32 = 1.0;
    pub const ASTEROID_SPEED_MAX: f32 = 2.0;
    /// Spin is drawn from [-ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN)
    pub const ASTEROID_MAX_SPIN: f32 = 0.1;

    /// Muzzle speed added to the ship's velocity along its heading
    pub const MISSILE_SPEED: f32 = 8.0;
    /// Ticks a missile lives before expiring
    pub const MISSILE_FUSE: u32 = 50;

    /// Ticks between missile spawns while fire is held
    pub const fn fire_cooldown(fps: u32) -> u32 {
        fps / 3
    }
}

/// Toroidal wrap of a single coordinate.
///
/// Adds `extent` before the remainder so a transiently negative sum stays
/// non-negative for any `|delta| <= extent`.
#[inline]
pub fn wrap_coord(value: f32, delta: f32, extent: f32) -> f32 {
    (extent + value + delta) % extent
}

/// Translate `pos` by `vel` and wrap it back into the world
#[inline]
pub fn wrap_position(pos: Vec2, vel: Vec2, bounds: &WorldBounds) -> Vec2 {
    Vec2::new(
        wrap_coord(pos.x, vel.x, bounds.width),
        wrap_coord(pos.y, vel.y, bounds.height),
    )
}

/// Unit vector the ship's nose points along.
///
/// Heading 0 is drawn pointing up the screen, so forward is the heading
/// rotated by -90°.
#[inline]
pub fn forward_vector(dir: f32) -> Vec2 {
    let theta = dir - std::f32::consts::FRAC_PI_2;
    Vec2::new(theta.cos(), theta.sin())
}

/// Clamp each velocity component to [-max, max] independently
#[inline]
pub fn clamp_speed(vel: Vec2, max: f32) -> Vec2 {
    Vec2::new(vel.x.clamp(-max, max), vel.y.clamp(-max, max))
}

/// Rotate a local-space point by `dir` radians
#[inline]
pub fn rotate(point: Vec2, dir: f32) -> Vec2 {
    Vec2::from_angle(dir).rotate(point)
}
