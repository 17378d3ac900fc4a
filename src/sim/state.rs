//! World state and core simulation types
//!
//! Everything a tick reads or writes lives in [`World`]; there is no global
//! mutable state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroid::spawn_asteroid_field;
use super::input::{InputFlag, InputState};
use crate::config::GameConfig;
use crate::consts::*;
use crate::rotate;

/// Playfield extent. Positions live in [0, width) x [0, height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `pos` lies inside the wrapped range
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(WORLD_WIDTH, WORLD_HEIGHT)
    }
}

/// Hull of the ship in local space, nose up
pub const SHIP_HULL: [Vec2; 4] = [
    Vec2::new(0.0, -10.0),
    Vec2::new(-7.0, 10.0),
    Vec2::new(0.0, 8.0),
    Vec2::new(7.0, 10.0),
];

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Each axis stays within [-MAX_SPEED, MAX_SPEED]
    pub vel: Vec2,
    /// Heading in radians, unbounded (0 = nose up)
    pub dir: f32,
}

impl Ship {
    /// A resting ship at the center of the world
    pub fn at_center(bounds: &WorldBounds) -> Self {
        Self {
            pos: bounds.center(),
            vel: Vec2::ZERO,
            dir: 0.0,
        }
    }

    /// Hull vertices in world space
    pub fn outline(&self) -> [Vec2; 4] {
        SHIP_HULL.map(|p| self.pos + rotate(p, self.dir))
    }
}

/// A drifting, spinning rock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub dir: f32,
    /// Heading change per tick
    pub spin: f32,
    pub radius: f32,
    /// Radial offsets of the jagged silhouette, fixed at spawn
    pub path: [f32; ASTEROID_PATH_LEN],
}

impl Asteroid {
    /// Silhouette vertices in world space.
    ///
    /// Vertex `i` sits at angle `(i + 1) * 2π / n` and distance
    /// `radius * path[i]`, rotated by the current heading.
    pub fn outline(&self) -> [Vec2; ASTEROID_PATH_LEN] {
        let step = std::f32::consts::TAU / ASTEROID_PATH_LEN as f32;
        std::array::from_fn(|i| {
            let theta = (i + 1) as f32 * step;
            let local = Vec2::new(theta.cos(), theta.sin()) * self.radius * self.path[i];
            self.pos + rotate(local, self.dir)
        })
    }
}

/// A projectile fired by the ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks left to live; always positive while the missile is in the pool
    pub fuse: u32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub bounds: WorldBounds,
    pub ship: Ship,
    /// Fixed-size field, never resized after spawn
    pub asteroids: Vec<Asteroid>,
    /// Live missiles in spawn order
    pub missiles: Vec<Missile>,
    /// 0 when ready to fire, otherwise ticks since the last shot
    pub fire_timer: u32,
    /// Ticks between shots while fire is held
    pub fire_cooldown: u32,
    /// Latest input flags, read once per tick
    pub input: InputState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Missiles spawned since the world was created
    pub shots_fired: u64,
}

impl World {
    /// Create a world from config, seeding the asteroid field with `seed`
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let bounds = config.bounds();
        Self {
            bounds,
            ship: Ship::at_center(&bounds),
            asteroids: spawn_asteroid_field(config.asteroid_count, seed, &bounds),
            missiles: Vec::new(),
            fire_timer: 0,
            fire_cooldown: config.fire_cooldown_ticks(),
            input: InputState::default(),
            time_ticks: 0,
            shots_fired: 0,
        }
    }

    /// Default 800x600 world at 30 fps
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&GameConfig::default(), seed)
    }

    /// Record a key/pointer transition
    pub fn set_input(&mut self, flag: InputFlag, pressed: bool) {
        self.input.set(flag, pressed);
    }

    /// Check the state invariants that every tick must preserve
    pub fn check_invariants(&self) -> bool {
        let ship_ok = self.bounds.contains(self.ship.pos)
            && self.ship.vel.x.abs() <= MAX_SPEED
            && self.ship.vel.y.abs() <= MAX_SPEED;
        let asteroids_ok = self.asteroids.iter().all(|a| self.bounds.contains(a.pos));
        let missiles_ok = self
            .missiles
            .iter()
            .all(|m| m.fuse > 0 && self.bounds.contains(m.pos));
        ship_ok && asteroids_ok && missiles_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_layout() {
        let world = World::with_seed(42);
        assert_eq!(world.ship.pos, Vec2::new(400.0, 300.0));
        assert_eq!(world.ship.vel, Vec2::ZERO);
        assert_eq!(world.ship.dir, 0.0);
        assert_eq!(world.asteroids.len(), ASTEROID_COUNT);
        assert!(world.missiles.is_empty());
        assert_eq!(world.fire_timer, 0);
        assert_eq!(world.fire_cooldown, 10);
        assert!(world.check_invariants());
    }

    #[test]
    fn test_set_input_last_writer_wins() {
        let mut world = World::with_seed(1);
        world.set_input(InputFlag::Thrust, true);
        world.set_input(InputFlag::Thrust, true);
        assert!(world.input.thrust);
        world.set_input(InputFlag::Thrust, false);
        assert!(!world.input.thrust);
    }

    #[test]
    fn test_ship_outline_nose_up() {
        let ship = Ship {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            dir: 0.0,
        };
        let hull = ship.outline();
        assert!((hull[0] - Vec2::new(100.0, 90.0)).length() < 1e-4);
        assert!((hull[2] - Vec2::new(100.0, 108.0)).length() < 1e-4);
    }

    #[test]
    fn test_asteroid_outline_uses_path_offsets() {
        let asteroid = Asteroid {
            pos: Vec2::new(200.0, 200.0),
            vel: Vec2::ZERO,
            dir: 0.0,
            spin: 0.0,
            radius: 50.0,
            path: [1.0; ASTEROID_PATH_LEN],
        };
        let outline = asteroid.outline();
        // Last vertex closes the loop at angle 2π
        assert!((outline[ASTEROID_PATH_LEN - 1] - Vec2::new(250.0, 200.0)).length() < 1e-3);
        for p in outline {
            assert!(((p - asteroid.pos).length() - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_bounds_contains_is_half_open() {
        let bounds = WorldBounds::default();
        assert!(bounds.contains(Vec2::ZERO));
        assert!(!bounds.contains(Vec2::new(800.0, 10.0)));
        assert!(!bounds.contains(Vec2::new(10.0, -0.1)));
    }

    #[test]
    fn test_world_snapshot_roundtrip_preserves_paths() {
        let world = World::with_seed(9);
        let json = serde_json::to_string(&world).unwrap();
        let restored: World = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.asteroids, world.asteroids);
        assert_eq!(restored.ship, world.ship);
    }
}
