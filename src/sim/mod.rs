//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per step, constants are per tick
//! - Seeded RNG only, and only at spawn
//! - Stable missile order (spawn order)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod input;
pub mod missile;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{advance_asteroids, make_asteroid_field, spawn_asteroid_field};
pub use input::{InputFlag, InputState, SharedInput};
pub use missile::{Muzzle, advance_missiles, step_fire_timer};
pub use ship::advance_ship;
pub use state::{Asteroid, Missile, Ship, World, WorldBounds};
pub use tick::{run_ticks, tick};
