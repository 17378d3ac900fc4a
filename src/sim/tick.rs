//! Fixed timestep simulation tick
//!
//! Core game loop step: ship, then asteroids, then missiles.

use super::asteroid::advance_asteroids;
use super::missile::{Muzzle, advance_missiles};
use super::ship::advance_ship;
use super::state::World;

/// Advance the world by one tick.
///
/// Input is sampled once up front. A missile fired this tick leaves from the
/// ship's updated position and heading but inherits the velocity the ship had
/// before this tick's thrust.
pub fn tick(world: &mut World) {
    let input = world.input;
    let launch_vel = world.ship.vel;

    advance_ship(&mut world.ship, &input, &world.bounds);
    advance_asteroids(&mut world.asteroids, &world.bounds);

    let muzzle = Muzzle {
        pos: world.ship.pos,
        vel: launch_vel,
        dir: world.ship.dir,
    };
    let fired = advance_missiles(
        &mut world.missiles,
        &mut world.fire_timer,
        world.fire_cooldown,
        &muzzle,
        &input,
        &world.bounds,
    );
    if fired {
        world.shots_fired += 1;
        log::trace!(
            "tick {}: missile fired, {} in flight",
            world.time_ticks,
            world.missiles.len()
        );
    }

    world.time_ticks += 1;

    debug_assert!(
        world.check_invariants(),
        "world invariants broken at tick {}",
        world.time_ticks
    );
}

/// Run `n` ticks with the current input held
pub fn run_ticks(world: &mut World, n: u32) {
    for _ in 0..n {
        tick(world);
    }
}
