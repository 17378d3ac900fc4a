//! Asteroid field: seeded spawn, drift and spin

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Asteroid, WorldBounds};
use crate::consts::*;
use crate::wrap_position;

/// Spawn a reproducible field of `count` asteroids
pub fn spawn_asteroid_field(count: usize, seed: u64, bounds: &WorldBounds) -> Vec<Asteroid> {
    let mut rng = Pcg32::seed_from_u64(seed);
    make_asteroid_field(count, &mut rng, bounds)
}

/// Spawn `count` asteroids from an existing RNG.
///
/// Positions are uniform over the world, each velocity axis is
/// `±uniform(1, 2)` and spin is `uniform(-0.1, 0.1)`.
pub fn make_asteroid_field<R: Rng>(
    count: usize,
    rng: &mut R,
    bounds: &WorldBounds,
) -> Vec<Asteroid> {
    (0..count)
        .map(|_| {
            let path = make_asteroid_path(rng);
            let pos = Vec2::new(
                rng.random_range(0.0..bounds.width),
                rng.random_range(0.0..bounds.height),
            );
            let vel = Vec2::new(
                rng.random_range(ASTEROID_SPEED_MIN..ASTEROID_SPEED_MAX) * random_sign(rng),
                rng.random_range(ASTEROID_SPEED_MIN..ASTEROID_SPEED_MAX) * random_sign(rng),
            );
            let spin = rng.random_range(-ASTEROID_MAX_SPIN..ASTEROID_MAX_SPIN);
            Asteroid {
                pos,
                vel,
                dir: 0.0,
                spin,
                radius: ASTEROID_RADIUS,
                path,
            }
        })
        .collect()
}

fn make_asteroid_path<R: Rng>(rng: &mut R) -> [f32; ASTEROID_PATH_LEN] {
    std::array::from_fn(|_| rng.random_range(ASTEROID_PATH_MIN..ASTEROID_PATH_MAX))
}

fn random_sign<R: Rng>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { -1.0 } else { 1.0 }
}

/// Advance one asteroid: drift with wrap, then spin.
///
/// The heading is corrected by a single subtraction of 2π when it overshoots;
/// a spin larger than 2π per tick would leave it unnormalized.
pub fn advance_asteroid(asteroid: &mut Asteroid, bounds: &WorldBounds) {
    asteroid.pos = wrap_position(asteroid.pos, asteroid.vel, bounds);

    let mut dir = asteroid.dir + asteroid.spin;
    if dir > std::f32::consts::TAU {
        dir -= std::f32::consts::TAU;
    }
    asteroid.dir = dir;
}

/// Advance every asteroid independently
pub fn advance_asteroids(asteroids: &mut [Asteroid], bounds: &WorldBounds) {
    for asteroid in asteroids.iter_mut() {
        advance_asteroid(asteroid, bounds);
    }
}
