//! Missile pool: rate-limited spawning and fuse-based expiry

use glam::Vec2;

use super::input::InputState;
use super::state::{Missile, WorldBounds};
use crate::consts::*;
use crate::{forward_vector, wrap_position};

/// Where a new missile leaves from and the velocity it inherits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Muzzle {
    pub pos: Vec2,
    /// Launcher velocity added to the muzzle speed
    pub vel: Vec2,
    pub dir: f32,
}

impl Muzzle {
    /// Missile leaving this muzzle with a full fuse
    pub fn launch(&self) -> Missile {
        Missile {
            pos: self.pos,
            vel: self.vel + forward_vector(self.dir) * MISSILE_SPEED,
            fuse: MISSILE_FUSE,
        }
    }
}

/// Step the reload counter.
///
/// A non-zero timer counts ticks since the last shot and returns to 0 once a
/// full `cooldown` window has elapsed, so shots land `cooldown` ticks apart.
pub fn step_fire_timer(timer: &mut u32, cooldown: u32) {
    if *timer != 0 {
        *timer += 1;
        if *timer > cooldown {
            *timer = 0;
        }
    }
}

/// Advance the missile pool by one tick.
///
/// Steps the reload counter, spawns at most one missile if fire is held and
/// the gun is ready, then burns one tick off every fuse. Missiles whose fuse
/// reaches zero are dropped in a single order-preserving pass; the rest move.
/// Returns true if a missile was spawned.
pub fn advance_missiles(
    missiles: &mut Vec<Missile>,
    fire_timer: &mut u32,
    cooldown: u32,
    muzzle: &Muzzle,
    input: &InputState,
    bounds: &WorldBounds,
) -> bool {
    step_fire_timer(fire_timer, cooldown);

    let fired = input.fire && *fire_timer == 0;
    if fired {
        missiles.push(muzzle.launch());
        *fire_timer = 1;
    }

    missiles.retain_mut(|missile| {
        debug_assert!(missile.fuse > 0, "missile kept with a spent fuse");
        missile.fuse -= 1;
        if missile.fuse == 0 {
            return false;
        }
        missile.pos = wrap_position(missile.pos, missile.vel, bounds);
        true
    });

    fired
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: u32 = 10;

    fn muzzle() -> Muzzle {
        Muzzle {
            pos: Vec2::new(400.0, 300.0),
            vel: Vec2::ZERO,
            dir: 0.0,
        }
    }

    fn fire() -> InputState {
        InputState {
            fire: true,
            ..Default::default()
        }
    }

    /// One pool step from the default muzzle in a default world
    fn step(missiles: &mut Vec<Missile>, timer: &mut u32, input: &InputState) -> bool {
        advance_missiles(missiles, timer, COOLDOWN, &muzzle(), input, &WorldBounds::default())
    }

    #[test]
    fn test_spawn_velocity_and_first_step() {
        let bounds = WorldBounds::default();
        let mut missiles = Vec::new();
        let mut timer = 0;
        let m = Muzzle {
            vel: Vec2::new(1.0, 2.0),
            ..muzzle()
        };

        assert!(advance_missiles(&mut missiles, &mut timer, COOLDOWN, &m, &fire(), &bounds));
        assert_eq!(timer, 1);
        assert_eq!(missiles.len(), 1);

        let missile = missiles[0];
        assert!((missile.vel.x - 1.0).abs() < 1e-5);
        assert!((missile.vel.y - (2.0 - 8.0)).abs() < 1e-5);
        // Spawned and stepped in the same tick
        assert_eq!(missile.fuse, MISSILE_FUSE - 1);
        assert!((missile.pos - Vec2::new(401.0, 294.0)).length() < 1e-3);
    }

    #[test]
    fn test_held_fire_is_rate_limited() {
        let mut missiles = Vec::new();
        let mut timer = 0;

        let spawn_ticks: Vec<u32> = (0..=20)
            .filter(|_| step(&mut missiles, &mut timer, &fire()))
            .collect();

        assert_eq!(spawn_ticks, vec![0, 10, 20]);
        assert_eq!(missiles.len(), 3);
        // Independent fuses, oldest first
        let fuses: Vec<u32> = missiles.iter().map(|m| m.fuse).collect();
        assert_eq!(fuses, vec![29, 39, 49]);
    }

    #[test]
    fn test_timer_runs_out_after_release() {
        let mut missiles = Vec::new();
        let mut timer = 0;

        step(&mut missiles, &mut timer, &fire());
        let idle = InputState::default();
        for _ in 0..COOLDOWN {
            step(&mut missiles, &mut timer, &idle);
        }
        assert_eq!(timer, 0);

        // Ready again: the next press fires immediately
        assert!(step(&mut missiles, &mut timer, &fire()));
    }

    #[test]
    fn test_release_does_not_reset_cooldown() {
        let mut missiles = Vec::new();
        let mut timer = 0;

        step(&mut missiles, &mut timer, &fire());
        step(&mut missiles, &mut timer, &InputState::default());
        // Tapping again mid-cooldown does nothing
        assert!(!step(&mut missiles, &mut timer, &fire()));
        assert_eq!(missiles.len(), 1);
    }

    #[test]
    fn test_fuse_expiry() {
        let mut missiles = Vec::new();
        let mut timer = 0;
        let idle = InputState::default();

        step(&mut missiles, &mut timer, &fire());
        let mut last = missiles[0].fuse;
        let mut ticks_alive = 1;
        while !missiles.is_empty() {
            step(&mut missiles, &mut timer, &idle);
            if let Some(m) = missiles.first() {
                assert_eq!(m.fuse, last - 1);
                last = m.fuse;
                ticks_alive += 1;
            }
        }
        assert_eq!(last, 1);
        assert_eq!(ticks_alive, MISSILE_FUSE - 1);
    }

    #[test]
    fn test_compaction_preserves_order() {
        let at = |x: f32, fuse: u32| Missile {
            pos: Vec2::new(x, 10.0),
            vel: Vec2::ZERO,
            fuse,
        };
        let mut missiles = vec![at(1.0, 5), at(2.0, 1), at(3.0, 7), at(4.0, 1), at(5.0, 2)];
        let mut timer = 0;

        step(&mut missiles, &mut timer, &InputState::default());

        let xs: Vec<f32> = missiles.iter().map(|m| m.pos.x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 5.0]);
        let fuses: Vec<u32> = missiles.iter().map(|m| m.fuse).collect();
        assert_eq!(fuses, vec![4, 6, 1]);
    }

    #[test]
    fn test_step_fire_timer_idle_stays_zero() {
        let mut timer = 0;
        step_fire_timer(&mut timer, COOLDOWN);
        assert_eq!(timer, 0);

        let mut timer = COOLDOWN;
        step_fire_timer(&mut timer, COOLDOWN);
        assert_eq!(timer, 0);
    }
}
