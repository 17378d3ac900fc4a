//! Ship kinematics: notched turning, bounded thrust, toroidal drift

use super::input::InputState;
use super::state::{Ship, WorldBounds};
use crate::consts::*;
use crate::{clamp_speed, forward_vector, wrap_position};

/// Advance the ship by one tick.
///
/// Turning is a fixed step per tick, so holding both turn keys cancels out.
/// There is no drag: velocity only changes while thrusting.
pub fn advance_ship(ship: &mut Ship, input: &InputState, bounds: &WorldBounds) {
    if input.turn_left {
        ship.dir -= TURN_STEP;
    }
    if input.turn_right {
        ship.dir += TURN_STEP;
    }

    if input.thrust {
        ship.vel = clamp_speed(ship.vel + forward_vector(ship.dir) * THRUST_ACCEL, MAX_SPEED);
    }

    ship.pos = wrap_position(ship.pos, ship.vel, bounds);
}
