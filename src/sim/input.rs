//! Player input flags
//!
//! Event handlers write flags between ticks; a tick reads one consistent
//! [`InputState`] snapshot at its start.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// One of the four held controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputFlag {
    TurnLeft,
    TurnRight,
    Thrust,
    Fire,
}

impl InputFlag {
    /// Map a `KeyboardEvent.key` value to a control.
    ///
    /// Unrecognized keys map to nothing and are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::TurnLeft),
            "ArrowRight" => Some(Self::TurnRight),
            "ArrowUp" => Some(Self::Thrust),
            " " | "Spacebar" => Some(Self::Fire),
            _ if key.eq_ignore_ascii_case("a") => Some(Self::TurnLeft),
            _ if key.eq_ignore_ascii_case("s") => Some(Self::TurnRight),
            _ if key.eq_ignore_ascii_case("k") => Some(Self::Thrust),
            _ if key.eq_ignore_ascii_case("l") => Some(Self::Fire),
            _ => None,
        }
    }
}

/// Current state of every control (last writer wins)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

impl InputState {
    pub fn set(&mut self, flag: InputFlag, pressed: bool) {
        match flag {
            InputFlag::TurnLeft => self.turn_left = pressed,
            InputFlag::TurnRight => self.turn_right = pressed,
            InputFlag::Thrust => self.thrust = pressed,
            InputFlag::Fire => self.fire = pressed,
        }
    }

    /// Apply a key transition, ignoring keys with no binding
    pub fn apply_key(&mut self, key: &str, pressed: bool) -> bool {
        match InputFlag::from_key(key) {
            Some(flag) => {
                self.set(flag, pressed);
                true
            }
            None => false,
        }
    }
}

/// Input cell shared between event threads and the tick thread.
///
/// Writers and the per-tick snapshot are serialized by one lock, so no flag
/// changes while a tick is using it.
#[derive(Debug, Clone, Default)]
pub struct SharedInput {
    inner: Arc<Mutex<InputState>>,
}

impl SharedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, flag: InputFlag, pressed: bool) {
        let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        state.set(flag, pressed);
    }

    /// Copy of the flags as they stand right now
    pub fn snapshot(&self) -> InputState {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
