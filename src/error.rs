//! Configuration error types
//!
//! The simulation itself never fails; only loading and validating a
//! [`GameConfig`](crate::GameConfig) can.

use std::fmt;

/// Why a configuration could not be used
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The document was not valid JSON for a config
    Parse(String),
    /// Config file could not be read
    Io(String),
    /// World extent must be finite and strictly positive
    NonPositiveBounds { width: f32, height: f32 },
    /// World no wider than the largest single-tick step, so wrapping could
    /// leave a coordinate negative
    WorldTooSmall { width: f32, height: f32, min: f32 },
    /// Tick rate too low to give a fire cooldown of at least one tick
    TickRateTooLow { fps: u32, min: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid config: {msg}"),
            Self::Io(msg) => write!(f, "could not read config: {msg}"),
            Self::NonPositiveBounds { width, height } => {
                write!(f, "world bounds must be positive, got {width}x{height}")
            }
            Self::WorldTooSmall { width, height, min } => {
                write!(f, "world {width}x{height} must be larger than {min} on each axis")
            }
            Self::TickRateTooLow { fps, min } => {
                write!(f, "tick rate {fps} is below the minimum of {min}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
