// src/config.rs

//! Defines the configuration structures for the animation.
//!
//! Nothing here is read from disk or the environment: the program has no
//! configuration surface, so `CONFIG` always holds the defaults below. The
//! structs still derive `Serialize`/`Deserialize` so the effective settings
//! can be logged at startup.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Global, read-only configuration.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Represents the complete configuration for the animation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Fractal evaluation settings.
    pub render: RenderConfig,
    /// Pan/zoom timing settings.
    pub animation: AnimationConfig,
}

// --- Render Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Iteration budget per cell.
    pub max_iterations: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            max_iterations: 500,
        }
    }
}

// --- Animation Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Divisor applied to the millisecond clock before taking its sine.
    /// One full pan/zoom cycle lasts `2π` times this value.
    pub phase_period_ms: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            phase_period_ms: 2500.0,
        }
    }
}
