//! Per-axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

/// Configuration for one stepper axis.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    #[serde(default = "default_name")]
    pub name: String<32>,

    /// Invert the logical direction to match the physical coil wiring.
    ///
    /// When true the axis's direction sign is -1: every requested step count
    /// is negated before reaching the drive, so all callers keep reasoning in
    /// a single logical direction convention.
    #[serde(default)]
    pub invert_direction: bool,
}

fn default_name() -> String<32> {
    String::try_from("axis").unwrap_or_default()
}

impl AxisConfig {
    /// Create an axis configuration with an explicit polarity.
    pub fn new(name: &str, invert_direction: bool) -> Self {
        Self {
            name: String::try_from(name).unwrap_or_default(),
            invert_direction,
        }
    }

    /// Direction sign derived from the wiring polarity (+1 or -1).
    #[inline]
    pub const fn direction_sign(&self) -> i8 {
        if self.invert_direction {
            -1
        } else {
            1
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            invert_direction: false,
        }
    }
}
