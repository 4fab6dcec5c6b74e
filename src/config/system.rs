//! Rig configuration - root configuration structure.

use serde::Deserialize;

use super::axis::AxisConfig;
use super::units::{Rpm, Steps};

/// Full-step count of a 28BYJ-48 geared stepper.
pub const DEFAULT_STEPS_PER_REVOLUTION: u32 = 2048;

/// Root configuration structure from TOML.
///
/// `RigConfig::default()` reproduces the rig's compiled-in constants, so a
/// configuration file is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Steps per full output-shaft revolution. Also the demo sweep magnitude.
    pub steps_per_revolution: u32,

    /// Speed applied to every axis at startup, in RPM.
    pub initial_speed_rpm: Rpm,

    /// The three axes, in console order.
    pub axes: AxesConfig,

    /// Demo sweep settings.
    pub demo: DemoConfig,

    /// TARGET macro settings.
    pub target: TargetConfig,
}

/// The three named axis sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    /// Axis A.
    pub a: AxisConfig,
    /// Axis B.
    pub b: AxisConfig,
    /// Axis C.
    pub c: AxisConfig,
}

/// Demo sweep settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Pause between sweep segments, in milliseconds.
    pub pause_ms: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { pause_ms: 250 }
    }
}

/// TARGET macro settings: retreat axis C, pause, return.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Retreat distance in physical steps on axis C.
    pub retreat_steps: i64,

    /// Pause between retreat and return, in milliseconds.
    pub pause_ms: u32,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            retreat_steps: 150,
            pause_ms: 1000,
        }
    }
}

impl RigConfig {
    /// Steps for one full revolution, as a signed move magnitude.
    #[inline]
    pub fn full_revolution(&self) -> Steps {
        Steps::new(self.steps_per_revolution as i64)
    }

    /// TARGET retreat distance as a step count.
    #[inline]
    pub fn target_retreat(&self) -> Steps {
        Steps::new(self.target.retreat_steps)
    }
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            steps_per_revolution: DEFAULT_STEPS_PER_REVOLUTION,
            initial_speed_rpm: Rpm::new(12),
            axes: AxesConfig {
                // Axis A is wired with reversed coil polarity on the reference rig.
                a: AxisConfig::new("A", true),
                b: AxisConfig::new("B", false),
                c: AxisConfig::new("C", false),
            },
            demo: DemoConfig::default(),
            target: TargetConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_firmware_constants() {
        let config = RigConfig::default();
        assert_eq!(config.steps_per_revolution, 2048);
        assert_eq!(config.initial_speed_rpm, Rpm::new(12));
        assert!(config.axes.a.invert_direction);
        assert!(!config.axes.b.invert_direction);
        assert!(!config.axes.c.invert_direction);
        assert_eq!(config.demo.pause_ms, 250);
        assert_eq!(config.target.retreat_steps, 150);
        assert_eq!(config.target.pause_ms, 1000);
    }

    #[test]
    fn test_full_revolution() {
        let config = RigConfig::default();
        assert_eq!(config.full_revolution(), Steps::new(2048));
        assert_eq!(config.target_retreat(), Steps::new(150));
    }
}
