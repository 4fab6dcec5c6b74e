//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::RigConfig;

/// Validate a rig configuration.
///
/// Checks:
/// - Initial speed is positive
/// - Steps per revolution is positive
/// - TARGET retreat distance is positive
pub fn validate_config(config: &RigConfig) -> Result<()> {
    if config.initial_speed_rpm.value() == 0 {
        return Err(Error::Config(ConfigError::InvalidSpeed(
            config.initial_speed_rpm.value(),
        )));
    }

    if config.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            config.steps_per_revolution,
        )));
    }

    if config.target.retreat_steps <= 0 {
        return Err(Error::Config(ConfigError::InvalidTargetRetreat(
            config.target.retreat_steps,
        )));
    }

    Ok(())
}
