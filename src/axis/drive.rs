//! The single-step drive abstraction.

use crate::config::units::{Rpm, Steps};

/// Physical stepping direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Advance the phase sequence.
    Forward,
    /// Reverse the phase sequence.
    Backward,
}

impl Direction {
    /// Signed multiplier for this direction (+1 or -1).
    #[inline]
    pub const fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Direction of a signed step count. Zero counts as forward, matching
    /// `sign(n) = n >= 0 ? +1 : -1`.
    #[inline]
    pub const fn from_steps(steps: Steps) -> Self {
        if steps.value() >= 0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// One physical stepper axis's coil drive.
///
/// This is the opaque single-step primitive the motion engine is built on:
/// `step` advances exactly one physical step and blocks for the inter-step
/// interval implied by the current speed. There is no error channel - a
/// stalled or disconnected motor is undetectable at this layer.
pub trait CoilDrive {
    /// Advance one physical step in the given direction.
    fn step(&mut self, direction: Direction);

    /// Set the speed used by subsequent `step` calls.
    ///
    /// Callers must reject zero before it reaches this layer; the dispatcher's
    /// SPEED validation does so.
    fn set_speed(&mut self, speed: Rpm);

    /// Drive every control output to its de-energized level.
    ///
    /// Removes holding torque and current draw. Idempotent.
    fn release(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_steps() {
        assert_eq!(Direction::from_steps(Steps::new(10)), Direction::Forward);
        assert_eq!(Direction::from_steps(Steps::new(0)), Direction::Forward);
        assert_eq!(Direction::from_steps(Steps::new(-10)), Direction::Backward);
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Forward.sign(), 1);
        assert_eq!(Direction::Backward.sign(), -1);
    }
}
