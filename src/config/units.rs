//! Unit types for physical quantities.
//!
//! Provides type-safe representations of step counts and rotational speed
//! to prevent unit confusion at compile time.

use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// A signed relative step count.
///
/// Every move in the rig is relative; no absolute shaft position exists
/// anywhere. Negative values denote the reverse logical direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Steps(pub i64);

impl Steps {
    /// A zero-length move.
    pub const ZERO: Self = Self(0);

    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw signed value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Magnitude of the move as an unsigned count.
    #[inline]
    pub const fn magnitude(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// True if this value contributes no motion.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Steps {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Rotational speed in revolutions per minute.
///
/// Zero is never a valid running speed; the SPEED command rejects it before
/// it can reach any drive (see the dispatcher's validation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Rpm(pub u32);

impl Rpm {
    /// Create a new Rpm value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_magnitude() {
        assert_eq!(Steps(-150).magnitude(), 150);
        assert_eq!(Steps(150).magnitude(), 150);
        assert_eq!(Steps::ZERO.magnitude(), 0);
        assert_eq!(Steps(i64::MIN).magnitude(), i64::MAX as u64 + 1);
    }

    #[test]
    fn test_steps_neg() {
        assert_eq!(-Steps(150), Steps(-150));
        assert_eq!(Steps(100) + Steps(-30), Steps(70));
        assert_eq!(Steps(100) - Steps(30), Steps(70));
    }
}
