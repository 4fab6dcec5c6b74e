//! Axis identity, wiring polarity, and the three-axis set.

use heapless::String;

use crate::config::units::{Rpm, Steps};
use crate::config::{AxisConfig, RigConfig};

use super::drive::{CoilDrive, Direction};

/// Identifies one of the rig's three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisId {
    /// Axis A.
    A,
    /// Axis B.
    B,
    /// Axis C.
    C,
}

impl AxisId {
    /// All axes in console order.
    pub const ALL: [AxisId; 3] = [AxisId::A, AxisId::B, AxisId::C];

    /// The axis letter as used in console replies.
    pub const fn as_str(self) -> &'static str {
        match self {
            AxisId::A => "A",
            AxisId::B => "B",
            AxisId::C => "C",
        }
    }
}

/// One logical stepper axis: a coil drive plus its fixed wiring polarity.
///
/// The direction sign is set once at configuration time and corrects for the
/// physical coil wiring; callers reason in logical direction and apply the
/// sign through [`Axis::signed`].
pub struct Axis<D: CoilDrive> {
    id: AxisId,
    name: String<32>,
    direction_sign: i8,
    drive: D,
}

impl<D: CoilDrive> Axis<D> {
    /// Create an axis from its configuration section.
    pub fn from_config(id: AxisId, config: &AxisConfig, drive: D) -> Self {
        Self {
            id,
            name: config.name.clone(),
            direction_sign: config.direction_sign(),
            drive,
        }
    }

    /// The axis identity.
    #[inline]
    pub fn id(&self) -> AxisId {
        self.id
    }

    /// The configured axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The wiring-polarity sign (+1 or -1).
    #[inline]
    pub fn direction_sign(&self) -> i8 {
        self.direction_sign
    }

    /// Apply the wiring-polarity sign to a logical step count.
    #[inline]
    pub fn signed(&self, steps: Steps) -> Steps {
        Steps::new(steps.value() * self.direction_sign as i64)
    }

    /// Advance one physical step.
    #[inline]
    pub fn step(&mut self, direction: Direction) {
        self.drive.step(direction);
    }

    /// Set the drive speed.
    #[inline]
    pub fn set_speed(&mut self, speed: Rpm) {
        self.drive.set_speed(speed);
    }

    /// De-energize this axis's coils.
    #[inline]
    pub fn release(&mut self) {
        self.drive.release();
    }

    /// Borrow the underlying drive.
    #[inline]
    pub fn drive(&self) -> &D {
        &self.drive
    }
}

/// The rig's three axes plus the coil release service.
pub struct AxisSet<D: CoilDrive> {
    a: Axis<D>,
    b: Axis<D>,
    c: Axis<D>,
}

impl<D: CoilDrive> AxisSet<D> {
    /// Build the axis set from configuration and three coil drives.
    pub fn from_config(config: &RigConfig, a: D, b: D, c: D) -> Self {
        Self {
            a: Axis::from_config(AxisId::A, &config.axes.a, a),
            b: Axis::from_config(AxisId::B, &config.axes.b, b),
            c: Axis::from_config(AxisId::C, &config.axes.c, c),
        }
    }

    /// Borrow an axis by id.
    pub fn axis(&self, id: AxisId) -> &Axis<D> {
        match id {
            AxisId::A => &self.a,
            AxisId::B => &self.b,
            AxisId::C => &self.c,
        }
    }

    /// Mutably borrow an axis by id.
    pub fn axis_mut(&mut self, id: AxisId) -> &mut Axis<D> {
        match id {
            AxisId::A => &mut self.a,
            AxisId::B => &mut self.b,
            AxisId::C => &mut self.c,
        }
    }

    /// De-energize every control output of every axis.
    ///
    /// The rig loses holding torque. Stateless and idempotent; called whenever
    /// motion is aborted mid-sequence.
    pub fn release_all(&mut self) {
        self.a.release();
        self.b.release();
        self.c.release();
    }

    /// Set the same speed on every axis.
    pub fn set_speed_all(&mut self, speed: Rpm) {
        self.a.set_speed(speed);
        self.b.set_speed(speed);
        self.c.set_speed(speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullDrive;

    impl CoilDrive for NullDrive {
        fn step(&mut self, _direction: Direction) {}
        fn set_speed(&mut self, _speed: Rpm) {}
        fn release(&mut self) {}
    }

    #[test]
    fn test_signed_applies_wiring_polarity() {
        let inverted = Axis::from_config(AxisId::A, &AxisConfig::new("A", true), NullDrive);
        assert_eq!(inverted.signed(Steps::new(100)), Steps::new(-100));
        assert_eq!(inverted.signed(Steps::new(-100)), Steps::new(100));

        let straight = Axis::from_config(AxisId::B, &AxisConfig::new("B", false), NullDrive);
        assert_eq!(straight.signed(Steps::new(100)), Steps::new(100));
    }

    #[test]
    fn test_axis_lookup() {
        let config = RigConfig::default();
        let axes = AxisSet::from_config(&config, NullDrive, NullDrive, NullDrive);

        assert_eq!(axes.axis(AxisId::A).id(), AxisId::A);
        assert_eq!(axes.axis(AxisId::A).direction_sign(), -1);
        assert_eq!(axes.axis(AxisId::B).direction_sign(), 1);
        assert_eq!(axes.axis(AxisId::C).direction_sign(), 1);
    }
}
