//! Axis abstraction for stepper-rig.
//!
//! Wraps each physical stepper behind an opaque single-step drive, a fixed
//! wiring-polarity sign, and a runtime-settable speed.

mod drive;
mod four_wire;
mod set;

pub use drive::{CoilDrive, Direction};
pub use four_wire::FourWireDrive;
pub use set::{Axis, AxisId, AxisSet};
