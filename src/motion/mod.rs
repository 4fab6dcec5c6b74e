//! Motion module for stepper-rig.
//!
//! Provides single-axis and synchronized multi-axis relative moves with
//! per-step cooperative cancellation.

mod engine;

pub use engine::{move_all, move_one, MoveOutcome, MoveRequest};
