//! # stepper-rig
//!
//! Serial-console control core for a three-axis ULN2003 stepper rig with
//! embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Line-oriented console**: one verb per line, one reply line per command
//! - **embedded-hal 1.0**: uses `OutputPin` for coil outputs, `DelayNs` for timing
//! - **no_std compatible**: core library works without standard library
//! - **Configuration-driven**: axis wiring polarity and rig constants in TOML
//! - **Cooperative stop**: the run/stop flag is checked once per physical step
//! - **Synchronized moves**: round-robin multi-axis stepping with independent counts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_rig::{AxisSet, FourWireDrive, Rig, RigConfig};
//!
//! let config = RigConfig::default();
//! let axes = AxisSet::from_config(&config, drive_a, drive_b, drive_c);
//! let mut rig = Rig::new(axes, delay, &config);
//!
//! rig.banner(&mut serial)?;
//! loop {
//!     let line = poll_serial_line();
//!     rig.service(line.as_deref(), &mut serial)?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod axis;
pub mod command;
pub mod config;
pub mod error;
pub mod motion;
pub mod rig;
pub mod state;

// Re-exports for ergonomic API
pub use axis::{Axis, AxisId, AxisSet, CoilDrive, Direction, FourWireDrive};
pub use config::{validate_config, AxisConfig, RigConfig};
pub use error::{CommandError, Error, Result};
pub use motion::{MoveOutcome, MoveRequest};
pub use rig::Rig;
pub use state::RunState;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Rpm, Steps};
