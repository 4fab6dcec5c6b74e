//! Configuration module for stepper-rig.
//!
//! Provides types for loading and validating rig and axis configurations
//! from TOML files (with `std` feature) or pre-parsed data. All values have
//! defaults matching the reference rig, so configuration is optional.

mod axis;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::AxisConfig;
pub use system::{AxesConfig, DemoConfig, RigConfig, TargetConfig, DEFAULT_STEPS_PER_REVOLUTION};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Rpm, Steps};
