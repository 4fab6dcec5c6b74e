//! Error types for stepper-rig.
//!
//! Provides unified error handling across configuration loading and command
//! dispatch. Command failures never escape the control loop: the dispatcher
//! converts them into one-line `ERR` replies and stays ready for the next line.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-rig operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Command dispatch error
    Command(CommandError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid initial speed (must be > 0 RPM)
    InvalidSpeed(u32),
    /// Invalid steps per revolution (must be > 0)
    InvalidStepsPerRevolution(u32),
    /// Invalid TARGET retreat distance (must be > 0 steps)
    InvalidTargetRetreat(i64),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Command dispatch errors.
///
/// Every variant is local to one input line; the dispatcher reports it as a
/// single `ERR` reply and no state change occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Malformed or missing numeric argument, or malformed multi-token grouping
    BadArgument,
    /// TARGET requested while the rig is stopped
    Stopped,
    /// Verb not in the command table
    Unknown,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Command(e) => write!(f, "Command error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidSpeed(v) => {
                write!(f, "Invalid initial speed: {} RPM. Must be > 0", v)
            }
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidTargetRetreat(v) => {
                write!(f, "Invalid target retreat: {} steps. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::BadArgument => write!(f, "Malformed or missing argument"),
            CommandError::Stopped => write!(f, "Rig is stopped"),
            CommandError::Unknown => write!(f, "Unknown command"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}
