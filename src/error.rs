//! Unified error types for the PressurePro firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! top-level control loop's error handling uniform.  All variants are `Copy`
//! so they pass through the safety supervisor and the remote dispatcher
//! without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor could not be read or returned out-of-range data.
    Sensor(SensorError),
    /// A setpoint mutation was rejected by validation.
    Setpoint(SetpointError),
    /// A remote command could not be dispatched.
    Command(CommandError),
    /// A safety interlock was violated.
    Safety(SafetyFault),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Setpoint(e) => write!(f, "setpoint: {e}"),
            Self::Command(e) => write!(f, "command: {e}"),
            Self::Safety(e) => write!(f, "safety: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// ADC read returned an error or timed out.
    AdcReadFailed,
    /// Reading is outside the physically plausible range.
    OutOfRange,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdcReadFailed => write!(f, "ADC read failed"),
            Self::OutOfRange => write!(f, "reading out of range"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Setpoint validation errors
// ---------------------------------------------------------------------------

/// Rejections from the setpoint store.  A rejected write leaves the prior
/// value untouched — there are no partial updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetpointError {
    /// Target must be strictly positive.
    NonPositiveTarget,
    /// Hysteresis must be zero or positive.
    NegativeHysteresis,
    /// NaN and infinities are never valid control parameters.
    NotFinite,
}

impl fmt::Display for SetpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTarget => write!(f, "target must be > 0"),
            Self::NegativeHysteresis => write!(f, "hysteresis must be >= 0"),
            Self::NotFinite => write!(f, "value must be finite"),
        }
    }
}

impl From<SetpointError> for Error {
    fn from(e: SetpointError) -> Self {
        Self::Setpoint(e)
    }
}

// ---------------------------------------------------------------------------
// Remote command errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Function name does not match any registered operation.
    UnknownFunction,
    /// Argument did not parse as a number.  Malformed input is rejected
    /// outright, never coerced to 0.
    MalformedNumber,
    /// Argument is not a recognised mode selector.
    InvalidMode,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFunction => write!(f, "unknown function"),
            Self::MalformedNumber => write!(f, "malformed numeric argument"),
            Self::InvalidMode => write!(f, "invalid mode argument"),
        }
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

// ---------------------------------------------------------------------------
// Safety faults
// ---------------------------------------------------------------------------

/// Safety faults force the valves to IDLE until the condition clears.  They
/// are accumulated in a bitfield by the safety supervisor so that multiple
/// simultaneous faults can be tracked and individually cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SafetyFault {
    /// Pressure sensor has returned implausible samples for too many
    /// consecutive reads; the held last-known-good value is stale.
    SensorStale = 0b0000_0001,
}

impl SafetyFault {
    /// Return the bitmask for this fault.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for SafetyFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensorStale => write!(f, "pressure reading stale"),
        }
    }
}

impl From<SafetyFault> for Error {
    fn from(e: SafetyFault) -> Self {
        Self::Safety(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
