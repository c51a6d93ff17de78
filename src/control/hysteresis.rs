//! Dead-band (bang-bang) valve comparator.
//!
//! The controller is deliberately a two-state bang-bang design with a
//! configurable hysteresis band, not PID.  Solenoid valves are binary
//! devices; a dead band around the target is what prevents them from
//! chattering on sensor noise near the setpoint.
//!
//! ```text
//!            inflate        idle          deflate
//!   ────────────────┤━━━━━━━━━━━━━━━━━━┝────────────▶ PSI
//!              target - hys    target    target + hys
//! ```
//!
//! [`decide`] is a pure function of its three inputs.  It holds no state
//! across calls, so it can never desynchronise from the setpoint store.

/// Commanded valve state for one control cycle.
///
/// Exactly one of the two solenoids may be energised at a time;
/// `Idle` means both are off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValveState {
    /// Both valves de-energised — pressure is inside the band.
    #[default]
    Idle,
    /// Inflation solenoid energised (compressor line open).
    Inflating,
    /// Deflation solenoid energised (vent line open).
    Deflating,
}

impl core::fmt::Display for ValveState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Inflating => write!(f, "INFLATING"),
            Self::Deflating => write!(f, "DEFLATING"),
        }
    }
}

/// Decide the valve state for the current cycle.
///
/// Strict comparisons: pressure exactly at `target - hysteresis`,
/// `target`, or `target + hysteresis` is inside the band and yields
/// `Idle`.  `hysteresis == 0` degenerates to a pure threshold
/// comparator, which the setpoint store permits.
pub fn decide(pressure_psi: f32, target_psi: f32, hysteresis_psi: f32) -> ValveState {
    if pressure_psi < target_psi - hysteresis_psi {
        ValveState::Inflating
    } else if pressure_psi > target_psi + hysteresis_psi {
        ValveState::Deflating
    } else {
        ValveState::Idle
    }
}
