//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to serial, publish to the
//! cloud channel, etc.

use crate::control::hysteresis::ValveState;
use crate::control::setpoints::Mode;

/// Channel name under which pressure telemetry is published.
pub const PRESSURE_CHANNEL: &str = "pressure";

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),

    /// The commanded valve state changed.
    ValveChanged { from: ValveState, to: ValveState },

    /// The active setpoint profile changed.
    ModeChanged { from: Mode, to: Mode },

    /// A profile's target or hysteresis was replaced.
    SetpointChanged {
        mode: Mode,
        target_psi: f32,
        hysteresis_psi: f32,
    },

    /// One or more safety faults were raised.
    FaultDetected(u8),

    /// All safety faults have been cleared.
    FaultCleared,

    /// The application service has started (carries initial mode).
    Started(Mode),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub psi: f32,
    pub mode: Mode,
    pub valve: ValveState,
    pub fault_flags: u8,
    pub tick: u64,
}
