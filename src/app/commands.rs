//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (remote
//! channel, serial console) that the
//! [`AppService`](super::service::AppService) validates and applies.
//! All commands are handled on the control-loop thread, so the setpoint
//! store needs no locking.

use crate::control::setpoints::Mode;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Replace a profile's target pressure (PSI, must be > 0).
    SetTarget { mode: Mode, value: f32 },

    /// Replace a profile's hysteresis margin (PSI, must be >= 0).
    SetHysteresis { mode: Mode, value: f32 },

    /// Select the active setpoint profile.
    SetMode(Mode),
}
