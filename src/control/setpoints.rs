//! Setpoint store — the long-lived configuration state of the controller.
//!
//! Two named profiles (LOW, HIGH), each with a target and a hysteresis
//! margin, plus the currently active mode.  All mutation goes through
//! validated setters: a rejected write returns a typed error and leaves
//! the prior value untouched.  Values are validated here, not clamped —
//! a remote channel must never be able to inject `NaN` or a negative
//! hysteresis into the control loop.

use serde::{Deserialize, Serialize};

use crate::error::SetpointError;

// ───────────────────────────────────────────────────────────────
// Mode
// ───────────────────────────────────────────────────────────────

/// Which setpoint profile is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Low-pressure profile (default at boot).
    #[default]
    Low,
    /// High-pressure profile.
    High,
}

impl Mode {
    /// Numeric index of the mode (0 = LOW, 1 = HIGH), also used as the
    /// remote success status for `set-mode`.
    pub const fn index(self) -> i32 {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    /// Parse a mode argument: `"low"`/`"high"` (case-insensitive) or the
    /// numeric selectors `"0"`/`"1"`.  Anything else is rejected — no
    /// permissive fallback.
    pub fn parse(arg: &str) -> Option<Self> {
        let arg = arg.trim();
        if arg.eq_ignore_ascii_case("low") || arg == "0" {
            Some(Self::Low)
        } else if arg.eq_ignore_ascii_case("high") || arg == "1" {
            Some(Self::High)
        } else {
            None
        }
    }

    /// Display label ("LOW"/"HIGH") used by the display renderer.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::High => "HIGH",
        }
    }
}

impl core::str::FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}

// ───────────────────────────────────────────────────────────────
// SetpointProfile
// ───────────────────────────────────────────────────────────────

/// One named setpoint profile.
///
/// Invariants (enforced by [`SetpointStore`]): `target_psi > 0`,
/// `hysteresis_psi >= 0`, both finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetpointProfile {
    /// Desired pressure in PSI.
    pub target_psi: f32,
    /// Dead-band half-width in PSI.  Zero is permitted (pure threshold).
    pub hysteresis_psi: f32,
}

// ───────────────────────────────────────────────────────────────
// SetpointStore
// ───────────────────────────────────────────────────────────────

/// Owns both profiles and the active mode.  Lives for the process
/// lifetime inside the [`AppService`](crate::app::service::AppService);
/// nothing is persisted — defaults return on every boot.
#[derive(Debug, Clone)]
pub struct SetpointStore {
    low: SetpointProfile,
    high: SetpointProfile,
    mode: Mode,
}

impl SetpointStore {
    pub fn new(low: SetpointProfile, high: SetpointProfile, mode: Mode) -> Self {
        Self { low, high, mode }
    }

    /// Replace a profile's target.  Rejects non-positive and non-finite
    /// values, leaving the prior target unchanged.
    pub fn set_target(&mut self, mode: Mode, value: f32) -> Result<(), SetpointError> {
        if !value.is_finite() {
            return Err(SetpointError::NotFinite);
        }
        if value <= 0.0 {
            return Err(SetpointError::NonPositiveTarget);
        }
        self.profile_mut(mode).target_psi = value;
        Ok(())
    }

    /// Replace a profile's hysteresis.  Zero is valid; negatives and
    /// non-finite values are rejected.
    pub fn set_hysteresis(&mut self, mode: Mode, value: f32) -> Result<(), SetpointError> {
        if !value.is_finite() {
            return Err(SetpointError::NotFinite);
        }
        if value < 0.0 {
            return Err(SetpointError::NegativeHysteresis);
        }
        self.profile_mut(mode).hysteresis_psi = value;
        Ok(())
    }

    /// Select the active mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Currently active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The profile a given mode selects.
    pub fn profile(&self, mode: Mode) -> SetpointProfile {
        match mode {
            Mode::Low => self.low,
            Mode::High => self.high,
        }
    }

    /// The profile currently in effect.
    pub fn active_profile(&self) -> SetpointProfile {
        self.profile(self.mode)
    }

    fn profile_mut(&mut self, mode: Mode) -> &mut SetpointProfile {
        match mode {
            Mode::Low => &mut self.low,
            Mode::High => &mut self.high,
        }
    }
}
