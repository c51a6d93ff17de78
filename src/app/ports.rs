//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensor, valves, display, event sinks) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.

use core::fmt::Write as _;

use heapless::String;

use crate::control::hysteresis::ValveState;
use crate::control::setpoints::Mode;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Point-in-time pressure reading handed across the port boundary.
#[derive(Debug, Clone, Copy)]
pub struct SensorSnapshot {
    /// Raw ADC counts (0..=4095 when valid).
    pub raw: u16,
    /// Engineering-unit pressure.  When `valid` is false this is the
    /// held last-known-good value, not a fresh conversion.
    pub psi: f32,
    /// Whether the raw sample was plausible this cycle.
    pub valid: bool,
}

/// Current levels of the two setpoint buttons, already converted from
/// active-low GPIO levels (`true` = pressed).
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonLevels {
    pub select_low: bool,
    pub select_high: bool,
}

/// Read-side port: the domain calls this to obtain inputs.
pub trait SensorPort {
    /// Sample the pressure transducer.
    fn read_pressure(&mut self) -> SensorSnapshot;

    /// Poll both setpoint buttons.
    fn read_buttons(&mut self) -> ButtonLevels;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the valves.
///
/// Implementations MUST guarantee that the inflate and deflate outputs
/// are never asserted simultaneously, even transiently — the off output
/// is written before the on output within a single `apply_valves` call.
pub trait ActuatorPort {
    /// Drive the solenoids to the given state.
    fn apply_valves(&mut self, state: ValveState);

    /// De-assert both outputs immediately (startup / fault path).
    fn valves_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → panel)
// ───────────────────────────────────────────────────────────────

/// Full-frame redraw, once per control cycle.  The display is a pure
/// consumer; nothing it does feeds back into the control decision.
pub trait DisplayPort {
    fn render(&mut self, frame: &DisplayFrame);
}

/// Two-line frame shown on the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFrame {
    pub line_pressure: String<32>,
    pub line_mode: String<32>,
}

impl DisplayFrame {
    /// Compose the frame text: pressure with one decimal digit and the
    /// active mode label.
    pub fn compose(psi: f32, mode: Mode) -> Self {
        let mut line_pressure = String::new();
        let mut line_mode = String::new();
        // 32 bytes holds the longest line for any in-range pressure;
        // an overflowing write! errors and leaves the line short.
        let _ = write!(line_pressure, "Tire Pressure: {psi:.1} PSI");
        let _ = write!(line_mode, "Active Setpoint: {}", mode.label());
        Self {
            line_pressure,
            line_mode,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, cloud
/// publish, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
