//! Mock hardware adapter for integration tests.
//!
//! Records every valve command so tests can assert on the full command
//! history without touching real GPIO registers, and lets tests inject
//! pressure samples and button levels per tick.

use pressurepro::app::events::AppEvent;
use pressurepro::app::ports::{
    ActuatorPort, ButtonLevels, DisplayFrame, DisplayPort, EventSink, SensorPort, SensorSnapshot,
};
use pressurepro::control::hysteresis::ValveState;
use pressurepro::sensors::pressure::{PSI_MAX, RAW_MAX};

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Pressure fed to the next read, PSI.
    pub psi: f32,
    /// Whether the next sample reads as plausible.
    pub sample_valid: bool,
    /// Button levels fed to the next poll.
    pub buttons: ButtonLevels,
    /// Every valve state applied, in order.
    pub valve_calls: Vec<ValveState>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            psi: 0.0,
            sample_valid: true,
            buttons: ButtonLevels::default(),
            valve_calls: Vec::new(),
        }
    }

    pub fn last_valve(&self) -> Option<ValveState> {
        self.valve_calls.last().copied()
    }

    pub fn press_select_high(&mut self) {
        self.buttons = ButtonLevels {
            select_low: false,
            select_high: true,
        };
    }

    pub fn press_select_low(&mut self) {
        self.buttons = ButtonLevels {
            select_low: true,
            select_high: false,
        };
    }

    pub fn release_buttons(&mut self) {
        self.buttons = ButtonLevels::default();
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_pressure(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            raw: (self.psi / PSI_MAX * RAW_MAX) as u16,
            psi: self.psi,
            valid: self.sample_valid,
        }
    }

    fn read_buttons(&mut self) -> ButtonLevels {
        self.buttons
    }
}

impl ActuatorPort for MockHardware {
    fn apply_valves(&mut self, state: ValveState) {
        self.valve_calls.push(state);
    }

    fn valves_off(&mut self) {
        self.valve_calls.push(ValveState::Idle);
    }
}

// ── MockDisplay ───────────────────────────────────────────────

pub struct MockDisplay {
    pub frames: Vec<DisplayFrame>,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for MockDisplay {
    fn render(&mut self, frame: &DisplayFrame) {
        self.frames.push(frame.clone());
    }
}

// ── LogSink ───────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
