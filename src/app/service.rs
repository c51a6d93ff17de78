//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the setpoint store, the mode selector, and the
//! safety supervisor.  It exposes a clean, hardware-agnostic API.  All
//! I/O flows through port traits injected at call sites, making the
//! entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!                 │         AppService          │
//! ActuatorPort ◀──│  Setpoints · Selector ·     │
//!                 │  Safety · Hysteresis        │
//!                 └────────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::SystemConfig;
use crate::control::hysteresis::{decide, ValveState};
use crate::control::selector::ModeSelector;
use crate::control::setpoints::{Mode, SetpointStore};
use crate::safety::SafetySupervisor;

use super::commands::AppCommand;
use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    store: SetpointStore,
    selector: ModeSelector,
    safety: SafetySupervisor,
    /// Valve state commanded on the most recent tick.
    valve: ValveState,
    /// Pressure from the most recent tick (held last-known-good when the
    /// sample was implausible).
    current_psi: f32,
    prev_faults: u8,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch hardware — call [`start`](Self::start) next to
    /// put the valves in a known state.
    pub fn new(config: &SystemConfig) -> Self {
        let store = SetpointStore::new(config.low_profile, config.high_profile, config.initial_mode);
        Self {
            store,
            selector: ModeSelector::new(config.button_quiet_window_ms),
            safety: SafetySupervisor::new(config),
            valve: ValveState::Idle,
            current_psi: 0.0,
            prev_faults: 0,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// De-assert both valve outputs and announce the initial mode.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.valves_off();
        sink.emit(&AppEvent::Started(self.store.mode()));
        info!("AppService started, mode={}", self.store.mode().label());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: sense → select mode → safety →
    /// decide → actuate.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Read the pressure transducer via SensorPort.
        let snapshot = hw.read_pressure();
        self.current_psi = snapshot.psi;

        // 2. Poll the setpoint buttons (edge-detected, time-debounced).
        let buttons = hw.read_buttons();
        if let Some(mode) = self.selector.poll(now_ms, buttons) {
            self.select_mode(mode, sink);
        }

        // 3. Safety evaluation.
        let faults = self.safety.evaluate(snapshot.valid);
        if faults != 0 && self.prev_faults == 0 {
            warn!("Safety fault! flags=0b{:08b}", faults);
            sink.emit(&AppEvent::FaultDetected(faults));
        } else if faults == 0 && self.prev_faults != 0 {
            sink.emit(&AppEvent::FaultCleared);
        }
        self.prev_faults = faults;

        // 4. Hysteresis decision — a pure function of this cycle's
        //    pressure and the active profile.  Faults force Idle.
        let profile = self.store.active_profile();
        let decision = if faults != 0 {
            ValveState::Idle
        } else {
            decide(snapshot.psi, profile.target_psi, profile.hysteresis_psi)
        };

        // 5. Apply via ActuatorPort (off-before-on ordering inside).
        hw.apply_valves(decision);

        // 6. Emit a delta event if the commanded state moved.
        if decision != self.valve {
            sink.emit(&AppEvent::ValveChanged {
                from: self.valve,
                to: decision,
            });
            self.valve = decision;
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command (from the remote channel or console).
    ///
    /// Validation lives in the setpoint store; a rejected command
    /// returns the typed error and mutates nothing.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        sink: &mut impl EventSink,
    ) -> crate::error::Result<()> {
        match cmd {
            AppCommand::SetTarget { mode, value } => {
                self.store.set_target(mode, value)?;
                let p = self.store.profile(mode);
                sink.emit(&AppEvent::SetpointChanged {
                    mode,
                    target_psi: p.target_psi,
                    hysteresis_psi: p.hysteresis_psi,
                });
                info!("Setpoint {} target := {:.1} PSI", mode.label(), value);
            }
            AppCommand::SetHysteresis { mode, value } => {
                self.store.set_hysteresis(mode, value)?;
                let p = self.store.profile(mode);
                sink.emit(&AppEvent::SetpointChanged {
                    mode,
                    target_psi: p.target_psi,
                    hysteresis_psi: p.hysteresis_psi,
                });
                info!("Setpoint {} hysteresis := {:.1} PSI", mode.label(), value);
            }
            AppCommand::SetMode(mode) => {
                self.select_mode(mode, sink);
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current state.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            psi: self.current_psi,
            mode: self.store.mode(),
            valve: self.valve,
            fault_flags: self.safety.faults(),
            tick: self.tick_count,
        }
    }

    /// Pressure from the most recent tick, PSI.
    pub fn current_pressure(&self) -> f32 {
        self.current_psi
    }

    /// Currently active setpoint mode.
    pub fn mode(&self) -> Mode {
        self.store.mode()
    }

    /// Valve state commanded on the most recent tick.
    pub fn valve(&self) -> ValveState {
        self.valve
    }

    /// Current active fault bitmask (0 = no faults).
    pub fn fault_flags(&self) -> u8 {
        self.safety.faults()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Read access to the setpoint store (remote read-back, tests).
    pub fn setpoints(&self) -> &SetpointStore {
        &self.store
    }

    // ── Internal ──────────────────────────────────────────────

    fn select_mode(&mut self, mode: Mode, sink: &mut impl EventSink) {
        let prev = self.store.mode();
        if mode == prev {
            return;
        }
        self.store.set_mode(mode);
        sink.emit(&AppEvent::ModeChanged { from: prev, to: mode });
        info!("Mode {} -> {}", prev.label(), mode.label());
    }
}
