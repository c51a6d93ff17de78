//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the pressure sensor, the button pair, and the valve driver,
//! exposing them through [`SensorPort`] and [`ActuatorPort`].  This is
//! the only module in the system that touches actual hardware.  On
//! non-espidf targets, the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::ports::{ActuatorPort, ButtonLevels, SensorPort, SensorSnapshot};
use crate::control::hysteresis::ValveState;
use crate::drivers::buttons::ButtonPair;
use crate::drivers::valves::ValveDriver;
use crate::sensors::pressure::PressureSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor: PressureSensor,
    buttons: ButtonPair,
    valves: ValveDriver,
}

impl HardwareAdapter {
    pub fn new(sensor: PressureSensor, buttons: ButtonPair, valves: ValveDriver) -> Self {
        Self {
            sensor,
            buttons,
            valves,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_pressure(&mut self) -> SensorSnapshot {
        self.sensor.read()
    }

    fn read_buttons(&mut self) -> ButtonLevels {
        self.buttons.read()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn apply_valves(&mut self, state: ValveState) {
        self.valves.apply(state);
    }

    fn valves_off(&mut self) {
        self.valves.all_off();
    }
}
