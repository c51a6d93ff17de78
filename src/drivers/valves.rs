//! Inflate/deflate solenoid valve driver.
//!
//! Two binary outputs drive the inflation (compressor line) and
//! deflation (vent line) solenoids.  Energising both at once is a
//! physically invalid command, so every [`apply`](ValveDriver::apply)
//! writes the "off" pin **before** the "on" pin — at no point between
//! the two GPIO writes are both outputs asserted.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real GPIOs via hw_init.
//! On host/test: hw_init journals every write for order assertions.

use crate::control::hysteresis::ValveState;
use crate::drivers::hw_init;
use crate::pins;

pub struct ValveDriver {
    state: ValveState,
}

impl ValveDriver {
    /// Construct with both solenoids de-asserted.
    pub fn new() -> Self {
        let mut driver = Self {
            state: ValveState::Idle,
        };
        driver.all_off();
        driver
    }

    /// Drive the solenoids to `state`.  Off pin first, always.
    pub fn apply(&mut self, state: ValveState) {
        match state {
            ValveState::Idle => {
                hw_init::gpio_write(pins::INFLATE_VALVE_GPIO, false);
                hw_init::gpio_write(pins::DEFLATE_VALVE_GPIO, false);
            }
            ValveState::Inflating => {
                hw_init::gpio_write(pins::DEFLATE_VALVE_GPIO, false);
                hw_init::gpio_write(pins::INFLATE_VALVE_GPIO, true);
            }
            ValveState::Deflating => {
                hw_init::gpio_write(pins::INFLATE_VALVE_GPIO, false);
                hw_init::gpio_write(pins::DEFLATE_VALVE_GPIO, true);
            }
        }
        self.state = state;
    }

    /// De-assert both outputs.
    pub fn all_off(&mut self) {
        self.apply(ValveState::Idle);
    }

    /// Most recently commanded state.
    pub fn state(&self) -> ValveState {
        self.state
    }
}

impl Default for ValveDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replay a GPIO journal and assert both valve pins are never high
    /// at the same time.  Returns the final pin levels.
    fn replay(journal: &[(i32, bool)]) -> (bool, bool) {
        let mut inflate = false;
        let mut deflate = false;
        for &(pin, level) in journal {
            if pin == pins::INFLATE_VALVE_GPIO {
                inflate = level;
            } else if pin == pins::DEFLATE_VALVE_GPIO {
                deflate = level;
            }
            assert!(
                !(inflate && deflate),
                "both solenoids asserted after write ({pin}, {level})"
            );
        }
        (inflate, deflate)
    }

    // The write journal is process-global, so the full transition matrix
    // is exercised in a single test.
    #[test]
    fn off_before_on_through_every_transition() {
        let _ = hw_init::sim_journal::take();

        let mut valves = ValveDriver::new();
        let states = [
            ValveState::Inflating,
            ValveState::Deflating, // direct opposite-direction switch
            ValveState::Idle,
            ValveState::Deflating,
            ValveState::Inflating,
            ValveState::Idle,
        ];
        for s in states {
            valves.apply(s);
            assert_eq!(valves.state(), s);
        }

        let journal = hw_init::sim_journal::take();
        let (inflate, deflate) = replay(&journal);
        assert!(!inflate && !deflate, "journal must end with both pins low");

        // new() must de-assert both pins before anything else.
        assert_eq!(journal[0], (pins::INFLATE_VALVE_GPIO, false));
        assert_eq!(journal[1], (pins::DEFLATE_VALVE_GPIO, false));
    }
}
