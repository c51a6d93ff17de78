//! Setpoint button pair — raw level reads.
//!
//! Active-low momentary switches with pull-ups, polled once per control
//! tick.  This driver only converts GPIO levels to pressed/not-pressed;
//! edge detection and debounce are the
//! [`ModeSelector`](crate::control::selector::ModeSelector)'s job.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the real GPIO levels via hw_init.
//! On host/test: reads static `AtomicBool`s for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

use crate::app::ports::ButtonLevels;

#[cfg(not(target_os = "espidf"))]
static SIM_SELECT_LOW: AtomicBool = AtomicBool::new(false);
#[cfg(not(target_os = "espidf"))]
static SIM_SELECT_HIGH: AtomicBool = AtomicBool::new(false);

/// Inject the Select-Low button state (`true` = pressed) on host targets.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_select_low(pressed: bool) {
    SIM_SELECT_LOW.store(pressed, Ordering::Relaxed);
}

/// Inject the Select-High button state (`true` = pressed) on host targets.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_select_high(pressed: bool) {
    SIM_SELECT_HIGH.store(pressed, Ordering::Relaxed);
}

pub struct ButtonPair;

impl ButtonPair {
    pub fn new() -> Self {
        Self
    }

    /// Poll both buttons.  Active-low: a pressed button reads LOW.
    #[cfg(target_os = "espidf")]
    pub fn read(&mut self) -> ButtonLevels {
        use crate::drivers::hw_init;
        use crate::pins;
        ButtonLevels {
            select_low: !hw_init::gpio_read(pins::SELECT_LOW_BTN_GPIO),
            select_high: !hw_init::gpio_read(pins::SELECT_HIGH_BTN_GPIO),
        }
    }

    /// Poll both buttons (host: sim-injected levels).
    #[cfg(not(target_os = "espidf"))]
    pub fn read(&mut self) -> ButtonLevels {
        ButtonLevels {
            select_low: SIM_SELECT_LOW.load(Ordering::Relaxed),
            select_high: SIM_SELECT_HIGH.load(Ordering::Relaxed),
        }
    }
}

impl Default for ButtonPair {
    fn default() -> Self {
        Self::new()
    }
}
