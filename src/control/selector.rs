//! Debounced mode selector for the two setpoint buttons.
//!
//! ## Hardware
//!
//! Two active-low momentary switches with pull-ups, polled once per
//! control tick.  No ISR: a 1 Hz poll is ample for a human pressing a
//! button.
//!
//! ## Debounce
//!
//! Edge-triggered with a monotonic-timestamp quiet window: after an
//! accepted press edge, further edges are ignored until `quiet_ms` has
//! elapsed.  The control loop never sleeps for debounce — a stall here
//! would delay valve re-evaluation for the entire window.
//!
//! When both buttons read pressed in the same poll, Select-Low wins.
//! That tie-break is a documented rule, not an accident of poll order.

use crate::app::ports::ButtonLevels;
use crate::control::setpoints::Mode;

/// Edge-detecting, time-debounced selector.
pub struct ModeSelector {
    quiet_ms: u32,
    last_accept_ms: u32,
    /// Whether an edge has ever been accepted (so tick 0 presses work).
    armed: bool,
    prev_low: bool,
    prev_high: bool,
}

impl ModeSelector {
    pub fn new(quiet_ms: u32) -> Self {
        Self {
            quiet_ms,
            last_accept_ms: 0,
            armed: true,
            prev_low: false,
            prev_high: false,
        }
    }

    /// Poll both button levels.  Returns the mode to select if a press
    /// edge was accepted this cycle.
    ///
    /// `now_ms` is monotonic milliseconds since boot; wrap-around is
    /// handled with `wrapping_sub`.
    pub fn poll(&mut self, now_ms: u32, levels: ButtonLevels) -> Option<Mode> {
        let low_edge = levels.select_low && !self.prev_low;
        let high_edge = levels.select_high && !self.prev_high;
        self.prev_low = levels.select_low;
        self.prev_high = levels.select_high;

        if !self.armed && now_ms.wrapping_sub(self.last_accept_ms) < self.quiet_ms {
            return None;
        }
        self.armed = true;

        // Tie-break: Select-Low has priority over Select-High.
        let selected = if low_edge {
            Some(Mode::Low)
        } else if high_edge {
            Some(Mode::High)
        } else {
            None
        };

        if selected.is_some() {
            self.last_accept_ms = now_ms;
            self.armed = false;
        }
        selected
    }
}
