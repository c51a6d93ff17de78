//! Console display adapter.
//!
//! Implements [`DisplayPort`] by rendering the two-line frame to the
//! serial log.  The frame composition (text, one-decimal formatting,
//! mode label) lives in [`DisplayFrame`](crate::app::ports::DisplayFrame);
//! an OLED panel driver would bind the same port and draw the identical
//! frame.

use log::info;

use crate::app::ports::{DisplayFrame, DisplayPort};

pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for ConsoleDisplay {
    fn render(&mut self, frame: &DisplayFrame) {
        info!("DISPLAY | {} | {}", frame.line_pressure, frame.line_mode);
    }
}
