//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! A future cloud-publishing adapter would implement the same trait.

use log::info;

use crate::app::events::{AppEvent, PRESSURE_CHANNEL};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | {}={:.1} | mode={} | valve={} | faults=0b{:08b} | tick={}",
                    PRESSURE_CHANNEL, t.psi, t.mode.label(), t.valve, t.fault_flags, t.tick,
                );
            }
            AppEvent::ValveChanged { from, to } => {
                info!("VALVE | {} -> {}", from, to);
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {} -> {}", from.label(), to.label());
            }
            AppEvent::SetpointChanged {
                mode,
                target_psi,
                hysteresis_psi,
            } => {
                info!(
                    "SETPOINT | {} target={:.1} hysteresis={:.1}",
                    mode.label(),
                    target_psi,
                    hysteresis_psi,
                );
            }
            AppEvent::FaultDetected(flags) => {
                info!("FAULT | detected, flags=0b{:08b}", flags);
            }
            AppEvent::FaultCleared => {
                info!("FAULT | all cleared");
            }
            AppEvent::Started(mode) => {
                info!("START | initial_mode={}", mode.label());
            }
        }
    }
}
