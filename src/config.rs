//! System configuration parameters
//!
//! All tunable parameters for the PressurePro controller.  There is no
//! persistence: every boot starts from these defaults, and runtime
//! changes (remote commands, buttons) live only in RAM.

use serde::{Deserialize, Serialize};

use crate::control::setpoints::{Mode, SetpointProfile};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Setpoints ---
    /// Low-pressure profile (target + hysteresis, PSI)
    pub low_profile: SetpointProfile,
    /// High-pressure profile (target + hysteresis, PSI)
    pub high_profile: SetpointProfile,
    /// Profile selected at boot
    pub initial_mode: Mode,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Telemetry publish interval (milliseconds)
    pub telemetry_interval_ms: u32,
    /// Button quiet window after an accepted press (milliseconds)
    pub button_quiet_window_ms: u32,

    // --- Safety ---
    /// Consecutive implausible ADC samples before the stale-sensor
    /// fault latches and the valves are forced idle
    pub sensor_stale_threshold: u8,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Setpoints
            low_profile: SetpointProfile {
                target_psi: 25.0,
                hysteresis_psi: 2.0,
            },
            high_profile: SetpointProfile {
                target_psi: 100.0,
                hysteresis_psi: 2.0,
            },
            initial_mode: Mode::Low,

            // Timing
            control_loop_interval_ms: 1000,      // 1 Hz
            telemetry_interval_ms: 21_600_000,   // 6 h
            button_quiet_window_ms: 200,

            // Safety
            sensor_stale_threshold: 5,
        }
    }
}
