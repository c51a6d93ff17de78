//! GPIO / peripheral pin assignments for the PressurePro main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Valve outputs (solenoid low-side MOSFET drivers, active HIGH)
// ---------------------------------------------------------------------------

/// Digital output: energises the inflation solenoid (compressor line).
pub const INFLATE_VALVE_GPIO: i32 = 2;
/// Digital output: energises the deflation solenoid (vent line).
/// Must never be HIGH while the inflation valve is HIGH.
pub const DEFLATE_VALVE_GPIO: i32 = 3;

// ---------------------------------------------------------------------------
// Pressure transducer — Analog (ADC1)
// ---------------------------------------------------------------------------

/// 0–150 PSI transducer, ratiometric analog output via resistive divider.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3), 12-bit full scale.
pub const PRESSURE_ADC_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Setpoint select buttons (momentary, active-low with pull-ups)
// ---------------------------------------------------------------------------

/// Selects the HIGH setpoint profile when pressed.  LOW = pressed.
pub const SELECT_HIGH_BTN_GPIO: i32 = 6;
/// Selects the LOW setpoint profile when pressed.  LOW = pressed.
pub const SELECT_LOW_BTN_GPIO: i32 = 7;
