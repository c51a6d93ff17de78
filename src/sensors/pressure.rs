//! Pressure transducer driver (0–150 PSI analog, 12-bit ADC).
//!
//! Applies the fixed linear scale `psi = raw * (PSI_MAX / RAW_MAX)` and
//! holds the last-known-good value when a sample is implausible, so the
//! control loop always has a pressure figure to work with.  Staleness of
//! that held value is the safety supervisor's concern, not this driver's.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the transducer channel via the oneshot API
//! (initialised by hw_init).  On host/test: reads from a static
//! `AtomicU16` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use crate::app::ports::SensorSnapshot;
use crate::error::SensorError;

/// Full-scale pressure in engineering units.
pub const PSI_MAX: f32 = 150.0;
/// Full-scale raw ADC counts (12-bit).
pub const RAW_MAX: f32 = 4095.0;

/// Raw ADC value injected on host targets via [`sim_set_pressure_adc`].
#[cfg(not(target_os = "espidf"))]
static SIM_PRESSURE_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_pressure_adc(raw: u16) {
    SIM_PRESSURE_ADC.store(raw, Ordering::Relaxed);
}

/// Convert raw ADC counts to PSI using the fixed linear scale.
pub fn raw_to_psi(raw: u16) -> f32 {
    f32::from(raw) * (PSI_MAX / RAW_MAX)
}

pub struct PressureSensor {
    /// Held when a sample is implausible.
    last_good_psi: f32,
    last_good_raw: u16,
    consecutive_bad: u32,
    _adc_gpio: i32,
}

impl PressureSensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self {
            last_good_psi: 0.0,
            last_good_raw: 0,
            consecutive_bad: 0,
            _adc_gpio: adc_gpio,
        }
    }

    /// Sample the transducer once.
    ///
    /// An out-of-range raw value (the ADC-failure sentinel, or anything
    /// above 12-bit full scale) yields a snapshot with `valid == false`
    /// carrying the held last-known-good pressure.
    pub fn read(&mut self) -> SensorSnapshot {
        let raw = self.read_adc();
        match Self::validate(raw) {
            Ok(raw) => {
                self.last_good_psi = raw_to_psi(raw);
                self.last_good_raw = raw;
                self.consecutive_bad = 0;
                SensorSnapshot {
                    raw,
                    psi: self.last_good_psi,
                    valid: true,
                }
            }
            Err(_) => {
                self.consecutive_bad = self.consecutive_bad.saturating_add(1);
                SensorSnapshot {
                    raw: self.last_good_raw,
                    psi: self.last_good_psi,
                    valid: false,
                }
            }
        }
    }

    /// Consecutive implausible samples since the last good one.
    pub fn consecutive_bad(&self) -> u32 {
        self.consecutive_bad
    }

    fn validate(raw: u16) -> Result<u16, SensorError> {
        if raw == crate::drivers::hw_init::ADC_READ_FAILED {
            Err(SensorError::AdcReadFailed)
        } else if f32::from(raw) > RAW_MAX {
            Err(SensorError::OutOfRange)
        } else {
            Ok(raw)
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        crate::drivers::hw_init::adc1_read(crate::drivers::hw_init::ADC1_CH_PRESSURE)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_PRESSURE_ADC.load(Ordering::Relaxed)
    }
}
