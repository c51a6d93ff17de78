//! Safety supervisor.
//!
//! Runs **every tick before the valve decision** and accumulates a fault
//! bitmask.  While any fault is latched, the service overrides the
//! hysteresis decision and forces both valves off.
//!
//! ## Fault lifecycle
//!
//! 1. A condition triggers a fault (e.g. the pressure transducer has
//!    returned implausible samples for too many consecutive reads).
//! 2. The supervisor sets the corresponding bit in the mask and logs it.
//! 3. Each tick the supervisor re-evaluates; when the condition clears,
//!    the bit is unset and the clearing is logged.
//! 4. Control resumes automatically once `faults == 0`.
//!
//! The bitmask form supports multiple simultaneous faults: the valves
//! stay idle until *every* fault has cleared.

use log::{error, info};

use crate::config::SystemConfig;
use crate::error::SafetyFault;

/// Safety supervisor.
pub struct SafetySupervisor {
    /// Latched fault bitmask.
    faults: u8,
    /// Consecutive implausible sensor samples before SensorStale latches.
    stale_threshold: u8,
    /// Current run of consecutive bad samples.
    bad_sample_streak: u8,
}

impl SafetySupervisor {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            faults: 0,
            stale_threshold: config.sensor_stale_threshold,
            bad_sample_streak: 0,
        }
    }

    /// Evaluate all safety conditions for this tick.
    /// `sample_valid` is whether the pressure sensor returned a plausible
    /// raw sample (as opposed to a held last-known-good value).
    /// Returns the updated fault bitmask.
    pub fn evaluate(&mut self, sample_valid: bool) -> u8 {
        if sample_valid {
            self.bad_sample_streak = 0;
        } else {
            self.bad_sample_streak = self.bad_sample_streak.saturating_add(1);
        }

        self.eval_fault(
            SafetyFault::SensorStale,
            self.bad_sample_streak >= self.stale_threshold,
        );

        self.faults
    }

    /// Current fault bitmask.
    pub fn faults(&self) -> u8 {
        self.faults
    }

    /// True if **any** fault is active.
    pub fn has_faults(&self) -> bool {
        self.faults != 0
    }

    /// Check if a specific fault is active.
    pub fn has_fault(&self, fault: SafetyFault) -> bool {
        self.faults & fault.mask() != 0
    }

    // ── Internal ──────────────────────────────────────────────────

    /// Set or clear a fault bit based on a boolean condition.
    fn eval_fault(&mut self, fault: SafetyFault, condition: bool) {
        if condition {
            if self.faults & fault.mask() == 0 {
                error!("SAFETY FAULT SET: {fault}");
            }
            self.faults |= fault.mask();
        } else {
            if self.faults & fault.mask() != 0 {
                info!("SAFETY FAULT CLEARED: {fault}");
            }
            self.faults &= !fault.mask();
        }
    }
}
