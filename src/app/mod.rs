//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the PressurePro system:
//! the per-tick control cycle, setpoint mutation, and safety overrides.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
