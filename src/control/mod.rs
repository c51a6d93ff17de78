//! Control core — pure decision logic, zero I/O.
//!
//! The hysteresis comparator, the setpoint store, and the debounced mode
//! selector live here.  None of these modules touch hardware; they are
//! exercised by the [`AppService`](crate::app::service::AppService) through
//! plain function calls and are fully testable on the host.

pub mod hysteresis;
pub mod selector;
pub mod setpoints;
