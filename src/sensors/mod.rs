//! Sensor subsystem.
//!
//! The only sensor in this system is the pressure transducer; its driver
//! produces a [`SensorSnapshot`](crate::app::ports::SensorSnapshot) each
//! control tick.

pub mod pressure;
