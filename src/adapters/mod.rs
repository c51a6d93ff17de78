//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter           | Implements   | Connects to                  |
//! |-------------------|--------------|------------------------------|
//! | `hardware`        | SensorPort   | ESP32 ADC, GPIO              |
//! |                   | ActuatorPort | ESP32 GPIO (valves)          |
//! | `console_display` | DisplayPort  | Serial log panel rendering   |
//! | `log_sink`        | EventSink    | Serial log output            |
//! | `remote`          | —            | Named remote operations      |
//! | `time`            | —            | ESP32 system timer           |

pub mod console_display;
pub mod hardware;
pub mod log_sink;
pub mod remote;
pub mod time;
