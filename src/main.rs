//! PressurePro Firmware — Main Entry Point
//!
//! Hexagonal architecture with event-driven execution.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │                                                            │
//! │  HardwareAdapter    LogEventSink    ConsoleDisplay         │
//! │  (Sensor+Actuator)  (EventSink)     (DisplayPort)          │
//! │  RemoteChannel      Esp32Time                              │
//! │  (named commands)   (monotonic ms)                         │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ─────────────────    │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │            AppService (pure logic)               │      │
//! │  │  Setpoints · Selector · Safety · Hysteresis      │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use pressurepro::adapters::console_display::ConsoleDisplay;
use pressurepro::adapters::hardware::HardwareAdapter;
use pressurepro::adapters::log_sink::LogEventSink;
use pressurepro::adapters::remote::RemoteChannel;
use pressurepro::adapters::time::Esp32TimeAdapter;
use pressurepro::app::events::AppEvent;
use pressurepro::app::ports::{DisplayFrame, DisplayPort, EventSink};
use pressurepro::app::service::AppService;
use pressurepro::config::SystemConfig;
use pressurepro::drivers::buttons::ButtonPair;
use pressurepro::drivers::valves::ValveDriver;
use pressurepro::drivers::{hw_init, hw_timer};
use pressurepro::events::{self, Event};
use pressurepro::pins;
use pressurepro::sensors::pressure::PressureSensor;

fn main() -> Result<()> {
    // ── 1. Platform bootstrap ─────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }
    #[cfg(not(target_os = "espidf"))]
    env_logger::init();

    info!("PressurePro v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // No persistence: every boot runs from defaults, and runtime
    // setpoint changes live only in RAM.
    let config = SystemConfig::default();
    hw_timer::start_timers(config.control_loop_interval_ms);

    // ── 3. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        PressureSensor::new(pins::PRESSURE_ADC_GPIO),
        ButtonPair::new(),
        ValveDriver::new(),
    );
    let mut log_sink = LogEventSink::new();
    let mut display = ConsoleDisplay::new();
    let mut remote = RemoteChannel::new();
    let time_adapter = Esp32TimeAdapter::new();

    // ── 4. Construct app service ──────────────────────────────
    let mut app = AppService::new(&config);
    app.start(&mut hw, &mut log_sink);

    info!("System ready. Entering event loop.");

    // ── 5. Event loop ─────────────────────────────────────────
    //
    // Telemetry is a tick divider: the first publish fires once a full
    // interval has elapsed after boot (the remote `pressure` variable
    // serves immediate queries).
    let telemetry_ticks =
        u64::from(config.telemetry_interval_ms / config.control_loop_interval_ms);
    let mut telemetry_counter: u64 = 0;

    loop {
        // Simulate the timer interrupt via sleep on non-espidf targets.
        // On real hardware, the esp_timer pushes ControlTick.
        #[cfg(not(target_os = "espidf"))]
        {
            std::thread::sleep(std::time::Duration::from_millis(
                u64::from(config.control_loop_interval_ms),
            ));
            events::push_event(Event::ControlTick);
        }

        events::drain_events(|event| match event {
            Event::ControlTick => {
                let now_ms = time_adapter.uptime_ms();
                app.tick(now_ms, &mut hw, &mut log_sink);

                // Display is a pure observer — full-frame redraw per cycle.
                let frame = DisplayFrame::compose(app.current_pressure(), app.mode());
                display.render(&frame);

                // Pick up any request whose CommandReceived signal was
                // lost to a full event queue.
                if remote.pending() > 0 {
                    remote.poll(&mut app, &mut log_sink);
                }

                telemetry_counter += 1;
                if telemetry_counter >= telemetry_ticks {
                    telemetry_counter = 0;
                    events::push_event(Event::TelemetryTick);
                }
            }

            Event::TelemetryTick => {
                log_sink.emit(&AppEvent::Telemetry(app.build_telemetry()));
            }

            Event::CommandReceived => {
                remote.poll(&mut app, &mut log_sink);
            }
        });

        // Yield between drains so the idle task can run.
        #[cfg(target_os = "espidf")]
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
}
