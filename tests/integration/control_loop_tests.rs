//! Integration tests for the full sense → select → decide → actuate
//! pipeline.
//!
//! These run on the host (x86_64) and drive [`AppService::tick`] with
//! mock adapters, verifying the end-to-end control behaviour the
//! device exhibits — no real hardware required.

use crate::mock_hw::{LogSink, MockDisplay, MockHardware};

use pressurepro::app::events::AppEvent;
use pressurepro::app::ports::{DisplayFrame, DisplayPort};
use pressurepro::app::service::AppService;
use pressurepro::config::SystemConfig;
use pressurepro::control::hysteresis::ValveState;
use pressurepro::control::setpoints::Mode;

const TICK_MS: u32 = 1000;

fn make_app() -> (AppService, MockHardware, LogSink) {
    let config = SystemConfig::default();
    let mut app = AppService::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, sink)
}

/// Run one tick at a synthetic timestamp derived from the tick count.
fn tick(app: &mut AppService, hw: &mut MockHardware, sink: &mut LogSink) {
    let now_ms = (app.tick_count() as u32 + 1) * TICK_MS;
    app.tick(now_ms, hw, sink);
}

// ── Startup state ─────────────────────────────────────────────

#[test]
fn start_deasserts_valves_and_announces_mode() {
    let (app, hw, sink) = make_app();
    assert_eq!(hw.valve_calls, vec![ValveState::Idle]);
    assert_eq!(sink.events, vec![AppEvent::Started(Mode::Low)]);
    assert_eq!(app.mode(), Mode::Low);
}

// ── Reference scenario: LOW profile, target 25, hysteresis 2 ──

#[test]
fn low_profile_band_walkthrough() {
    let (mut app, mut hw, mut sink) = make_app();

    for (psi, expected) in [
        (22.0, ValveState::Inflating),
        (24.0, ValveState::Idle),
        (25.0, ValveState::Idle),
        (27.0, ValveState::Idle),
        (27.1, ValveState::Deflating),
    ] {
        hw.psi = psi;
        tick(&mut app, &mut hw, &mut sink);
        assert_eq!(
            hw.last_valve(),
            Some(expected),
            "pressure {psi} PSI against LOW profile"
        );
    }
}

// ── Reference scenario: switch to HIGH, target 100 ────────────

#[test]
fn high_profile_after_button_switch() {
    let (mut app, mut hw, mut sink) = make_app();

    hw.psi = 97.9;
    hw.press_select_high();
    tick(&mut app, &mut hw, &mut sink);
    hw.release_buttons();

    assert_eq!(app.mode(), Mode::High);
    assert_eq!(hw.last_valve(), Some(ValveState::Inflating));

    hw.psi = 102.1;
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(hw.last_valve(), Some(ValveState::Deflating));

    hw.psi = 100.0;
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(hw.last_valve(), Some(ValveState::Idle));
}

// ── Debounce across ticks ─────────────────────────────────────

#[test]
fn held_button_selects_only_once() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.psi = 25.0;

    hw.press_select_high();
    for _ in 0..3 {
        tick(&mut app, &mut hw, &mut sink);
    }
    hw.release_buttons();
    tick(&mut app, &mut hw, &mut sink);

    let mode_changes = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::ModeChanged { .. }))
        .count();
    assert_eq!(mode_changes, 1, "a held button is one edge, one selection");
}

#[test]
fn opposing_presses_resolve_to_low() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(
        pressurepro::app::commands::AppCommand::SetMode(Mode::High),
        &mut sink,
    )
    .unwrap();

    hw.psi = 50.0;
    hw.buttons = pressurepro::app::ports::ButtonLevels {
        select_low: true,
        select_high: true,
    };
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(app.mode(), Mode::Low, "Select-Low wins the tie-break");
}

// ── Stale sensor forces idle ──────────────────────────────────

#[test]
fn stale_sensor_latches_fault_and_idles_valves() {
    let (mut app, mut hw, mut sink) = make_app();

    // Healthy first: well below target, inflating.
    hw.psi = 10.0;
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(hw.last_valve(), Some(ValveState::Inflating));

    // Five consecutive implausible samples latch the stale fault.
    hw.sample_valid = false;
    for _ in 0..5 {
        tick(&mut app, &mut hw, &mut sink);
    }
    assert_ne!(app.fault_flags(), 0);
    assert_eq!(hw.last_valve(), Some(ValveState::Idle));
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::FaultDetected(_))));

    // Good samples clear the fault; control resumes on the same tick.
    hw.sample_valid = true;
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(app.fault_flags(), 0);
    assert_eq!(hw.last_valve(), Some(ValveState::Inflating));
    assert!(sink.events.iter().any(|e| matches!(e, AppEvent::FaultCleared)));
}

// ── Display observes, never steers ────────────────────────────

#[test]
fn display_frame_tracks_pressure_and_mode() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut display = MockDisplay::new();

    hw.psi = 23.47;
    tick(&mut app, &mut hw, &mut sink);
    display.render(&DisplayFrame::compose(app.current_pressure(), app.mode()));

    hw.psi = 99.0;
    hw.press_select_high();
    tick(&mut app, &mut hw, &mut sink);
    display.render(&DisplayFrame::compose(app.current_pressure(), app.mode()));

    assert_eq!(display.frames[0].line_pressure.as_str(), "Tire Pressure: 23.5 PSI");
    assert_eq!(display.frames[0].line_mode.as_str(), "Active Setpoint: LOW");
    assert_eq!(display.frames[1].line_pressure.as_str(), "Tire Pressure: 99.0 PSI");
    assert_eq!(display.frames[1].line_mode.as_str(), "Active Setpoint: HIGH");
}

// ── Telemetry snapshot ────────────────────────────────────────

#[test]
fn telemetry_snapshot_matches_loop_state() {
    let (mut app, mut hw, mut sink) = make_app();

    hw.psi = 27.5;
    tick(&mut app, &mut hw, &mut sink);

    let t = app.build_telemetry();
    assert_eq!(t.psi, 27.5);
    assert_eq!(t.mode, Mode::Low);
    assert_eq!(t.valve, ValveState::Deflating);
    assert_eq!(t.fault_flags, 0);
    assert_eq!(t.tick, 1);
}

// ── Setpoint changes steer the very next cycle ────────────────

#[test]
fn runtime_setpoint_change_takes_effect_next_tick() {
    let (mut app, mut hw, mut sink) = make_app();

    hw.psi = 30.0;
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(hw.last_valve(), Some(ValveState::Deflating));

    // Raise the LOW target so 30 PSI is now inside the band.
    app.handle_command(
        pressurepro::app::commands::AppCommand::SetTarget {
            mode: Mode::Low,
            value: 31.0,
        },
        &mut sink,
    )
    .unwrap();

    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(hw.last_valve(), Some(ValveState::Idle));
}
