//! Integration tests for the remote command surface.
//!
//! Exercises the named-operation dispatch, the strict argument parsing,
//! the status-code contract, and the inbox → control-loop path.

use crate::mock_hw::{LogSink, MockHardware};

use pressurepro::adapters::remote::{
    self, RemoteChannel, FN_SET_HIGH_HYSTERESIS, FN_SET_HIGH_TARGET, FN_SET_LOW_HYSTERESIS,
    FN_SET_LOW_TARGET, FN_SET_MODE,
};
use pressurepro::app::events::AppEvent;
use pressurepro::app::service::AppService;
use pressurepro::config::SystemConfig;
use pressurepro::control::hysteresis::ValveState;
use pressurepro::control::setpoints::Mode;
use pressurepro::events;

fn make_app() -> (AppService, LogSink) {
    let config = SystemConfig::default();
    let app = AppService::new(&config);
    (app, LogSink::new())
}

// ── Status-code contract ──────────────────────────────────────

#[test]
fn all_five_operations_report_success() {
    let (mut app, mut sink) = make_app();

    assert_eq!(remote::dispatch(&mut app, FN_SET_HIGH_TARGET, "120", &mut sink), 1);
    assert_eq!(remote::dispatch(&mut app, FN_SET_LOW_TARGET, "30", &mut sink), 1);
    assert_eq!(remote::dispatch(&mut app, FN_SET_HIGH_HYSTERESIS, "3.5", &mut sink), 1);
    assert_eq!(remote::dispatch(&mut app, FN_SET_LOW_HYSTERESIS, "1.5", &mut sink), 1);
    assert_eq!(remote::dispatch(&mut app, FN_SET_MODE, "high", &mut sink), 1);
    assert_eq!(remote::dispatch(&mut app, FN_SET_MODE, "low", &mut sink), 0);

    assert_eq!(app.setpoints().profile(Mode::High).target_psi, 120.0);
    assert_eq!(app.setpoints().profile(Mode::High).hysteresis_psi, 3.5);
    assert_eq!(app.setpoints().profile(Mode::Low).target_psi, 30.0);
    assert_eq!(app.setpoints().profile(Mode::Low).hysteresis_psi, 1.5);
}

#[test]
fn rejected_writes_return_minus_one_and_mutate_nothing() {
    let (mut app, mut sink) = make_app();
    let low_before = app.setpoints().profile(Mode::Low);
    let high_before = app.setpoints().profile(Mode::High);

    for (function, args) in [
        (FN_SET_LOW_TARGET, "0"),
        (FN_SET_LOW_TARGET, "-10"),
        (FN_SET_LOW_TARGET, "abc"),
        (FN_SET_LOW_TARGET, ""),
        (FN_SET_HIGH_TARGET, "inf"),
        (FN_SET_LOW_HYSTERESIS, "-0.5"),
        (FN_SET_HIGH_HYSTERESIS, "NaN"),
        (FN_SET_MODE, "banana"),
        (FN_SET_MODE, "2"),
        ("no-such-function", "1"),
    ] {
        assert_eq!(
            remote::dispatch(&mut app, function, args, &mut sink),
            -1,
            "{function}({args:?}) must fail"
        );
    }

    assert_eq!(app.setpoints().profile(Mode::Low), low_before);
    assert_eq!(app.setpoints().profile(Mode::High), high_before);
    assert_eq!(app.mode(), Mode::Low);
    assert!(
        !sink.events.iter().any(|e| matches!(
            e,
            AppEvent::SetpointChanged { .. } | AppEvent::ModeChanged { .. }
        )),
        "rejected operations must not emit change events"
    );
}

// ── Strict parsing: malformed input is a failure, not 0.0 ─────

#[test]
fn malformed_hysteresis_does_not_become_zero() {
    let (mut app, mut sink) = make_app();
    // Under atof-style parsing, "garbage" would coerce to 0.0 and pass
    // the >= 0 check, silently zeroing the dead band.
    assert_eq!(
        remote::dispatch(&mut app, FN_SET_LOW_HYSTERESIS, "garbage", &mut sink),
        -1
    );
    assert_eq!(app.setpoints().profile(Mode::Low).hysteresis_psi, 2.0);
}

// ── Read-back variable ────────────────────────────────────────

#[test]
fn pressure_variable_reads_current_cycle() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new();
    app.start(&mut hw, &mut sink);

    hw.psi = 88.26;
    app.tick(1000, &mut hw, &mut sink);
    assert_eq!(remote::pressure_variable(&app).as_str(), "88.3");
}

// ── Inbox → control loop path ─────────────────────────────────

#[test]
fn submitted_requests_apply_on_poll() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new();
    app.start(&mut hw, &mut sink);
    let mut channel = RemoteChannel::new();

    assert!(channel.submit(FN_SET_LOW_TARGET, "40"));
    assert!(channel.submit(FN_SET_MODE, "low"));
    assert_eq!(channel.pending(), 2);

    // Nothing applied until the control loop polls.
    assert_eq!(app.setpoints().profile(Mode::Low).target_psi, 25.0);

    channel.poll(&mut app, &mut sink);
    assert_eq!(channel.pending(), 0);
    assert_eq!(app.setpoints().profile(Mode::Low).target_psi, 40.0);

    // The new setpoint steers the next cycle: 35 PSI is now below
    // 40 - 2, so the controller inflates.
    hw.psi = 35.0;
    app.tick(1000, &mut hw, &mut sink);
    assert_eq!(hw.last_valve(), Some(ValveState::Inflating));
}

#[test]
fn lost_queue_signal_heals_on_next_tick() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new();
    app.start(&mut hw, &mut sink);
    let mut channel = RemoteChannel::new();

    assert!(channel.submit(FN_SET_LOW_TARGET, "40"));
    // The CommandReceived signal can be lost to a full event queue.
    // Discard it here; the per-tick inbox drain must still pick the
    // request up on the next control cycle.
    events::drain_events(|_| {});

    hw.psi = 25.0;
    app.tick(1000, &mut hw, &mut sink);
    if channel.pending() > 0 {
        channel.poll(&mut app, &mut sink);
    }

    assert_eq!(channel.pending(), 0);
    assert_eq!(app.setpoints().profile(Mode::Low).target_psi, 40.0);
}

#[test]
fn oversized_and_overflow_requests_are_dropped() {
    let (mut app, mut sink) = make_app();
    let mut channel = RemoteChannel::new();

    let long = "x".repeat(64);
    assert!(!channel.submit(&long, "1"));
    assert!(!channel.submit(FN_SET_LOW_TARGET, &long));
    assert_eq!(channel.pending(), 0);

    for _ in 0..8 {
        assert!(channel.submit(FN_SET_LOW_TARGET, "30"));
    }
    assert!(!channel.submit(FN_SET_LOW_TARGET, "30"), "9th request must drop");
    assert_eq!(channel.pending(), 8);

    channel.poll(&mut app, &mut sink);
    assert_eq!(app.setpoints().profile(Mode::Low).target_psi, 30.0);
}
