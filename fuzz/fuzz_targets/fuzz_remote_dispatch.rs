//! Fuzz target: `remote::dispatch`
//!
//! Feeds arbitrary function names and argument strings into the command
//! dispatcher and asserts that it never panics, only ever yields a
//! documented status code, and never leaves the setpoint store holding
//! a value its own validators would reject.
//!
//! cargo fuzz run fuzz_remote_dispatch

#![no_main]

use libfuzzer_sys::fuzz_target;
use pressurepro::adapters::remote;
use pressurepro::app::events::AppEvent;
use pressurepro::app::ports::EventSink;
use pressurepro::app::service::AppService;
use pressurepro::config::SystemConfig;
use pressurepro::control::setpoints::Mode;

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    // Split the input into a function name and an argument string.
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let (function, args) = match text.split_once(' ') {
        Some(pair) => pair,
        None => (text, ""),
    };

    let mut app = AppService::new(&SystemConfig::default());
    let status = remote::dispatch(&mut app, function, args, &mut NullSink);
    assert!(
        status == -1 || status == 0 || status == 1,
        "undocumented status code {status}"
    );

    // Whatever got through, the store invariants must still hold.
    for mode in [Mode::Low, Mode::High] {
        let profile = app.setpoints().profile(mode);
        assert!(profile.target_psi.is_finite() && profile.target_psi > 0.0);
        assert!(profile.hysteresis_psi.is_finite() && profile.hysteresis_psi >= 0.0);
    }
});
