//! Fuzz target: `Mode::parse`
//!
//! Arbitrary strings must never panic the mode parser, and any accepted
//! input must normalise to one of the two canonical selections.
//!
//! cargo fuzz run fuzz_mode_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use pressurepro::control::setpoints::Mode;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    if let Some(mode) = Mode::parse(text) {
        let trimmed = text.trim().to_ascii_lowercase();
        let canonical = match mode {
            Mode::Low => trimmed == "low" || trimmed == "0",
            Mode::High => trimmed == "high" || trimmed == "1",
        };
        assert!(canonical, "parser accepted non-canonical input {text:?}");
    }
});
