//! Remote command surface — named operations over any transport.
//!
//! The controller exposes five named operations plus one readable
//! variable (`pressure`).  This module is transport-agnostic: a cloud
//! or serial bridge decodes its wire format into `(function, args)`
//! string pairs and [`submit`](RemoteChannel::submit)s them; the control
//! loop drains the inbox via [`poll`](RemoteChannel::poll) on its own
//! thread, so the setpoint store is never touched concurrently.
//!
//! ## Status codes
//!
//! Every operation returns an `i32`: `-1` on any failure, `1` on
//! success, except `set-mode` which returns the selected mode index
//! (`0` = LOW, `1` = HIGH).
//!
//! ## Argument parsing
//!
//! Numeric arguments are parsed strictly: malformed input is a distinct
//! rejected case (`-1`, state unchanged), never coerced to 0.  `NaN`
//! and infinities parse as floats but are rejected by the setpoint
//! store's validators.

use core::fmt::Write as _;

use heapless::{Deque, String};
use log::{info, warn};

use crate::app::commands::AppCommand;
use crate::app::ports::EventSink;
use crate::app::service::AppService;
use crate::control::setpoints::Mode;
use crate::error::CommandError;
use crate::events::{push_event, Event};

// ── Operation names ───────────────────────────────────────────

pub const FN_SET_HIGH_TARGET: &str = "set-high-target";
pub const FN_SET_LOW_TARGET: &str = "set-low-target";
pub const FN_SET_MODE: &str = "set-mode";
pub const FN_SET_LOW_HYSTERESIS: &str = "set-low-hysteresis";
pub const FN_SET_HIGH_HYSTERESIS: &str = "set-high-hysteresis";

/// Returned by every operation on failure.
pub const STATUS_FAILURE: i32 = -1;
/// Returned by the four setter operations on success; `set-mode`
/// returns the mode index instead.
pub const STATUS_OK: i32 = 1;

// ── Inbox ─────────────────────────────────────────────────────

const MAX_FUNCTION_LEN: usize = 24;
const MAX_ARGS_LEN: usize = 24;
const INBOX_DEPTH: usize = 8;

/// One decoded remote request awaiting the control loop.
#[derive(Debug, Clone)]
pub struct RemoteRequest {
    pub function: String<MAX_FUNCTION_LEN>,
    pub args: String<MAX_ARGS_LEN>,
}

/// Bounded inbox bridging a transport to the control loop.
pub struct RemoteChannel {
    inbox: Deque<RemoteRequest, INBOX_DEPTH>,
}

impl RemoteChannel {
    pub fn new() -> Self {
        Self {
            inbox: Deque::new(),
        }
    }

    /// Enqueue a decoded request and signal the control loop.
    /// Returns `false` (request dropped) if the inbox is full or either
    /// string exceeds its fixed capacity — no registered operation name
    /// or valid argument is that long.
    pub fn submit(&mut self, function: &str, args: &str) -> bool {
        let (Ok(function), Ok(args)) = (
            String::<MAX_FUNCTION_LEN>::try_from(function),
            String::<MAX_ARGS_LEN>::try_from(args),
        ) else {
            warn!("remote: oversized request dropped");
            return false;
        };
        if self.inbox.push_back(RemoteRequest { function, args }).is_err() {
            warn!("remote: inbox full, request dropped");
            return false;
        }
        // The signal can be lost to a full event queue; the control loop
        // also drains the inbox every tick, so the request still runs
        // within one cycle.
        if !push_event(Event::CommandReceived) {
            warn!("remote: event queue full, request deferred to next tick");
        }
        true
    }

    /// Drain the inbox, dispatching each request into the service.
    /// Called from the control loop thread only.
    pub fn poll(&mut self, app: &mut AppService, sink: &mut impl EventSink) {
        while let Some(req) = self.inbox.pop_front() {
            let status = dispatch(app, &req.function, &req.args, sink);
            info!("remote: {}(\"{}\") -> {}", req.function, req.args, status);
        }
    }

    /// Number of requests waiting.
    pub fn pending(&self) -> usize {
        self.inbox.len()
    }
}

impl Default for RemoteChannel {
    fn default() -> Self {
        Self::new()
    }
}

// ── Dispatch ──────────────────────────────────────────────────

/// Dispatch one named operation.  Total: any `(function, args)` pair
/// yields a status code, never a panic.
pub fn dispatch(
    app: &mut AppService,
    function: &str,
    args: &str,
    sink: &mut impl EventSink,
) -> i32 {
    match function {
        FN_SET_HIGH_TARGET => apply_setter(app, args, sink, |value| AppCommand::SetTarget {
            mode: Mode::High,
            value,
        }),
        FN_SET_LOW_TARGET => apply_setter(app, args, sink, |value| AppCommand::SetTarget {
            mode: Mode::Low,
            value,
        }),
        FN_SET_HIGH_HYSTERESIS => apply_setter(app, args, sink, |value| AppCommand::SetHysteresis {
            mode: Mode::High,
            value,
        }),
        FN_SET_LOW_HYSTERESIS => apply_setter(app, args, sink, |value| AppCommand::SetHysteresis {
            mode: Mode::Low,
            value,
        }),
        FN_SET_MODE => match Mode::parse(args) {
            Some(mode) => match app.handle_command(AppCommand::SetMode(mode), sink) {
                Ok(()) => mode.index(),
                Err(_) => STATUS_FAILURE,
            },
            None => {
                warn!("remote: {}: {}", FN_SET_MODE, CommandError::InvalidMode);
                STATUS_FAILURE
            }
        },
        _ => {
            warn!("remote: {}: {:?}", CommandError::UnknownFunction, function);
            STATUS_FAILURE
        }
    }
}

/// Read-back of the current pressure, one decimal digit — the remote
/// analogue of the `pressure` telemetry channel.
pub fn pressure_variable(app: &AppService) -> String<16> {
    let mut s = String::new();
    let _ = write!(s, "{:.1}", app.current_pressure());
    s
}

fn apply_setter(
    app: &mut AppService,
    args: &str,
    sink: &mut impl EventSink,
    build: impl FnOnce(f32) -> AppCommand,
) -> i32 {
    match parse_psi(args) {
        Ok(value) => match app.handle_command(build(value), sink) {
            Ok(()) => STATUS_OK,
            Err(e) => {
                warn!("remote: rejected: {}", e);
                STATUS_FAILURE
            }
        },
        Err(e) => {
            warn!("remote: {}: {:?}", e, args);
            STATUS_FAILURE
        }
    }
}

/// Strict numeric parse.  Rust's float parser accepts `inf`/`NaN`
/// spellings; those pass here and are rejected downstream as non-finite.
fn parse_psi(args: &str) -> Result<f32, CommandError> {
    args.trim().parse::<f32>().map_err(|_| CommandError::MalformedNumber)
}
