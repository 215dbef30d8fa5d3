//! Host environment capability flags
//!
//! The harness runs in one of two worlds: a host runtime that ships its own
//! test/assert facilities, or a windowed (browser-like) host that has none.
//! [`Environment`] captures that distinction as plain booleans so the
//! strategy selection in [`Harness::select`](crate::harness::Harness::select)
//! happens exactly once at startup and nothing else in the crate probes the
//! ambient environment.

use std::env;

/// Capability flags describing the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    /// A native test runner (and matching assert API) is available.
    pub native_runner: bool,
    /// The host is windowed (browser-like) rather than headless.
    pub windowed: bool,
    /// Swallow unhandled rejected asynchronous operations at the process
    /// level instead of crashing. Only meaningful on the native path.
    pub suppress_unhandled_rejections: bool,
}

/// Env var marking a native test runner as available.
pub const NATIVE_RUNNER_VAR: &str = "QUICKHARNESS_NATIVE";
/// Env var marking the host as windowed.
pub const WINDOWED_VAR: &str = "QUICKHARNESS_WINDOWED";

impl Environment {
    /// Probe the environment once.
    ///
    /// Capability flags are read from [`NATIVE_RUNNER_VAR`] and
    /// [`WINDOWED_VAR`] ("1"/"true" enable). Unhandled-rejection
    /// suppression defaults to on whenever a native runner is present,
    /// matching the host runtime's behavior; override it with
    /// [`with_suppress_unhandled_rejections`](Self::with_suppress_unhandled_rejections).
    pub fn detect() -> Self {
        let native_runner = flag(NATIVE_RUNNER_VAR);
        let windowed = !native_runner && flag(WINDOWED_VAR);
        let env = Self {
            native_runner,
            windowed,
            suppress_unhandled_rejections: native_runner,
        };
        tracing::debug!(?env, "detected host environment");
        env
    }

    /// An environment with no native facilities (the fallback path).
    pub fn headless() -> Self {
        Self {
            native_runner: false,
            windowed: false,
            suppress_unhandled_rejections: false,
        }
    }

    /// A windowed host with no native facilities.
    pub fn windowed() -> Self {
        Self {
            windowed: true,
            ..Self::headless()
        }
    }

    /// A host with a native test runner available.
    pub fn native() -> Self {
        Self {
            native_runner: true,
            windowed: false,
            suppress_unhandled_rejections: true,
        }
    }

    /// Override the unhandled-rejection suppression flag.
    pub fn with_suppress_unhandled_rejections(mut self, suppress: bool) -> Self {
        self.suppress_unhandled_rejections = suppress;
        self
    }
}

fn flag(name: &str) -> bool {
    matches!(
        env::var(name).as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE") | Ok("True")
    )
}
