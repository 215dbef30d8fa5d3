//! Native delegation path
//!
//! When the host runtime ships its own test runner and assert API, the
//! harness must not reimplement anything: every public operation becomes a
//! pure pass-through with matching semantics (ok/equal/reject/throws and
//! case registration map 1:1). The traits here are the seam the host
//! implements; [`Harness::select`](crate::harness::Harness::select) picks
//! them up exactly once at startup based on the
//! [`Environment`](crate::env::Environment) capability flags.
//!
//! Generic comparisons cannot cross an object-safe boundary, so the
//! facade evaluates the predicate first and hands the host the outcome
//! plus both rendered operands.

use crate::assert::Expectation;
use crate::error::Result;
use crate::harness::{CaseConfig, CaseStatus};
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;

/// Host-provided assert facilities.
pub trait NativeAssert {
    /// Native `ok`: `truthy` is the already-coerced value, `rendered` how
    /// it reads in a failure message.
    fn ok(&self, truthy: bool, rendered: &str, message: Option<&str>) -> Result<()>;

    /// Native `equal`: `are_equal` is the already-evaluated strict
    /// comparison of the rendered operands.
    fn equal(&self, are_equal: bool, expected: &str, found: &str, message: Option<&str>)
        -> Result<()>;

    /// Native `reject`: awaits `body` and applies `expected`.
    fn reject<'a>(
        &'a self,
        body: LocalBoxFuture<'a, Result<()>>,
        expected: Expectation,
    ) -> LocalBoxFuture<'a, Result<()>>;

    /// Native `throws`: invokes `body` and applies `expected`.
    fn throws(&self, body: Box<dyn FnOnce() -> Result<()> + '_>, expected: Expectation)
        -> Result<()>;
}

/// Host-provided test runner.
pub trait NativeRunner {
    /// Register and run one case. The host owns bookkeeping and output for
    /// its cases; the harness only forwards.
    fn run_case<'a>(
        &'a mut self,
        config: CaseConfig,
        body: LocalBoxFuture<'a, Result<()>>,
    ) -> LocalBoxFuture<'a, CaseStatus>;

    /// Forwarded from
    /// [`Environment::suppress_unhandled_rejections`](crate::env::Environment).
    fn set_suppress_unhandled_rejections(&mut self, suppress: bool);
}

/// The pair of host facilities needed to run natively.
pub struct NativeFacilities {
    /// Test registration/execution surface.
    pub runner: Box<dyn NativeRunner>,
    /// Assertion surface, shared with case bodies.
    pub assert: Rc<dyn NativeAssert>,
}

impl NativeFacilities {
    /// Bundle a runner and an assert surface.
    pub fn new(runner: Box<dyn NativeRunner>, assert: Rc<dyn NativeAssert>) -> Self {
        Self { runner, assert }
    }
}
