//! Test-case execution wrapper
//!
//! [`Harness`] is the surface callers register cases against. Selected once
//! at startup, it either forwards everything to the host's native runner or
//! runs the fallback path: record the case in the
//! [`Registry`](crate::registry::Registry), await the body, classify the
//! outcome, print the per-case line, and complete the case.
//!
//! Execution is single-threaded and cooperative. A body may suspend at its
//! own await points, but the wrapper awaits it to completion before any
//! registry bookkeeping, so no two bodies interleave at that layer and no
//! locking is needed. There is no cancellation or timeout: a body that
//! never settles leaves the outstanding count above zero and the aggregate
//! summary is never printed.

use crate::assert::Assert;
use crate::env::Environment;
use crate::error::Result;
use crate::native::NativeFacilities;
use crate::registry::Registry;
use crate::reporter::Reporter;
use std::fmt;
use std::future::Future;
use std::time::Instant;

// ---------------------------------------------------------------------------
// CaseConfig
// ---------------------------------------------------------------------------

/// Configuration for one test case.
///
/// The `file` identifier groups cases by originating file in the Suite
/// Registry; it is supplied explicitly by the caller (the
/// [`case_config!`](crate::case_config) macro fills it from `file!()`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseConfig {
    /// Human-readable case name.
    pub name: String,
    /// Originating test-file identifier.
    pub file: String,
    /// Skip the body; the case still counts as passed.
    pub ignore: bool,
}

impl CaseConfig {
    /// Create a config for `name`, grouped under `file`.
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            ignore: false,
        }
    }

    /// Mark the case as ignored.
    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }
}

impl From<(&str, &str)> for CaseConfig {
    fn from((name, file): (&str, &str)) -> Self {
        Self::new(name, file)
    }
}

/// Build a [`CaseConfig`] with the file identifier taken from the call
/// site's `file!()`.
#[macro_export]
macro_rules! case_config {
    ($name:expr) => {
        $crate::harness::CaseConfig::new($name, file!())
    };
}

// ---------------------------------------------------------------------------
// CaseStatus
// ---------------------------------------------------------------------------

/// Outcome of a single case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    /// Body completed without error.
    Passed,
    /// Body raised an assertion failure or an unexpected error.
    Failed,
    /// Body was skipped via the `ignore` flag. Counts toward `passed` in
    /// the registry entry and the aggregate summary.
    Ignored,
}

impl CaseStatus {
    /// Whether the case counts toward the failed total.
    pub fn is_failure(&self) -> bool {
        matches!(self, CaseStatus::Failed)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStatus::Passed => write!(f, "ok"),
            CaseStatus::Failed => write!(f, "FAILED"),
            CaseStatus::Ignored => write!(f, "ignored"),
        }
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

enum Backend {
    Native(NativeFacilities),
    Fallback {
        registry: Registry,
        reporter: Reporter,
    },
}

/// Entry point for registering and running test cases.
pub struct Harness {
    backend: Backend,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// A fallback harness reporting to stdout.
    pub fn new() -> Self {
        Self::with_reporter(Reporter::new())
    }

    /// A fallback harness with a custom reporter.
    pub fn with_reporter(reporter: Reporter) -> Self {
        Self {
            backend: Backend::Fallback {
                registry: Registry::new(),
                reporter,
            },
        }
    }

    /// Select the execution strategy once at startup: native facilities
    /// when the capability flag says they exist and the host supplied them,
    /// the fallback otherwise. The unhandled-rejection suppression flag is
    /// forwarded to the native runner here and nowhere else.
    pub fn select(env: &Environment, native: Option<NativeFacilities>) -> Self {
        match native {
            Some(mut facilities) if env.native_runner => {
                facilities
                    .runner
                    .set_suppress_unhandled_rejections(env.suppress_unhandled_rejections);
                tracing::debug!("using native test facilities");
                Self {
                    backend: Backend::Native(facilities),
                }
            }
            _ => {
                tracing::debug!("using fallback test facilities");
                Self::new()
            }
        }
    }

    /// The matching assertion surface for this strategy. Cheap; bodies
    /// capture their own handle.
    pub fn assert(&self) -> Assert {
        match &self.backend {
            Backend::Native(facilities) => Assert::native(facilities.assert.clone()),
            Backend::Fallback { .. } => Assert::fallback(),
        }
    }

    /// Register and run one case. Never raises: a failing body degrades to
    /// a printed failure line and the returned status.
    pub async fn case<'a, F, Fut>(&'a mut self, config: impl Into<CaseConfig>, body: F) -> CaseStatus
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<()>> + 'a,
    {
        let config = config.into();
        match &mut self.backend {
            Backend::Native(facilities) => {
                facilities.runner.run_case(config, Box::pin(body())).await
            }
            Backend::Fallback { registry, reporter } => {
                run_fallback_case(registry, reporter, config, body).await
            }
        }
    }

    /// Signal that all files have finished registering cases. On the
    /// native path the host owns its own lifecycle and this is a no-op.
    pub fn mark_loaded(&mut self) {
        if let Backend::Fallback { registry, reporter } = &mut self.backend {
            registry.mark_loaded(reporter);
        }
    }

    /// The fallback registry, for introspection. `None` on the native path.
    pub fn registry(&self) -> Option<&Registry> {
        match &self.backend {
            Backend::Fallback { registry, .. } => Some(registry),
            Backend::Native(_) => None,
        }
    }
}

async fn run_fallback_case<F, Fut>(
    registry: &mut Registry,
    reporter: &mut Reporter,
    config: CaseConfig,
    body: F,
) -> CaseStatus
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let entry = registry.register(&config.file);

    let start = Instant::now();
    // Assertion failures and unexpected errors are kept in separate
    // buckets; both feed the same failed counter.
    let mut assertions: Vec<String> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    if !config.ignore {
        match body().await {
            Ok(()) => {}
            Err(e) if e.is_assertion() => assertions.push(e.to_string()),
            Err(e) => errors.push(e.to_string()),
        }
    }
    let elapsed = start.elapsed();

    if !entry.has_completions() {
        reporter.file_header(entry.count, &config.file);
    }
    entry.time += elapsed;

    let status = if !assertions.is_empty() || !errors.is_empty() {
        entry.failed += 1;
        CaseStatus::Failed
    } else if config.ignore {
        entry.passed += 1;
        CaseStatus::Ignored
    } else {
        entry.passed += 1;
        CaseStatus::Passed
    };

    reporter.case_line(&config.name, status, elapsed);
    for message in assertions.iter().chain(errors.iter()) {
        reporter.failure_detail(message);
    }
    tracing::debug!(name = %config.name, %status, "case finished");

    registry.complete(reporter);
    status
}
