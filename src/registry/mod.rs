//! Suite Registry
//!
//! A keyed aggregator mapping a test-file identifier to running counters.
//! Cases are registered as they are declared and completed as they finish;
//! registration and completion interleave freely across files in the
//! single-pass execution model. Once every registered case has completed
//! *and* the load-complete signal has arrived, the registry emits the
//! aggregate summary exactly once.
//!
//! The registry is an explicit value with an explicit lifecycle. It is
//! passed by reference from the execution wrapper; there is no ambient
//! global state.

use crate::error::{Error, Result};
use crate::reporter::Reporter;
use rustc_hash::FxHashMap;
use std::time::Duration;

// ---------------------------------------------------------------------------
// SuiteEntry
// ---------------------------------------------------------------------------

/// Per-file aggregate counters.
///
/// Created lazily on the first registration for a file, mutated by every
/// case completion for that file, and kept for the registry's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteEntry {
    /// Cases registered for this file.
    pub count: usize,
    /// Cases that passed (ignored cases count here too).
    pub passed: usize,
    /// Cases that failed, whatever the failure channel.
    pub failed: usize,
    /// Accumulated wall-clock time across completed cases.
    pub time: Duration,
}

impl SuiteEntry {
    /// Cases registered but not yet completed.
    pub fn outstanding(&self) -> usize {
        self.count - self.passed - self.failed
    }

    /// Whether any case for this file has completed yet.
    pub fn has_completions(&self) -> bool {
        self.passed + self.failed > 0
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Aggregate totals across all files, computed at emission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Total passed cases.
    pub passed: usize,
    /// Total failed cases.
    pub failed: usize,
    /// Total accumulated wall-clock time.
    pub time: Duration,
}

impl Summary {
    /// The run is ok when nothing failed.
    pub fn ok(&self) -> bool {
        self.failed == 0
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Maps file identifiers to [`SuiteEntry`] counters and tracks the global
/// outstanding-case count plus the load-complete flag.
///
/// Invariant: `total_count` equals the sum over all entries of
/// `count - passed - failed`.
#[derive(Debug, Default)]
pub struct Registry {
    entries: FxHashMap<String, SuiteEntry>,
    total_count: usize,
    loaded: bool,
    emitted: bool,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up or create the entry for `file`, increment its case count and
    /// the global outstanding count, and return the entry. Pure bookkeeping.
    pub fn register(&mut self, file: &str) -> &mut SuiteEntry {
        let entry = self.entries.entry(file.to_string()).or_default();
        entry.count += 1;
        self.total_count += 1;
        tracing::trace!(file, count = entry.count, total = self.total_count, "registered case");
        entry
    }

    /// The entry for `file`, or [`Error::NotFound`] if the file was never
    /// registered.
    pub fn lookup(&mut self, file: &str) -> Result<&mut SuiteEntry> {
        self.entries
            .get_mut(file)
            .ok_or_else(|| Error::NotFound(file.to_string()))
    }

    /// Record one case completion. Decrements the outstanding count; when
    /// the load-complete flag is set and nothing is outstanding, emits the
    /// aggregate summary through `reporter`.
    pub fn complete(&mut self, reporter: &mut Reporter) {
        self.total_count -= 1;
        tracing::trace!(total = self.total_count, "completed case");
        if self.loaded && self.total_count == 0 {
            self.emit(reporter);
        }
    }

    /// Signal that all files have finished registering their cases. If
    /// every case has already completed, the summary is emitted right away;
    /// otherwise the last [`complete`](Self::complete) emits it.
    pub fn mark_loaded(&mut self, reporter: &mut Reporter) {
        self.loaded = true;
        tracing::debug!(total = self.total_count, "load complete");
        if self.total_count == 0 {
            self.emit(reporter);
        }
    }

    /// Cases registered but not yet completed, across all files.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Whether the load-complete signal has arrived.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Sum passed/failed/time over all entries.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            passed: 0,
            failed: 0,
            time: Duration::ZERO,
        };
        for entry in self.entries.values() {
            summary.passed += entry.passed;
            summary.failed += entry.failed;
            summary.time += entry.time;
        }
        summary
    }

    fn emit(&mut self, reporter: &mut Reporter) {
        if self.emitted {
            return;
        }
        self.emitted = true;
        let summary = self.summary();
        tracing::debug!(passed = summary.passed, failed = summary.failed, "emitting summary");
        reporter.summary(&summary);
    }
}
