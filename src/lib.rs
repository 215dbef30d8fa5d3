//! quickharness: a minimal test-harness shim
//!
//! quickharness unifies a host runtime's built-in test/assert APIs with a
//! hand-rolled fallback implementation for environments lacking them (a
//! windowed, browser-like host, say). It tracks per-file pass/fail counts
//! and prints a human-readable summary; nothing more. There is no test
//! discovery, no parallel execution, and no reporter beyond the single
//! text summary.
//!
//! # Quick Start
//!
//! ```no_run
//! use quickharness::prelude::*;
//!
//! # async fn demo() {
//! let mut harness = Harness::select(&Environment::detect(), None);
//! let check = harness.assert();
//!
//! harness
//!     .case(case_config!("adds"), || async move {
//!         check.equal(1 + 1, 2, None)
//!     })
//!     .await;
//!
//! // All files have finished registering their cases; the aggregate
//! // summary prints once the last case completes.
//! harness.mark_loaded();
//! # }
//! ```
//!
//! # Module Overview
//!
//! | Category | Modules |
//! |----------|---------|
//! | **Core** | [`registry`], [`assert`], [`harness`], [`error`](Error) |
//! | **Host** | [`env`], [`native`] |
//! | **Output** | [`reporter`] |

pub mod assert;
pub mod env;
pub mod harness;
pub mod native;
pub mod registry;
pub mod reporter;

mod error;

pub use error::{Error, ErrorKind, Result};
pub use harness::{CaseConfig, CaseStatus, Harness};

pub mod prelude;

/// quickharness version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
