//! Prelude module for convenient imports
//!
//! This module provides the most commonly used types for working with
//! quickharness. Import everything from this module for quick access:
//!
//! ```no_run
//! use quickharness::prelude::*;
//!
//! # async fn demo() {
//! let mut harness = Harness::select(&Environment::detect(), None);
//! let check = harness.assert();
//! harness
//!     .case(case_config!("adds"), || async move { check.equal(1 + 1, 2, None) })
//!     .await;
//! harness.mark_loaded();
//! # }
//! ```

// Execution wrapper
pub use crate::harness::{CaseConfig, CaseStatus, Harness};

// Assertions
pub use crate::assert::{Assert, Expectation, Truthy};

// Error handling
pub use crate::error::{Error, ErrorKind, Result};

// Environment and strategy selection
pub use crate::env::Environment;
pub use crate::native::{NativeAssert, NativeFacilities, NativeRunner};

// Suite bookkeeping and output
pub use crate::registry::{Registry, SuiteEntry, Summary};
pub use crate::reporter::Reporter;

// Case-config macro
pub use crate::case_config;

// Version constant
pub use crate::VERSION;
