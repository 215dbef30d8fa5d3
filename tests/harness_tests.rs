//! End-to-end tests for the quickharness execution wrapper
//!
//! These drive the public surface the way an embedding host would: build a
//! harness against a capturing reporter, run cases across several files,
//! send the load-complete signal, and check the emitted lines.

use quickharness::prelude::*;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

// Shared buffer so tests can read back what the reporter wrote.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capturing_harness() -> (SharedBuf, Harness) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    let buf = SharedBuf::default();
    let harness = Harness::with_reporter(Reporter::with_writer(Box::new(buf.clone())).no_color());
    (buf, harness)
}

mod bookkeeping {
    use super::*;

    #[tokio::test]
    async fn five_cases_across_two_files_one_summary() {
        let (buf, mut harness) = capturing_harness();
        let check = harness.assert();

        for name in ["adds", "subtracts", "multiplies"] {
            let check = check.clone();
            harness
                .case((name, "math_test.rs"), || async move {
                    check.equal(2 + 2, 4, None)
                })
                .await;
        }
        for name in ["concats", "splits"] {
            let check = check.clone();
            harness
                .case((name, "string_test.rs"), || async move {
                    check.ok("abc", None)
                })
                .await;
        }

        let registry = harness.registry().unwrap();
        assert_eq!(registry.total_count(), 0);
        assert_eq!(registry.summary().passed, 5);
        assert!(!buf.contents().contains("5 passed"));

        harness.mark_loaded();
        let out = buf.contents();
        assert!(out.contains("ok | 5 passed | 0 failed |"));
        assert_eq!(out.matches("5 passed").count(), 1);
    }

    #[tokio::test]
    async fn file_headers_and_case_lines() {
        let (buf, mut harness) = capturing_harness();
        harness
            .case(("adds", "math_test.rs"), || async { Ok(()) })
            .await;
        harness
            .case(
                CaseConfig::new("divides", "math_test.rs").ignored(),
                || async { Ok(()) },
            )
            .await;

        let out = buf.contents();
        assert_eq!(out.matches("running").count(), 1);
        assert!(out.contains("adds ... ok"));
        assert!(out.contains("divides ... ignored"));
    }

    #[tokio::test]
    async fn ignored_cases_count_toward_passed() {
        let (_buf, mut harness) = capturing_harness();
        harness
            .case(CaseConfig::new("later", "todo_test.rs").ignored(), || async {
                Err(Error::type_error("never evaluated"))
            })
            .await;

        let summary = harness.registry().unwrap().summary();
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 0);
    }
}

mod failure_reporting {
    use super::*;

    #[tokio::test]
    async fn assertion_and_unexpected_failures_merge_into_failed() {
        let (buf, mut harness) = capturing_harness();
        let check = harness.assert();

        harness
            .case(("checks", "mixed_test.rs"), || async move {
                check.ok(0, None)
            })
            .await;
        harness
            .case(("crashes", "mixed_test.rs"), || async {
                Err(Error::reference_error("x is not defined"))
            })
            .await;
        harness
            .case(("passes", "mixed_test.rs"), || async { Ok(()) })
            .await;
        harness.mark_loaded();

        let out = buf.contents();
        assert!(out.contains("checks ... FAILED"));
        assert!(out.contains("AssertionError: Expected 0 to be true"));
        assert!(out.contains("crashes ... FAILED"));
        assert!(out.contains("ReferenceError: x is not defined"));
        assert!(out.contains("FAILED | 1 passed | 2 failed |"));
    }

    #[tokio::test]
    async fn failing_case_does_not_stop_later_cases() {
        let (_buf, mut harness) = capturing_harness();
        let first = harness
            .case(("bad", "resilience_test.rs"), || async {
                Err(Error::assertion("nope"))
            })
            .await;
        let second = harness
            .case(("good", "resilience_test.rs"), || async { Ok(()) })
            .await;

        assert_eq!(first, CaseStatus::Failed);
        assert_eq!(second, CaseStatus::Passed);
    }
}

mod async_bodies {
    use super::*;

    #[tokio::test]
    async fn body_may_suspend_before_completing() {
        let (_buf, mut harness) = capturing_harness();
        let check = harness.assert();
        let status = harness
            .case(("eventually", "async_test.rs"), || async move {
                tokio::task::yield_now().await;
                check.equal("done", "done", None)
            })
            .await;
        assert_eq!(status, CaseStatus::Passed);
        assert_eq!(harness.registry().unwrap().total_count(), 0);
    }

    #[tokio::test]
    async fn rejecting_body_is_classified_by_channel() {
        let (_buf, mut harness) = capturing_harness();
        let check = harness.assert();
        let status = harness
            .case(("awaits a rejection", "async_test.rs"), || async move {
                check
                    .reject(
                        || async { Err(Error::range_error("bad input")) },
                        ErrorKind::RangeError,
                    )
                    .await
            })
            .await;
        assert_eq!(status, CaseStatus::Passed);
    }
}
