//! Tests for the assertion surface
//!
//! Exercises the fallback implementations through the public API, covering
//! truthiness, strict equality, and the expected-error filters.

use pretty_assertions::assert_eq;
use quickharness::assert::{self, Expectation};
use quickharness::{Error, ErrorKind};

fn failure_message(result: quickharness::Result<()>) -> String {
    match result.unwrap_err() {
        Error::AssertionError { message } => message,
        other => panic!("expected an assertion failure, got {}", other),
    }
}

mod truthiness {
    use super::*;

    #[test]
    fn zero_fails_one_succeeds() {
        assert!(assert::ok(0, None).is_err());
        assert!(assert::ok(1, None).is_ok());
    }

    #[test]
    fn coercion_covers_strings_floats_and_options() {
        assert!(assert::ok("", None).is_err());
        assert!(assert::ok("text", None).is_ok());
        assert!(assert::ok(f64::NAN, None).is_err());
        assert!(assert::ok(0.1, None).is_ok());
        assert!(assert::ok(None::<u8>, None).is_err());
        assert!(assert::ok(Some(0u8), None).is_ok());
    }
}

mod strict_equality {
    use super::*;

    #[test]
    fn identical_values_never_fail() {
        assert!(assert::equal(42, 42, None).is_ok());
        assert!(assert::equal("same", "same", None).is_ok());
        assert!(assert::equal(vec![1, 2, 3], vec![1, 2, 3], None).is_ok());
    }

    #[test]
    fn mismatch_reports_both_values() {
        let message = failure_message(assert::equal(1, 2, None));
        assert!(message.contains("expected 1"));
        assert!(message.contains("found 2"));
    }

    #[test]
    fn user_message_is_prefixed() {
        let message = failure_message(assert::equal('a', 'b', "wrong letter"));
        assert!(message.starts_with("Values are not equal: wrong letter: "));
    }
}

mod expected_errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn throws_matches_kind_and_substring() {
        let result = assert::throws(
            || Err(Error::range_error("bad")),
            Expectation::kind(ErrorKind::RangeError).with_message_containing("bad"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn throws_rejects_wrong_kind() {
        let message = failure_message(assert::throws(
            || Err(Error::range_error("bad")),
            ErrorKind::TypeError,
        ));
        assert!(message.contains("Expected error to be TypeError"));
        assert!(message.contains("but was RangeError"));
    }

    #[test]
    fn throws_requires_something_to_be_raised() {
        let message = failure_message(assert::throws(|| Ok(()), ErrorKind::RangeError));
        assert!(message.contains("Expected function to throw"));
    }

    #[tokio::test]
    async fn reject_on_resolving_future_fails() {
        let message = failure_message(assert::reject(|| async { Ok(()) }, ()).await);
        assert!(message.contains("Expected function to throw"));
    }

    #[tokio::test]
    async fn reject_swallows_the_expected_error() {
        let result = assert::reject(
            || async { Err(Error::type_error("not callable")) },
            ErrorKind::TypeError,
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn reject_with_bare_string_treats_it_as_message() {
        let message =
            failure_message(assert::reject(|| async { Ok(()) }, "queue drained early").await);
        assert_eq!(message, "Expected function to throw: queue drained early");
    }
}
