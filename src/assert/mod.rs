//! Assertion library
//!
//! Four operations ([`ok`], [`equal`], [`reject`], [`throws`]) that signal
//! a failed expectation by returning [`Error::AssertionError`], keeping it
//! distinguishable from unrelated errors raised by a test body.
//!
//! The module-level functions are the hand-rolled fallback implementation.
//! [`Assert`] is the strategy facade: in a host with native assert
//! facilities it forwards every operation 1:1 to a
//! [`NativeAssert`](crate::native::NativeAssert) implementation, otherwise
//! it calls the fallback. Callers obtain it from
//! [`Harness::assert`](crate::harness::Harness::assert) and depend only on
//! its surface.

use crate::error::{Error, ErrorKind, Result};
use crate::native::NativeAssert;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Truthy
// ---------------------------------------------------------------------------

/// Truthiness under the host runtime's boolean coercion rules.
///
/// `false`, zero, NaN, the empty string, and an absent option are falsy;
/// everything else is truthy.
pub trait Truthy {
    /// Whether the value coerces to true.
    fn is_truthy(&self) -> bool;
    /// How the value reads in a default failure message.
    fn render(&self) -> String;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_truthy_for_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_truthy_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0.0 && !self.is_nan()
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_truthy_for_float!(f32, f64);

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }

    fn render(&self) -> String {
        format!("{:?}", self)
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }

    fn render(&self) -> String {
        format!("{:?}", self)
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }

    fn render(&self) -> String {
        match self {
            Some(_) => "Some(_)".to_string(),
            None => "None".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Expectation
// ---------------------------------------------------------------------------

/// What [`reject`] and [`throws`] expect of the raised error.
///
/// Built from an [`ErrorKind`] (kind filter), a bare `&str` (a user
/// message, per the original call-site overloading rule), or `()` for no
/// expectation; the builder methods combine kind, message substring, and
/// user message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectation {
    /// Required kind of the raised error.
    pub kind: Option<ErrorKind>,
    /// Substring the raised error's message must contain.
    pub message_includes: Option<String>,
    /// User message appended to failure descriptions.
    pub message: Option<String>,
}

impl Expectation {
    /// No expectation beyond "the function raises an error".
    pub fn none() -> Self {
        Self::default()
    }

    /// Expect an error of the given kind.
    pub fn kind(kind: ErrorKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Additionally require the error message to contain `substring`.
    pub fn with_message_containing(mut self, substring: impl Into<String>) -> Self {
        self.message_includes = Some(substring.into());
        self
    }

    /// Attach a user message to failure descriptions.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl From<()> for Expectation {
    fn from(_: ()) -> Self {
        Self::none()
    }
}

impl From<ErrorKind> for Expectation {
    fn from(kind: ErrorKind) -> Self {
        Self::kind(kind)
    }
}

// A bare string is a message, not a kind filter.
impl From<&str> for Expectation {
    fn from(message: &str) -> Self {
        Self::none().with_message(message)
    }
}

// ---------------------------------------------------------------------------
// Fallback implementation
// ---------------------------------------------------------------------------

/// Fails with an AssertionError when `value` is falsy. The default message
/// describes the falsy value.
pub fn ok<'a, T: Truthy>(value: T, message: impl Into<Option<&'a str>>) -> Result<()> {
    if value.is_truthy() {
        return Ok(());
    }
    let message = message
        .into()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Expected {} to be true", value.render()));
    Err(Error::assertion(message))
}

/// Fails with an AssertionError unless `a` strictly equals `b`. The failure
/// message includes both values.
pub fn equal<'a, T>(a: T, b: T, message: impl Into<Option<&'a str>>) -> Result<()>
where
    T: PartialEq + fmt::Debug,
{
    if a == b {
        return Ok(());
    }
    let context = message
        .into()
        .map(|m| format!("{}: ", m))
        .unwrap_or_default();
    Err(Error::assertion(format!(
        "Values are not equal: {}expected {:?}, found {:?}",
        context, a, b
    )))
}

/// Awaits the future produced by `f`, expecting it to raise an error
/// matching `expected`. The expected error is swallowed; completing without
/// error, or raising a non-matching one, is an assertion failure. An
/// AssertionError raised inside `f` propagates unchanged.
pub async fn reject<F, Fut, E>(f: F, expected: E) -> Result<()>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<()>>,
    E: Into<Expectation>,
{
    verify_raised(f().await, &expected.into())
}

/// Synchronous analogue of [`reject`].
pub fn throws<F, E>(f: F, expected: E) -> Result<()>
where
    F: FnOnce() -> Result<()>,
    E: Into<Expectation>,
{
    verify_raised(f(), &expected.into())
}

fn verify_raised(outcome: Result<()>, expected: &Expectation) -> Result<()> {
    let suffix = expected
        .message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default();

    let raised = match outcome {
        Ok(()) => {
            return Err(Error::assertion(format!(
                "Expected function to throw{}",
                suffix
            )));
        }
        Err(e) if e.is_assertion() => return Err(e),
        Err(e) => e,
    };

    if let Some(kind) = expected.kind {
        if raised.kind() != Some(kind) {
            return Err(Error::assertion(format!(
                "Expected error to be {}, but was {}{}",
                kind,
                raised.kind_label(),
                suffix
            )));
        }
    }

    if let Some(substring) = expected.message_includes.as_deref() {
        if !raised.message().contains(substring) {
            return Err(Error::assertion(format!(
                "Expected error message to include {:?}, but got {:?}{}",
                substring,
                raised.message(),
                suffix
            )));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Assert: the strategy facade
// ---------------------------------------------------------------------------

/// Assertion surface selected once at startup: pass-through to a native
/// host, or the fallback implementation above.
///
/// Cheap to clone; bodies capture their own handle so assertions stay
/// usable while the harness runs the case.
#[derive(Clone, Default)]
pub struct Assert {
    native: Option<Rc<dyn NativeAssert>>,
}

impl Assert {
    /// The fallback strategy.
    pub fn fallback() -> Self {
        Self { native: None }
    }

    /// Pure pass-through to the given native assert facilities.
    pub fn native(host: Rc<dyn NativeAssert>) -> Self {
        Self { native: Some(host) }
    }

    /// Whether this handle delegates to a native host.
    pub fn is_native(&self) -> bool {
        self.native.is_some()
    }

    /// See [`ok`].
    pub fn ok<'a, T: Truthy>(&self, value: T, message: impl Into<Option<&'a str>>) -> Result<()> {
        match &self.native {
            Some(host) => host.ok(value.is_truthy(), &value.render(), message.into()),
            None => ok(value, message),
        }
    }

    /// See [`equal`]. The comparison happens before the native boundary;
    /// the host receives the predicate plus both rendered operands.
    pub fn equal<'a, T>(&self, a: T, b: T, message: impl Into<Option<&'a str>>) -> Result<()>
    where
        T: PartialEq + fmt::Debug,
    {
        match &self.native {
            Some(host) => {
                let are_equal = a == b;
                host.equal(
                    are_equal,
                    &format!("{:?}", a),
                    &format!("{:?}", b),
                    message.into(),
                )
            }
            None => equal(a, b, message),
        }
    }

    /// See [`reject`].
    pub async fn reject<'a, F, Fut, E>(&'a self, f: F, expected: E) -> Result<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<()>> + 'a,
        E: Into<Expectation>,
    {
        let expected = expected.into();
        match &self.native {
            Some(host) => host.reject(Box::pin(f()), expected).await,
            None => verify_raised(f().await, &expected),
        }
    }

    /// See [`throws`].
    pub fn throws<F, E>(&self, f: F, expected: E) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
        E: Into<Expectation>,
    {
        let expected = expected.into();
        match &self.native {
            Some(host) => host.throws(Box::new(f), expected),
            None => verify_raised(f(), &expected),
        }
    }
}
