//! The result algebra decoders produce.
//!
//! A [`DecodeResult`] is a `stillwater::Validation` whose failure side is
//! always a non-empty [`DecodeErrors`]. The free functions here are the
//! operations decoders are built from; [`ResultExt`] offers the same
//! operations in method position.
//!
//! The defining operation is [`product`]: two independent failures are
//! concatenated instead of short-circuiting, which is how object and array
//! decoders report every problem in one pass.
//!
//! ```rust
//! use verdict::result::{fail, product, valid};
//! use verdict::{DecodeError, DecodeResult};
//! use serde_json::Value;
//! use stillwater::Validation;
//!
//! let a: DecodeResult<i32> = fail(DecodeError::new(Value::Null, "first"));
//! let b: DecodeResult<i32> = fail(DecodeError::new(Value::Null, "second"));
//!
//! match product(a, b) {
//!     Validation::Failure(errors) => assert_eq!(errors.reasons(), vec!["first", "second"]),
//!     Validation::Success(_) => unreachable!(),
//! }
//!
//! assert_eq!(product(valid(1), valid("a")), valid((1, "a")));
//! ```

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;
use stillwater::Validation;

use crate::error::{DecodeError, DecodeErrors};

/// Outcome of one decode attempt.
pub type DecodeResult<T> = Validation<T, DecodeErrors>;

/// Wraps a value as a success.
pub fn valid<T>(value: T) -> DecodeResult<T> {
    Validation::Success(value)
}

/// Wraps an error list as a failure.
pub fn invalid<T>(errors: DecodeErrors) -> DecodeResult<T> {
    Validation::Failure(errors)
}

/// A failure holding exactly one error.
pub fn fail<T>(error: DecodeError) -> DecodeResult<T> {
    Validation::Failure(DecodeErrors::single(error))
}

/// Succeeds with `value` when `cond` holds, otherwise fails with `error`.
pub fn when<T>(cond: bool, value: T, error: DecodeError) -> DecodeResult<T> {
    if cond {
        valid(value)
    } else {
        fail(error)
    }
}

/// Runs a fallible computation, converting any fault into a failure.
///
/// `Ok` becomes a success. An `Err` becomes a single error whose reason is the
/// error's `Display` text. A panic is caught and becomes a single error whose
/// reason is the panic message. Both carry the code `captured_fault`.
///
/// # Example
///
/// ```rust
/// use verdict::result::attempt;
///
/// let parsed = attempt(|| "12".parse::<i32>());
/// assert!(parsed.is_success());
///
/// let broken = attempt(|| "twelve".parse::<i32>());
/// assert!(broken.is_failure());
///
/// let panicked = attempt::<i32, String, _>(|| panic!("Boom!"));
/// assert!(panicked.is_failure());
/// ```
pub fn attempt<T, E, F>(f: F) -> DecodeResult<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    let reason = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => return valid(value),
        Ok(Err(error)) => error.to_string(),
        Err(payload) => panic_message(payload.as_ref()),
    };

    tracing::debug!(%reason, "captured fault while decoding");
    fail(DecodeError::new(Value::Null, reason).with_code("captured_fault"))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic".to_string()
    }
}

/// Transforms a success value; failures pass through untouched.
pub fn map<T, U>(result: DecodeResult<T>, f: impl FnOnce(T) -> U) -> DecodeResult<U> {
    result.map(f)
}

/// Pairs two independent results, accumulating errors.
///
/// | `a`     | `b`     | result                          |
/// |---------|---------|---------------------------------|
/// | Success | Success | `Success((a, b))`               |
/// | Failure | Success | `a`'s errors                    |
/// | Success | Failure | `b`'s errors                    |
/// | Failure | Failure | `a`'s errors followed by `b`'s  |
pub fn product<A, B>(a: DecodeResult<A>, b: DecodeResult<B>) -> DecodeResult<(A, B)> {
    a.and(b)
}

/// Chains a dependent result. `f` is never called on a failure.
pub fn flat_map<T, U>(
    result: DecodeResult<T>,
    f: impl FnOnce(T) -> DecodeResult<U>,
) -> DecodeResult<U> {
    result.and_then(f)
}

/// Collapses a result with one handler per outcome.
pub fn fold<T, R>(
    result: DecodeResult<T>,
    on_success: impl FnOnce(T) -> R,
    on_failure: impl FnOnce(DecodeErrors) -> R,
) -> R {
    match result {
        Validation::Success(value) => on_success(value),
        Validation::Failure(errors) => on_failure(errors),
    }
}

/// Method forms of the result algebra.
pub trait ResultExt<T>: Sized {
    /// See [`product`].
    fn product<U>(self, other: DecodeResult<U>) -> DecodeResult<(T, U)>;

    /// See [`flat_map`].
    fn flat_map<U>(self, f: impl FnOnce(T) -> DecodeResult<U>) -> DecodeResult<U>;

    /// See [`fold`].
    fn dispatch<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(DecodeErrors) -> R,
    ) -> R;

    /// The success value, if any.
    fn as_success(&self) -> Option<&T>;

    /// The failure's errors, if any.
    fn as_failure(&self) -> Option<&DecodeErrors>;
}

impl<T> ResultExt<T> for DecodeResult<T> {
    fn product<U>(self, other: DecodeResult<U>) -> DecodeResult<(T, U)> {
        product(self, other)
    }

    fn flat_map<U>(self, f: impl FnOnce(T) -> DecodeResult<U>) -> DecodeResult<U> {
        flat_map(self, f)
    }

    fn dispatch<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(DecodeErrors) -> R,
    ) -> R {
        fold(self, on_success, on_failure)
    }

    fn as_success(&self) -> Option<&T> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    fn as_failure(&self) -> Option<&DecodeErrors> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(errors) => Some(errors),
        }
    }
}
