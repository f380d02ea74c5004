//! The decoder value and its combinators.
//!
//! A [`Decoder<O, I>`] wraps one pure function `&I -> DecodeResult<O>`.
//! Decoders are cheap to clone, `Send + Sync`, and never mutated: every
//! combinator returns a new decoder that holds the ones it was built from.
//!
//! # Example
//!
//! ```rust
//! use verdict::Decoders;
//! use serde_json::json;
//!
//! let port = Decoders::string()
//!     .then(Decoders::parse_int())
//!     .or(Decoders::integer());
//!
//! assert!(port.parse(&json!("8080")).is_success());
//! assert!(port.parse(&json!(8080)).is_success());
//! assert!(port.parse(&json!(true)).is_failure());
//! ```

mod lazy;
mod presence;

pub use lazy::{lazy, DecoderRef};
pub use presence::Presence;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use stillwater::{Semigroup, Validation};

use crate::error::{DecodeError, DecodeErrors};
use crate::result::{fail, product, valid, DecodeResult};

/// The boxed decode function shared between clones.
type DecodeFn<O, I> = Arc<dyn Fn(&I) -> DecodeResult<O> + Send + Sync>;

/// A reusable, composable decoding function from `I` to `O`.
///
/// The input type defaults to `serde_json::Value`, the untyped boundary most
/// decoders start from. Conversions such as [`Decoders::parse_int`] take a
/// `String` instead and are chained after a string decoder with
/// [`then`](Decoder::then).
///
/// [`Decoders::parse_int`]: crate::Decoders::parse_int
pub struct Decoder<O, I = Value> {
    run: DecodeFn<O, I>,
}

impl<O, I> Clone for Decoder<O, I> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<O, I> fmt::Debug for Decoder<O, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder").finish_non_exhaustive()
    }
}

impl<O: 'static, I: 'static> Decoder<O, I> {
    /// Wraps a decode function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Decoder;
    /// use verdict::result::valid;
    /// use serde_json::{json, Value};
    ///
    /// let render = Decoder::new(|value: &Value| valid(value.to_string()));
    /// assert!(render.parse(&json!(1)).is_success());
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&I) -> DecodeResult<O> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// A decoder that resolves `supplier` on every invocation.
    ///
    /// Used to break the construction cycle of self-referential schemas.
    /// The supplier is not memoized.
    pub fn lazy<F>(supplier: F) -> Self
    where
        F: Fn() -> Decoder<O, I> + Send + Sync + 'static,
    {
        Self::new(move |input| supplier().parse(input))
    }

    /// Runs the decoder against one input.
    pub fn parse(&self, input: &I) -> DecodeResult<O> {
        (self.run)(input)
    }

    /// Transforms a successful output. Failures pass through unchanged.
    pub fn map<U, F>(self, f: F) -> Decoder<U, I>
    where
        U: 'static,
        F: Fn(O) -> U + Send + Sync + 'static,
    {
        Decoder::new(move |input| self.parse(input).map(&f))
    }

    /// Refines a successful output with a result-producing check.
    ///
    /// `f` is never invoked when this decoder fails; the failure is forwarded
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Decoders, DecodeError};
    /// use verdict::result::{fail, valid};
    /// use serde_json::json;
    ///
    /// let even = Decoders::integer().sub_flat_map(|n| {
    ///     if n % 2 == 0 {
    ///         valid(n)
    ///     } else {
    ///         fail(DecodeError::new(n, "Expected even number"))
    ///     }
    /// });
    ///
    /// assert!(even.parse(&json!(4)).is_success());
    /// assert!(even.parse(&json!(3)).is_failure());
    /// ```
    pub fn sub_flat_map<U, F>(self, f: F) -> Decoder<U, I>
    where
        U: 'static,
        F: Fn(O) -> DecodeResult<U> + Send + Sync + 'static,
    {
        Decoder::new(move |input| self.parse(input).and_then(&f))
    }

    /// Feeds a successful output into `other` as its input.
    ///
    /// This is Kleisli composition: when this decoder fails, `other` never
    /// runs.
    pub fn then<U>(self, other: Decoder<U, O>) -> Decoder<U, I>
    where
        U: 'static,
    {
        Decoder::new(move |input| self.parse(input).and_then(|output| other.parse(&output)))
    }

    /// Selects the next decoder from a successful output and runs it against
    /// the **original input**.
    ///
    /// This is how discriminated unions are decoded: read the tag first, then
    /// validate the whole input with the branch the tag names. The selected
    /// decoder never sees the intermediate value. When this decoder fails,
    /// `f` is never invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Decoders;
    /// use serde_json::json;
    ///
    /// let circle = Decoders::object()
    ///     .field("kind", Decoders::string())
    ///     .field("radius", Decoders::number())
    ///     .build();
    /// let square = Decoders::object()
    ///     .field("kind", Decoders::string())
    ///     .field("side", Decoders::number())
    ///     .build();
    ///
    /// let shape = Decoders::field("kind", Decoders::string()).flat_map(move |kind| {
    ///     if kind == "circle" { circle.clone() } else { square.clone() }
    /// });
    ///
    /// assert!(shape.parse(&json!({"kind": "circle", "radius": 2.0})).is_success());
    /// assert!(shape.parse(&json!({"kind": "square", "radius": 2.0})).is_failure());
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Decoder<U, I>
    where
        U: 'static,
        F: Fn(O) -> Decoder<U, I> + Send + Sync + 'static,
    {
        Decoder::new(move |input| self.parse(input).and_then(|output| f(output).parse(input)))
    }

    /// Tries this decoder, then `other` on the same input.
    ///
    /// The first success wins. When both fail, the errors of this decoder
    /// come first, followed by those of `other`.
    ///
    /// Alternatives with different output types are mapped into a common type
    /// (an enum, or `Value`) before being joined.
    pub fn or(self, other: Decoder<O, I>) -> Decoder<O, I> {
        Decoder::new(move |input| match self.parse(input) {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(first) => match other.parse(input) {
                Validation::Success(value) => Validation::Success(value),
                Validation::Failure(second) => Validation::Failure(first.combine(second)),
            },
        })
    }

    /// Runs this decoder and `other` on the same input and pairs the outputs,
    /// accumulating the errors of both.
    pub fn zip<U>(self, other: Decoder<U, I>) -> Decoder<(O, U), I>
    where
        U: 'static,
    {
        Decoder::new(move |input| product(self.parse(input), other.parse(input)))
    }

    /// Rewrites the errors of a failure.
    pub fn map_errors<F>(self, f: F) -> Decoder<O, I>
    where
        F: Fn(DecodeErrors) -> DecodeErrors + Send + Sync + 'static,
    {
        Decoder::new(move |input| self.parse(input).map_err(&f))
    }

    /// Replaces the reason of every error this decoder reports.
    ///
    /// Paths, codes and original values are kept.
    pub fn with_reason(self, reason: impl Into<String>) -> Decoder<O, I> {
        let reason = reason.into();
        self.map_errors(move |errors| errors.map(|error| error.with_reason(reason.clone())))
    }
}

impl<O: 'static, I: Presence + 'static> Decoder<O, I> {
    /// Accepts an absent input as `None` without running this decoder.
    ///
    /// See [`Presence`] for what counts as absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Decoders;
    /// use verdict::result::valid;
    /// use serde_json::{json, Value};
    ///
    /// let nickname = Decoders::string().optional();
    /// assert_eq!(nickname.parse(&Value::Null), valid(None));
    /// assert_eq!(nickname.parse(&json!("Jo")), valid(Some("Jo".to_string())));
    /// ```
    pub fn optional(self) -> Decoder<Option<O>, I> {
        Decoder::new(move |input: &I| {
            if input.is_absent() {
                valid(None)
            } else {
                self.parse(input).map(Some)
            }
        })
    }

    /// Rejects an absent input with a single `required` error, otherwise
    /// delegates to this decoder.
    pub fn required(self) -> Decoder<O, I> {
        Decoder::new(move |input: &I| {
            if input.is_absent() {
                fail(
                    DecodeError::new(Value::Null, "required value missing").with_code("required"),
                )
            } else {
                self.parse(input)
            }
        })
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Decoder<String>>();
    assert_sync::<Decoder<String>>();
};
