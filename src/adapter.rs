//! Functor / applicative / monad vocabulary.
//!
//! Code written against `of` / `map` / `ap` / `chain` can use these
//! functions instead of learning the native names. Every function is defined
//! through the public operations of [`crate::result`] and [`Decoder`], so the
//! usual laws hold exactly when they hold for those operations.
//!
//! [`Decoder`]: crate::Decoder

/// Instances for [`DecodeResult`](crate::DecodeResult).
pub mod result {
    use crate::error::DecodeErrors;
    use crate::result::{self as algebra, DecodeResult};

    /// Lifts a value. Same as [`valid`](crate::result::valid).
    pub fn of<T>(value: T) -> DecodeResult<T> {
        algebra::valid(value)
    }

    /// Functor map.
    pub fn map<T, U>(fa: DecodeResult<T>, f: impl FnOnce(T) -> U) -> DecodeResult<U> {
        algebra::map(fa, f)
    }

    /// Applies a wrapped function to a wrapped argument.
    ///
    /// When both fail, the function's errors come before the argument's.
    /// [`decoder::ap`](super::decoder::ap) orders them the other way.
    pub fn ap<A, B, F>(fab: DecodeResult<F>, fa: DecodeResult<A>) -> DecodeResult<B>
    where
        F: FnOnce(A) -> B,
    {
        algebra::map(algebra::product(fab, fa), |(f, a)| f(a))
    }

    /// Monadic bind. Same as [`flat_map`](crate::result::flat_map).
    pub fn chain<T, U>(
        fa: DecodeResult<T>,
        f: impl FnOnce(T) -> DecodeResult<U>,
    ) -> DecodeResult<U> {
        algebra::flat_map(fa, f)
    }

    /// Converts into a standard `Result`.
    pub fn into_result<T>(fa: DecodeResult<T>) -> Result<T, DecodeErrors> {
        algebra::fold(fa, Ok, Err)
    }
}

/// Instances for [`Decoder`](crate::Decoder).
pub mod decoder {
    use crate::decoder::Decoder;
    use crate::result::product;
    use crate::Decoders;

    /// A decoder that ignores its input. Same as [`Decoders::lit`].
    pub fn of<O, I>(value: O) -> Decoder<O, I>
    where
        O: Clone + Send + Sync + 'static,
        I: 'static,
    {
        Decoders::lit(value)
    }

    /// Functor map.
    pub fn map<A, B, I, F>(fa: Decoder<A, I>, f: F) -> Decoder<B, I>
    where
        A: 'static,
        B: 'static,
        I: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.map(f)
    }

    /// Runs both decoders on the same input and applies the decoded function
    /// to the decoded argument, accumulating errors argument-first.
    pub fn ap<A, B, F, I>(fab: Decoder<F, I>, fa: Decoder<A, I>) -> Decoder<B, I>
    where
        A: 'static,
        B: 'static,
        I: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Decoder::new(move |input: &I| product(fa.parse(input), fab.parse(input)).map(|(a, f)| f(a)))
    }

    /// Monadic bind. Same as [`Decoder::flat_map`].
    pub fn chain<A, B, I, F>(fa: Decoder<A, I>, f: F) -> Decoder<B, I>
    where
        A: 'static,
        B: 'static,
        I: 'static,
        F: Fn(A) -> Decoder<B, I> + Send + Sync + 'static,
    {
        fa.flat_map(f)
    }
}
