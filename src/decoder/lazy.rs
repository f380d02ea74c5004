//! Direct-or-deferred decoder references.
//!
//! Combinators that hold nested decoders (`array`, `object`, `field`) accept
//! a [`DecoderRef`], which is either a decoder or a supplier of one. Passing a
//! supplier lets a schema mention itself without recursing forever while it
//! is being built.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::Decoder;

type Supplier<O, I> = Arc<dyn Fn() -> Decoder<O, I> + Send + Sync>;

/// A nested decoder, given directly or as a supplier resolved at parse time.
///
/// # Example
///
/// ```rust
/// use verdict::{lazy, Decoder, Decoders};
/// use serde_json::{json, Map, Value};
///
/// fn node() -> Decoder<Map<String, Value>> {
///     Decoders::object()
///         .field("value", Decoders::integer())
///         .field("children", Decoders::array(lazy(node)))
///         .build()
/// }
///
/// let tree = json!({"value": 1, "children": [{"value": 2, "children": []}]});
/// assert!(node().parse(&tree).is_success());
/// ```
pub enum DecoderRef<O, I = Value> {
    /// A decoder available at construction time.
    Direct(Decoder<O, I>),
    /// A supplier invoked each time the decoder is needed.
    Lazy(Supplier<O, I>),
}

impl<O: 'static, I: 'static> DecoderRef<O, I> {
    /// Returns the decoder, invoking the supplier if this reference is lazy.
    pub fn resolve(&self) -> Decoder<O, I> {
        match self {
            DecoderRef::Direct(decoder) => decoder.clone(),
            DecoderRef::Lazy(supplier) => supplier(),
        }
    }

    /// Converts into a decoder without resolving a lazy supplier early.
    pub fn into_decoder(self) -> Decoder<O, I> {
        match self {
            DecoderRef::Direct(decoder) => decoder,
            DecoderRef::Lazy(supplier) => Decoder::new(move |input| supplier().parse(input)),
        }
    }
}

impl<O, I> Clone for DecoderRef<O, I> {
    fn clone(&self) -> Self {
        match self {
            DecoderRef::Direct(decoder) => DecoderRef::Direct(decoder.clone()),
            DecoderRef::Lazy(supplier) => DecoderRef::Lazy(Arc::clone(supplier)),
        }
    }
}

impl<O, I> fmt::Debug for DecoderRef<O, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecoderRef::Direct(_) => f.write_str("DecoderRef::Direct"),
            DecoderRef::Lazy(_) => f.write_str("DecoderRef::Lazy"),
        }
    }
}

impl<O, I> From<Decoder<O, I>> for DecoderRef<O, I> {
    fn from(decoder: Decoder<O, I>) -> Self {
        DecoderRef::Direct(decoder)
    }
}

/// Defers construction of a nested decoder until it is used.
pub fn lazy<O, I, F>(supplier: F) -> DecoderRef<O, I>
where
    F: Fn() -> Decoder<O, I> + Send + Sync + 'static,
{
    DecoderRef::Lazy(Arc::new(supplier))
}
