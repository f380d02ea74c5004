//! Decoder registry for named decoder storage and by-name references.
//!
//! This module provides the [`DecoderRegistry`] type that stores named
//! decoders and hands out references that are looked up each time they
//! run, so decoders can mention each other in any order, including
//! mutually recursive ones.

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Weak};

use crate::decoder::Decoder;
use crate::error::DecodeError;
use crate::result::{fail, DecodeResult};

/// Type alias for the decoder storage map.
type DecoderMap = RwLock<HashMap<String, Decoder<Value>>>;

/// A thread-safe registry of named `Value -> Value` decoders.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can decode concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// Clones share the same storage.
///
/// # Example
///
/// ```rust
/// use verdict::{DecoderRegistry, Decoders};
/// use serde_json::{json, Value};
///
/// let registry = DecoderRegistry::new();
///
/// registry.register("Employee", Decoders::object()
///     .field("name", Decoders::string())
///     .field("manager", registry.reference("Employee").optional())
///     .build()
///     .map(Value::Object)
/// ).unwrap();
///
/// let boss = json!({"name": "Ada", "manager": {"name": "Grace"}});
/// assert!(registry.decode("Employee", &boss).unwrap().is_success());
/// ```
#[derive(Clone)]
pub struct DecoderRegistry {
    decoders: Arc<DecoderMap>,
    referenced: Arc<Mutex<BTreeSet<String>>>,
}

impl DecoderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            decoders: Arc::new(RwLock::new(HashMap::new())),
            referenced: Arc::new(Mutex::new(BTreeSet::new())),
        }
    }

    /// Registers a decoder under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{DecoderRegistry, Decoders};
    /// use serde_json::Value;
    ///
    /// let registry = DecoderRegistry::new();
    /// registry.register("Email", Decoders::string().map(Value::String)).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register("Email", Decoders::string().map(Value::String)).is_err());
    /// ```
    pub fn register(
        &self,
        name: impl Into<String>,
        decoder: Decoder<Value>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut decoders = self.decoders.write();

        if decoders.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(%name, "registered decoder");
        decoders.insert(name, decoder);
        Ok(())
    }

    /// Retrieves a decoder by name.
    pub fn get(&self, name: &str) -> Option<Decoder<Value>> {
        self.decoders.read().get(name).cloned()
    }

    /// Returns true if a decoder is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.decoders.read().contains_key(name)
    }

    /// Returns a decoder that looks `name` up each time it runs.
    ///
    /// The name does not have to be registered yet. If it still is not when
    /// the reference runs, the reference fails with a single
    /// `missing_reference` error. The reference does not keep the registry
    /// alive.
    pub fn reference(&self, name: impl Into<String>) -> Decoder<Value> {
        let name = name.into();
        self.referenced.lock().insert(name.clone());

        let decoders: Weak<DecoderMap> = Arc::downgrade(&self.decoders);
        Decoder::new(move |value: &Value| {
            let target = decoders
                .upgrade()
                .and_then(|decoders| decoders.read().get(&name).cloned());

            match target {
                Some(decoder) => decoder.parse(value),
                None => {
                    tracing::debug!(%name, "unresolved decoder reference");
                    missing_reference(&name, value)
                }
            }
        })
    }

    /// Names handed to [`reference`](Self::reference) that are not registered,
    /// sorted and without duplicates.
    ///
    /// Call this after all decoders are registered to catch typos.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{DecoderRegistry, Decoders};
    /// use serde_json::Value;
    ///
    /// let registry = DecoderRegistry::new();
    /// registry.register("User", Decoders::object()
    ///     .field("id", registry.reference("UserId"))  // UserId not registered!
    ///     .build()
    ///     .map(Value::Object)
    /// ).unwrap();
    ///
    /// assert_eq!(registry.unresolved_references(), vec!["UserId"]);
    /// ```
    pub fn unresolved_references(&self) -> Vec<String> {
        let decoders = self.decoders.read();
        self.referenced
            .lock()
            .iter()
            .filter(|name| !decoders.contains_key(*name))
            .cloned()
            .collect()
    }

    /// Decodes a value with a named decoder.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DecoderNotFound` if the name doesn't exist.
    pub fn decode(&self, name: &str, value: &Value) -> Result<DecodeResult<Value>, RegistryError> {
        let decoder = self
            .get(name)
            .ok_or_else(|| RegistryError::DecoderNotFound(name.to_string()))?;
        Ok(decoder.parse(value))
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<String> = self.decoders.read().keys().cloned().collect();
        names.sort();
        f.debug_struct("DecoderRegistry").field("decoders", &names).finish()
    }
}

fn missing_reference(name: &str, value: &Value) -> DecodeResult<Value> {
    fail(
        DecodeError::new(value.clone(), format!("Unknown decoder reference {}", name))
            .with_code("missing_reference"),
    )
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a decoder with a name that already exists.
    #[error("decoder '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to decode with a name that doesn't exist.
    #[error("decoder '{0}' not found")]
    DecoderNotFound(String),
}
