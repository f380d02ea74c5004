//! Structural paths for locating rejected values in nested input.
//!
//! A path names the field and index steps the object and array decoders took
//! to reach a value, e.g. `users[0].email`. Decoders report errors relative
//! to the value they were handed; each container prepends its own step as
//! the errors bubble outward, so a leaf decoder never knows where it sits.

use std::fmt::{self, Display};

/// One step of a [`JsonPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object field, rendered as `.name`.
    Field(String),
    /// An array index, rendered as `[3]`.
    Index(usize),
}

/// Location of a value relative to the input handed to a decoder.
///
/// Paths grow from the leaf outward: the root path is empty and every
/// `prepend_*` call returns a new path one level further out.
///
/// ```rust
/// use verdict::JsonPath;
///
/// let path = JsonPath::from_field("email")
///     .prepend_index(0)
///     .prepend_field("users");
/// assert_eq!(path.to_string(), "users[0].email");
/// assert!(path.starts_with(&JsonPath::from_field("users")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// The empty path: the decoded input itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// A one-step path to a field of the input.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self::root().prepend_field(name)
    }

    /// This path, nested one field deeper from the outside.
    pub fn prepend_field(&self, name: impl Into<String>) -> Self {
        self.prepend(PathSegment::Field(name.into()))
    }

    /// This path, nested one array element deeper from the outside.
    pub fn prepend_index(&self, index: usize) -> Self {
        self.prepend(PathSegment::Index(index))
    }

    fn prepend(&self, step: PathSegment) -> Self {
        let segments = std::iter::once(step)
            .chain(self.segments.iter().cloned())
            .collect();
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Steps from the outermost to the innermost.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// True when `prefix` is this path or one of its ancestors.
    /// Every path starts with the root path.
    pub fn starts_with(&self, prefix: &JsonPath) -> bool {
        prefix.segments.len() <= self.segments.len()
            && prefix.segments().zip(self.segments()).all(|(a, b)| a == b)
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.segments {
            match step {
                PathSegment::Field(name) if first => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
            first = false;
        }
        Ok(())
    }
}
