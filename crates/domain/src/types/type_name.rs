//! Short type names used as cache identity

use std::fmt;

use serde::{Deserialize, Serialize};

/// Short (unqualified) name of a type, e.g. `Widget`
///
/// Two types with the same short name in different modules compare equal.
/// Callers that need full identity should keep the path alongside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Wrap an already short name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Short name of `T`, with module path and generic arguments removed
    pub fn of<T: ?Sized>() -> Self {
        Self::from_path(std::any::type_name::<T>())
    }

    /// Derives the short name from a fully qualified path
    ///
    /// `app::model::Widget<alloc::string::String>` becomes `Widget`.
    pub fn from_path(path: &str) -> Self {
        let without_generics = path.split('<').next().unwrap_or(path);
        let short = without_generics.rsplit("::").next().unwrap_or(without_generics);
        Self(short.trim().to_string())
    }

    /// Name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the name is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Consume into the owned string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TypeName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
