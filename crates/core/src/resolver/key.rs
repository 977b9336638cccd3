//! Cache keys for resolved factory methods

use std::fmt;

use entityforge_common::cache::CacheItem;
use entityforge_domain::constants::FACTORY_METHOD_KEY_SUFFIX;
use entityforge_domain::TypeName;

/// Key under which a type's factory method is cached
///
/// Keys are built from the short type name, so two types with the same short
/// name share a key within one cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key from a preformatted string
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// `"{type_name}.FactoryMethod"`
    pub fn factory_method(type_name: &TypeName) -> Self {
        Self(format!("{type_name}.{FACTORY_METHOD_KEY_SUFFIX}"))
    }

    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CacheItem for CacheKey {
    fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
