//! Factory method marker

use serde::{Deserialize, Serialize};

use super::TypeName;

/// Marks a method as the factory method of its declaring type
///
/// An unqualified marker applies to whichever type declares the method. A
/// qualified marker (`applies_to`) only applies when the qualifier equals the
/// declaring type's short name; a blank qualifier counts as unqualified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactoryMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<TypeName>,
}

impl FactoryMarker {
    /// Unqualified marker
    pub fn new() -> Self {
        Self { applies_to: None }
    }

    /// Marker scoped to the type with the given short name
    pub fn for_type(name: impl Into<TypeName>) -> Self {
        Self { applies_to: Some(name.into()) }
    }

    /// Qualifier, if set and non-blank
    pub fn qualifier(&self) -> Option<&TypeName> {
        self.applies_to.as_ref().filter(|name| !name.is_blank())
    }

    /// Whether this marker designates a factory method for `type_name`
    pub fn accepts(&self, type_name: &TypeName) -> bool {
        match self.qualifier() {
            Some(qualifier) => qualifier == type_name,
            None => true,
        }
    }
}
