//! Method metadata

use serde::{Deserialize, Serialize};

use crate::impl_domain_str_conversions;

/// How a method is called
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    /// No receiver (`Type::create(..)`)
    Associated,
    /// Takes `self` (`value.create(..)`)
    Receiver,
}

impl_domain_str_conversions!(MethodKind {
    Associated => "associated",
    Receiver => "receiver",
});

/// Method visibility as seen from outside the declaring type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodVisibility {
    Public,
    #[default]
    NonPublic,
}

impl_domain_str_conversions!(MethodVisibility {
    Public => "public",
    NonPublic => "non_public",
});

impl MethodVisibility {
    /// Whether the method is part of the public surface
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}
