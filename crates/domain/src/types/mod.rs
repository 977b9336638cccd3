//! Domain types and models
//!
//! Identity and metadata the resolver reasons about. Nothing here knows how
//! methods are invoked; that lives in the core registry.

pub mod marker;
pub mod method;
pub mod type_name;

pub use marker::FactoryMarker;
pub use method::{MethodKind, MethodVisibility};
pub use type_name::TypeName;
