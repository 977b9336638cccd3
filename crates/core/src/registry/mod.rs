//! Type registry
//!
//! Types describe their own method tables through [`FactoryTarget`]; the
//! [`TypeRegistry`] collects those descriptors once so the resolver can scan
//! them. A [`DeclaredMethod`] carries the metadata the resolver filters on
//! (kind, visibility, inherited flag, marker) and a type-erased invoker.

mod descriptor;
mod method;
mod types;

pub use descriptor::{FactoryTarget, TypeDescriptor, TypeDescriptorBuilder};
pub use method::{DeclaredMethod, FactoryMethodRef, InvocationError};
pub use types::TypeRegistry;
