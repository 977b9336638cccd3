//! Registry of described types

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use entityforge_domain::TypeName;
use parking_lot::RwLock;
use tracing::{debug, warn};

use super::descriptor::{FactoryTarget, TypeDescriptor};

#[derive(Debug, Default)]
struct Tables {
    by_id: HashMap<TypeId, Arc<TypeDescriptor>>,
    by_name: HashMap<TypeName, Arc<TypeDescriptor>>,
}

/// Descriptors for every type the application constructs through a factory
///
/// Built once at startup and shared. Lookups by Rust type are memoised by
/// `TypeId`; lookups by short name see the most recent registration for that
/// name.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    tables: RwLock<Tables>,
}

impl TypeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe and register `T`, replacing any earlier descriptor for it
    pub fn register<T: FactoryTarget>(&self) -> Arc<TypeDescriptor> {
        self.register_descriptor(T::describe())
    }

    /// Register a prebuilt descriptor
    pub fn register_descriptor(&self, descriptor: TypeDescriptor) -> Arc<TypeDescriptor> {
        let descriptor = Arc::new(descriptor);
        let mut tables = self.tables.write();

        if let Some(existing) = tables.by_name.get(descriptor.name()) {
            if existing.type_id() != descriptor.type_id() {
                warn!(
                    type_name = %descriptor.name(),
                    existing = existing.path(),
                    replacement = descriptor.path(),
                    "Two registered types share a short name"
                );
            }
        }

        tables.by_id.insert(descriptor.type_id(), Arc::clone(&descriptor));
        tables.by_name.insert(descriptor.name().clone(), Arc::clone(&descriptor));
        debug!(
            type_name = %descriptor.name(),
            methods = descriptor.methods().len(),
            "Registered type"
        );

        descriptor
    }

    /// Descriptor for `T`, registering it on first use
    pub fn descriptor_of<T: FactoryTarget>(&self) -> Arc<TypeDescriptor> {
        if let Some(descriptor) = self.tables.read().by_id.get(&TypeId::of::<T>()) {
            return Arc::clone(descriptor);
        }
        self.register::<T>()
    }

    /// Descriptor registered under a short name
    pub fn get(&self, name: &TypeName) -> Option<Arc<TypeDescriptor>> {
        self.tables.read().by_name.get(name).cloned()
    }

    /// Whether `T` has been registered
    pub fn contains<T: 'static>(&self) -> bool {
        self.tables.read().by_id.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.tables.read().by_id.len()
    }

    /// Whether no type has been registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
