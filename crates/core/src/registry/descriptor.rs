//! Type descriptors: a type's identity plus its method table

use std::any::TypeId;
use std::sync::Arc;

use entityforge_domain::TypeName;

use super::method::{DeclaredMethod, FactoryMethodRef};

/// A type that declares its own method table
///
/// This is where a type marks its factory method:
///
/// ```
/// use entityforge_core::registry::{DeclaredMethod, FactoryTarget, TypeDescriptor};
/// use entityforge_domain::FactoryMarker;
///
/// pub struct Widget {
///     size: u32,
/// }
///
/// impl Widget {
///     fn create(size: u32) -> Self {
///         Self { size }
///     }
/// }
///
/// impl FactoryTarget for Widget {
///     fn describe() -> TypeDescriptor {
///         TypeDescriptor::builder::<Self>()
///             .method(DeclaredMethod::associated("create", Widget::create).marked(FactoryMarker::new()))
///             .build()
///     }
/// }
///
/// assert_eq!(Widget::describe().name(), "Widget");
/// ```
pub trait FactoryTarget: Sized + 'static {
    fn describe() -> TypeDescriptor;
}

/// Identity and ordered method table of one type
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: TypeName,
    path: &'static str,
    type_id: TypeId,
    methods: Vec<FactoryMethodRef>,
}

impl TypeDescriptor {
    /// Start describing `T`; the short name is derived from its type path
    pub fn builder<T: ?Sized + 'static>() -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            name: TypeName::of::<T>(),
            path: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            methods: Vec::new(),
        }
    }

    /// Short name, used for cache identity
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Fully qualified path as reported by `std::any::type_name`
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// `TypeId` of the described type
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// All methods in declaration order, inherited ones included
    pub fn methods(&self) -> &[FactoryMethodRef] {
        &self.methods
    }

    /// Methods declared by the type itself, in declaration order
    pub fn declared_methods(&self) -> impl Iterator<Item = &FactoryMethodRef> {
        self.methods.iter().filter(|method| !method.is_inherited())
    }

    /// First method with the given name
    pub fn method(&self, name: &str) -> Option<&FactoryMethodRef> {
        self.methods.iter().find(|method| method.name() == name)
    }
}

/// Collects a type's methods in declaration order
#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    name: TypeName,
    path: &'static str,
    type_id: TypeId,
    methods: Vec<DeclaredMethod>,
}

impl TypeDescriptorBuilder {
    /// Override the derived short name
    pub fn name(mut self, name: impl Into<TypeName>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a method; order of calls is declaration order
    pub fn method(mut self, method: DeclaredMethod) -> Self {
        self.methods.push(method);
        self
    }

    /// Finish the descriptor, stamping each method with the declaring type
    pub fn build(self) -> TypeDescriptor {
        let name = self.name;
        // Declaring type follows the final (possibly overridden) name
        let methods = self
            .methods
            .into_iter()
            .map(|method| Arc::new(method.declared_on(name.clone())))
            .collect();

        TypeDescriptor { name, path: self.path, type_id: self.type_id, methods }
    }
}

#[cfg(test)]
mod tests {
    use entityforge_domain::FactoryMarker;

    use super::*;

    struct Gadget;

    fn gadget() -> TypeDescriptor {
        TypeDescriptor::builder::<Gadget>()
            .method(DeclaredMethod::associated("assemble", |_: ()| Gadget))
            .method(DeclaredMethod::associated("clone_from_base", |_: ()| Gadget).inherited())
            .method(DeclaredMethod::associated("make", |_: ()| Gadget).marked(FactoryMarker::new()))
            .build()
    }

    #[test]
    fn test_identity() {
        let descriptor = gadget();
        assert_eq!(descriptor.name(), "Gadget");
        assert!(descriptor.path().ends_with("Gadget"));
        assert_eq!(descriptor.type_id(), TypeId::of::<Gadget>());
    }

    #[test]
    fn test_methods_keep_declaration_order_and_declaring_type() {
        let descriptor = gadget();
        let names: Vec<_> = descriptor.methods().iter().map(|m| m.name()).collect();
        assert_eq!(names, ["assemble", "clone_from_base", "make"]);
        assert!(descriptor.methods().iter().all(|m| m.declaring_type() == "Gadget"));
    }

    #[test]
    fn test_declared_methods_exclude_inherited() {
        let descriptor = gadget();
        let names: Vec<_> = descriptor.declared_methods().map(|m| m.name()).collect();
        assert_eq!(names, ["assemble", "make"]);
    }

    #[test]
    fn test_name_override_applies_to_methods() {
        let descriptor = TypeDescriptor::builder::<Gadget>()
            .method(DeclaredMethod::associated("make", |_: ()| Gadget))
            .name("Contraption")
            .build();
        assert_eq!(descriptor.name(), "Contraption");
        assert_eq!(descriptor.method("make").map(|m| m.declaring_type().as_str()), Some("Contraption"));
        assert!(descriptor.method("missing").is_none());
    }
}
