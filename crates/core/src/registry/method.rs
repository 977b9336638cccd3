//! Declared methods and type-erased invocation

use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use entityforge_common::cache::CacheItem;
use entityforge_domain::{EntityForgeError, FactoryMarker, MethodKind, MethodVisibility, TypeName};
use thiserror::Error;

/// Shared handle to a declared method; this is what the resolver caches
pub type FactoryMethodRef = Arc<DeclaredMethod>;

type Erased = Box<dyn Any>;
type ErasedReceiver<'a> = Option<&'a (dyn Any + 'static)>;
type Invoker =
    Arc<dyn Fn(ErasedReceiver<'_>, Erased) -> Result<Erased, InvocationError> + Send + Sync>;

/// Failure to call a declared method through its erased signature
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    #[error("method '{method}' expects arguments of type {expected}, got {actual}")]
    ArgumentMismatch { method: String, expected: &'static str, actual: &'static str },

    #[error("method '{method}' returns {actual}, not {expected}")]
    ReturnMismatch { method: String, expected: &'static str, actual: &'static str },

    #[error("method '{method}' takes a receiver; call it with invoke_on")]
    ReceiverRequired { method: String },

    #[error("method '{method}' expects a receiver of type {expected}")]
    ReceiverMismatch { method: String, expected: &'static str },
}

impl From<InvocationError> for EntityForgeError {
    fn from(err: InvocationError) -> Self {
        EntityForgeError::Invocation(err.to_string())
    }
}

/// One entry of a type's method table
///
/// Methods default to non-public, non-inherited and unmarked. The declaring
/// type is filled in when the method is added to a
/// [`TypeDescriptor`](super::TypeDescriptor).
///
/// # Example
/// ```
/// use entityforge_core::registry::DeclaredMethod;
/// use entityforge_domain::FactoryMarker;
///
/// let create = DeclaredMethod::associated("create", |n: i32| n * 2).marked(FactoryMarker::new());
/// assert_eq!(create.invoke::<i32, i32>(21).unwrap(), 42);
/// ```
#[derive(Clone)]
pub struct DeclaredMethod {
    name: String,
    declaring_type: TypeName,
    kind: MethodKind,
    visibility: MethodVisibility,
    inherited: bool,
    marker: Option<FactoryMarker>,
    parameter_type: &'static str,
    return_type: &'static str,
    invoker: Invoker,
}

impl DeclaredMethod {
    /// Method without a receiver, called as `Type::name(args)`
    ///
    /// Several parameters are passed as a tuple.
    pub fn associated<A, R, F>(name: impl Into<String>, f: F) -> Self
    where
        A: 'static,
        R: 'static,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let name = name.into();
        let method = name.clone();
        let invoker: Invoker = Arc::new(
            move |_receiver: ErasedReceiver<'_>, args: Erased| -> Result<Erased, InvocationError> {
                let args = downcast_args::<A>(&method, args)?;
                Ok(Box::new(f(args)) as Erased)
            },
        );

        Self::from_parts(name, MethodKind::Associated, type_name::<A>(), type_name::<R>(), invoker)
    }

    /// Method taking `&S`, called as `value.name(args)`
    pub fn receiver<S, A, R, F>(name: impl Into<String>, f: F) -> Self
    where
        S: 'static,
        A: 'static,
        R: 'static,
        F: Fn(&S, A) -> R + Send + Sync + 'static,
    {
        let name = name.into();
        let method = name.clone();
        let invoker: Invoker = Arc::new(
            move |receiver: ErasedReceiver<'_>, args: Erased| -> Result<Erased, InvocationError> {
                let receiver = receiver
                    .ok_or_else(|| InvocationError::ReceiverRequired { method: method.clone() })?;
                let receiver = receiver.downcast_ref::<S>().ok_or_else(|| {
                    InvocationError::ReceiverMismatch {
                        method: method.clone(),
                        expected: type_name::<S>(),
                    }
                })?;
                let args = downcast_args::<A>(&method, args)?;
                Ok(Box::new(f(receiver, args)) as Erased)
            },
        );

        Self::from_parts(name, MethodKind::Receiver, type_name::<A>(), type_name::<R>(), invoker)
    }

    fn from_parts(
        name: String,
        kind: MethodKind,
        parameter_type: &'static str,
        return_type: &'static str,
        invoker: Invoker,
    ) -> Self {
        Self {
            name,
            declaring_type: TypeName::new(""),
            kind,
            visibility: MethodVisibility::NonPublic,
            inherited: false,
            marker: None,
            parameter_type,
            return_type,
            invoker,
        }
    }

    /// Make the method public
    pub fn public(mut self) -> Self {
        self.visibility = MethodVisibility::Public;
        self
    }

    /// Make the method non-public (the default)
    pub fn non_public(mut self) -> Self {
        self.visibility = MethodVisibility::NonPublic;
        self
    }

    /// Flag the method as inherited from a base type
    pub fn inherited(mut self) -> Self {
        self.inherited = true;
        self
    }

    /// Attach a factory marker
    pub fn marked(mut self, marker: FactoryMarker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub(crate) fn declared_on(mut self, type_name: TypeName) -> Self {
        self.declaring_type = type_name;
        self
    }

    /// Method name as declared
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short name of the type that declares the method
    pub fn declaring_type(&self) -> &TypeName {
        &self.declaring_type
    }

    /// Associated or receiver
    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    /// Declared visibility
    pub fn visibility(&self) -> MethodVisibility {
        self.visibility
    }

    /// Whether the entry was inherited from a parent type
    pub fn is_inherited(&self) -> bool {
        self.inherited
    }

    /// Factory marker, if the method carries one
    pub fn marker(&self) -> Option<&FactoryMarker> {
        self.marker.as_ref()
    }

    /// Parameter type as reported by `std::any::type_name`
    pub fn parameter_type(&self) -> &'static str {
        self.parameter_type
    }

    /// Return type as reported by `std::any::type_name`
    pub fn return_type(&self) -> &'static str {
        self.return_type
    }

    /// Call an associated method
    ///
    /// # Errors
    /// Returns [`InvocationError`] when `A` or `T` do not match the declared
    /// signature, or when the method needs a receiver.
    pub fn invoke<A: 'static, T: 'static>(&self, args: A) -> Result<T, InvocationError> {
        self.call::<A, T>(None, args)
    }

    /// Call a receiver method on `receiver`
    ///
    /// Associated methods ignore the receiver.
    ///
    /// # Errors
    /// Returns [`InvocationError`] on a receiver, argument or return type
    /// mismatch.
    pub fn invoke_on<S: 'static, A: 'static, T: 'static>(
        &self,
        receiver: &S,
        args: A,
    ) -> Result<T, InvocationError> {
        self.call::<A, T>(Some(receiver as &(dyn Any + 'static)), args)
    }

    fn call<A: 'static, T: 'static>(
        &self,
        receiver: ErasedReceiver<'_>,
        args: A,
    ) -> Result<T, InvocationError> {
        let output = (self.invoker)(receiver, Box::new(args)).map_err(|err| match err {
            InvocationError::ArgumentMismatch { method, expected, .. } => {
                InvocationError::ArgumentMismatch { method, expected, actual: type_name::<A>() }
            }
            other => other,
        })?;

        output.downcast::<T>().map(|value| *value).map_err(|_| InvocationError::ReturnMismatch {
            method: self.name.clone(),
            expected: type_name::<T>(),
            actual: self.return_type,
        })
    }
}

// The caller's argument type is filled in by `DeclaredMethod::call`
fn downcast_args<A: 'static>(method: &str, args: Erased) -> Result<A, InvocationError> {
    args.downcast::<A>().map(|args| *args).map_err(|_| InvocationError::ArgumentMismatch {
        method: method.to_string(),
        expected: type_name::<A>(),
        actual: "unknown",
    })
}

impl CacheItem for DeclaredMethod {
    fn is_blank(&self) -> bool {
        self.name.is_empty()
    }
}

/// Methods are equal when their metadata and signature agree
impl PartialEq for DeclaredMethod {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.declaring_type == other.declaring_type
            && self.kind == other.kind
            && self.visibility == other.visibility
            && self.inherited == other.inherited
            && self.marker == other.marker
            && self.parameter_type == other.parameter_type
            && self.return_type == other.return_type
    }
}

impl Eq for DeclaredMethod {}

impl fmt::Debug for DeclaredMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclaredMethod")
            .field("name", &self.name)
            .field("declaring_type", &self.declaring_type)
            .field("kind", &self.kind)
            .field("visibility", &self.visibility)
            .field("inherited", &self.inherited)
            .field("marker", &self.marker)
            .field("signature", &format_args!("fn({}) -> {}", self.parameter_type, self.return_type))
            .finish_non_exhaustive()
    }
}

impl fmt::Display for DeclaredMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.declaring_type.is_blank() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}::{}", self.declaring_type, self.name)
        }
    }
}
