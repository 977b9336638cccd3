//! Fixture entities with non-public constructors

use entityforge_core::{DeclaredMethod, FactoryTarget, TypeDescriptor};
use entityforge_domain::FactoryMarker;

/// One unqualified marked factory method
#[derive(Debug, PartialEq)]
pub struct Widget {
    size: u32,
}

impl Widget {
    fn new(size: u32) -> Self {
        Self { size }
    }

    fn create(size: u32) -> Self {
        Self::new(size)
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

impl FactoryTarget for Widget {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Self>()
            .method(DeclaredMethod::associated("new", Widget::new).public())
            .method(DeclaredMethod::associated("create", Widget::create).marked(FactoryMarker::new()))
            .build()
    }
}

/// Marked method qualified for a different type
#[derive(Debug, PartialEq)]
pub struct Gadget;

impl FactoryTarget for Gadget {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Self>()
            .method(
                DeclaredMethod::associated("build", |_: ()| Gadget)
                    .marked(FactoryMarker::for_type("OtherType")),
            )
            .build()
    }
}

/// Methods, none of them marked
#[derive(Debug, PartialEq)]
pub struct Plain;

impl FactoryTarget for Plain {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Self>()
            .method(DeclaredMethod::associated("make", |_: ()| Plain))
            .method(DeclaredMethod::receiver("duplicate", |_: &Plain, _: ()| Plain))
            .build()
    }
}

/// Marked methods that are either public or inherited
#[derive(Debug, PartialEq)]
pub struct Derived {
    origin: &'static str,
}

impl Derived {
    pub fn origin(&self) -> &'static str {
        self.origin
    }
}

impl FactoryTarget for Derived {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Self>()
            .method(
                DeclaredMethod::associated("from_base", |_: ()| Derived { origin: "base" })
                    .inherited()
                    .marked(FactoryMarker::new()),
            )
            .method(
                DeclaredMethod::associated("open", |_: ()| Derived { origin: "public" })
                    .public()
                    .marked(FactoryMarker::new()),
            )
            .build()
    }
}

/// Two qualifying methods; the first declared one is the factory method
#[derive(Debug, PartialEq)]
pub struct Ledger {
    opened_by: String,
}

impl Ledger {
    pub fn opened_by(&self) -> &str {
        &self.opened_by
    }
}

impl FactoryTarget for Ledger {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<Self>()
            .method(
                DeclaredMethod::associated("open", |owner: String| Ledger { opened_by: owner })
                    .marked(FactoryMarker::for_type("Ledger")),
            )
            .method(
                DeclaredMethod::associated("restore", |owner: String| Ledger {
                    opened_by: format!("restored:{owner}"),
                })
                .marked(FactoryMarker::new()),
            )
            .build()
    }
}
