//! Generic construction of domain entities through their factory methods

mod domain_factory;

pub use domain_factory::DomainFactory;
