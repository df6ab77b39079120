//! # GlobalDS Locator
//!
//! Finds the delegate generator at run time without a compile-time reference
//! to it.
//!
//! This crate provides:
//! - The [`GeneratorResolver`] abstraction the relocator depends on
//! - [`RegistryResolver`], scanning installed host versions in a registry hive
//! - [`ServiceResolver`], querying the host's global service provider
//! - [`MemoryRegistry`] and an XML snapshot loader for registry contents
//! - [`ActivatorTable`] for instantiating components by assembly and class

pub mod activator;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod resolver;
pub mod service;

pub use activator::{Activator, ActivatorTable, ComponentObject, GeneratorComponent};
pub use error::{LocateError, ManifestError};
pub use manifest::{load_registry_file, parse_registry_xml};
pub use registry::{HostVersion, MemoryRegistry, RegistryHive};
pub use resolver::{GeneratorResolver, RegistryResolver, VISUAL_STUDIO_ROOT};
pub use service::{HostServiceProvider, ServiceProviderAdapter, ServiceResolver};

#[cfg(test)]
pub(crate) mod test_support;
