//! # GlobalDS
//!
//! Typed DataSet generator that places its output in the global namespace.
//!
//! The standard typed DataSet generator always wraps generated classes in a
//! namespace derived from the project. GlobalDS wraps that generator, asks it
//! for code in a reserved placeholder namespace, and then strips the
//! placeholder so the classes land in the global namespace.
//!
//! ## Quick Start
//!
//! ```ignore
//! use globalds::prelude::*;
//!
//! globalds::logging::init(None);
//!
//! let hive = load_registry_file("registry.xml".as_ref())?;
//! let activator = ActivatorTable::new().register(
//!     "Microsoft.VSDesigner",
//!     "Microsoft.VSDesigner.CodeGenerator.TypedDataSourceGenerator",
//!     factory,
//! );
//! let resolver = RegistryResolver::new(hive, activator);
//!
//! let mut generator = GlobalDataSetGenerator::new(&GeneratorConfig::default(), &resolver)?;
//! let status = generator.generate(&request, &mut output, &mut NoProgress);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Host contract: status codes, buffers, text encodings, capability traits
//! - [`locator`] - Registry snapshots and delegate resolution
//! - [`codegen`] - Namespace rewriting and the generator itself
//! - [`logging`] - Subscriber setup for the `tracing` output

pub mod logging;
pub mod prelude;

/// Host contract types and capability traits.
pub mod core {
    pub use globalds_core::*;
}

/// Delegate generator resolution.
pub mod locator {
    pub use globalds_locator::*;
}

/// Namespace relocation and the global-namespace generator.
pub mod codegen {
    pub use globalds_codegen::*;
}

// Re-export commonly used items at the crate root
pub use globalds_codegen::{GeneratorConfig, GlobalDataSetGenerator, relocate_default};
pub use globalds_core::{GenerationRequest, GeneratorOutput, Status, TextEncoding};
pub use globalds_locator::{GeneratorResolver, RegistryResolver};
