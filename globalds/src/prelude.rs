//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use globalds::prelude::*;
//! ```

// Core types
pub use globalds_core::error::{Error as CoreError, Result as CoreResult};
pub use globalds_core::{
    GenerationRequest, Generator, GeneratorOutput, GeneratorProgress, Guid, HostObject,
    NoProgress, ObjectWithSite, OutputBuffer, ReadBuffer, RefactorNotify, SingleFileGenerator,
    Status, TextEncoding,
};

// Locator types
pub use globalds_locator::{
    ActivatorTable, GeneratorComponent, GeneratorResolver, LocateError, MemoryRegistry,
    RegistryResolver, ServiceResolver, load_registry_file, parse_registry_xml,
};

// Codegen types
pub use globalds_codegen::{
    CodegenError, GeneratorConfig, GlobalDataSetGenerator, MS_DATASET_GENERATOR_CLSID,
    NamespaceRewriter, relocate,
};
