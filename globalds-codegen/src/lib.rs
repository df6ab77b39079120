//! # GlobalDS Codegen
//!
//! Wraps the typed DataSet generator so its output lands in the global
//! namespace.
//!
//! This crate provides:
//! - [`NamespaceRewriter`], which hoists or re-homes the placeholder namespace
//! - [`relocate`], the decode/rewrite/encode pipeline over raw output bytes
//! - [`GlobalDataSetGenerator`], the drop-in generator that ties it together
//! - [`GeneratorConfig`] for choosing the delegate and placeholder

pub mod config;
pub mod error;
pub mod generator;
pub mod namespace;
pub mod relocate;

pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::CodegenError;
pub use generator::{
    GLOBAL_DATASET_GENERATOR_CLSID, GlobalDataSetGenerator, MS_DATASET_GENERATOR_CLSID,
};
pub use namespace::{DEFAULT_PLACEHOLDER, NamespaceRewriter};
pub use relocate::{Relocated, relocate};

/// Relocates raw generator output produced with the default placeholder.
///
/// # Arguments
/// * `raw` - Output bytes as produced by the delegate generator
///
/// # Returns
/// The relocated bytes, in the encoding of `raw`.
///
/// # Errors
/// Returns `CodegenError` if the relocated output would be larger than `raw`.
pub fn relocate_default(raw: &[u8]) -> Result<Vec<u8>, CodegenError> {
    let rewriter = NamespaceRewriter::new(DEFAULT_PLACEHOLDER)?;
    Ok(relocate(raw, &rewriter)?.bytes)
}
