//! # GlobalDS Core
//!
//! Host contract types for the global-namespace typed DataSet generator.
//!
//! This crate provides:
//! - Status codes and GUIDs exchanged with the host
//! - The fixed-capacity output buffer the host hands to generators
//! - Byte-order-mark detection and text decoding/encoding
//! - The generator capability traits (transform, refactor-notify, site-binding)
//! - Error types shared by the other crates

pub mod buffer;
pub mod encoding;
pub mod error;
pub mod guid;
pub mod host;
pub mod status;
pub mod types;

pub use buffer::{GeneratorOutput, OutputBuffer, ReadBuffer};
pub use encoding::{DecodedText, TextEncoding};
pub use error::{Error, Result};
pub use guid::Guid;
pub use host::{
    Generator, GeneratorProgress, NoProgress, ObjectWithSite, ParameterAddition, ParameterChange,
    RefactorNotify, RefactorTarget, SingleFileGenerator,
};
pub use status::Status;
pub use types::{GenerationRequest, HostObject, ItemId};
