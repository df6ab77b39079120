//! Decode, rewrite and re-encode raw generator output.

use crate::error::CodegenError;
use crate::namespace::NamespaceRewriter;
use globalds_core::{Error as CoreError, TextEncoding};
use std::borrow::Cow;

/// Output of [`relocate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocated {
    /// Relocated bytes, in the same encoding as the input.
    pub bytes: Vec<u8>,
    /// Encoding detected from the input's byte-order mark.
    pub encoding: TextEncoding,
    /// True if at least one placeholder block was rewritten.
    pub rewritten: bool,
}

/// Relocates the placeholder namespace in raw generator output.
///
/// The bytes are decoded with the encoding named by their byte-order mark
/// (UTF-8 if there is none), rewritten, and encoded again with the same
/// encoding. Output without a placeholder block is returned byte for byte.
///
/// # Arguments
/// * `raw` - Output bytes as reported by the delegate generator
/// * `rewriter` - Rewriter for the placeholder the delegate was given
///
/// # Errors
/// Returns `CodegenError::Core(OutputOverflow)` if the relocated bytes are
/// longer than `raw`, since they must fit in the buffer `raw` came from.
pub fn relocate(raw: &[u8], rewriter: &NamespaceRewriter) -> Result<Relocated, CodegenError> {
    let decoded = TextEncoding::decode(raw);
    if decoded.had_errors {
        tracing::warn!(
            "Generator output is not valid {}; malformed sequences were replaced",
            decoded.encoding
        );
    }

    let (bytes, rewritten) = match rewriter.rewrite(&decoded.text) {
        Cow::Borrowed(_) => (raw.to_vec(), false),
        Cow::Owned(text) => (decoded.encoding.encode(&text), true),
    };

    if bytes.len() > raw.len() {
        return Err(CoreError::OutputOverflow {
            required: bytes.len(),
            capacity: raw.len(),
        }
        .into());
    }

    tracing::debug!(
        "Relocated {} bytes of {} output to {} bytes",
        raw.len(),
        decoded.encoding,
        bytes.len()
    );
    Ok(Relocated {
        bytes,
        encoding: decoded.encoding,
        rewritten,
    })
}
