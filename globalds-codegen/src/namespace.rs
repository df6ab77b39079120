//! Placeholder namespace rewriting.
//!
//! The delegate generator wraps everything it emits in
//! `namespace <placeholder> { ... }`. Rewriting removes that wrapper, or for
//! `namespace <placeholder>.Sub.Path { ... }` strips just the placeholder
//! prefix, leaving the code relative to the global namespace.
//!
//! Matching is textual: a block starts with `namespace` at the beginning of a
//! line and ends at the first `}` that also starts a line. Generated code
//! indents everything inside the namespace, so this holds for the delegate's
//! output, but a column-zero `}` inside the block would end it early.

use crate::error::CodegenError;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Placeholder namespace handed to the delegate generator.
pub const DEFAULT_PLACEHOLDER: &str = "GlobalDataSetGeneratorTempNamespace";

/// Rewrites placeholder namespace blocks in generated C# source.
#[derive(Debug, Clone)]
pub struct NamespaceRewriter {
    placeholder: String,
    pattern: Regex,
}

impl NamespaceRewriter {
    /// Creates a rewriter for `placeholder`.
    ///
    /// # Errors
    /// Returns `InvalidPlaceholder` unless `placeholder` is a plain identifier
    /// (`[A-Za-z_][A-Za-z0-9_]*`).
    pub fn new(placeholder: &str) -> Result<Self, CodegenError> {
        if !is_identifier(placeholder) {
            return Err(CodegenError::invalid_placeholder(placeholder));
        }
        let pattern = Regex::new(&format!(
            r"(?ms)^namespace\s+{}(?:\.(\S+))?\s*\{{(.*?)^\}}",
            regex::escape(placeholder)
        ))?;
        Ok(Self {
            placeholder: placeholder.to_string(),
            pattern,
        })
    }

    /// Returns the placeholder namespace.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns the number of placeholder blocks in `code`.
    #[must_use]
    pub fn count_blocks(&self, code: &str) -> usize {
        self.pattern.find_iter(code).count()
    }

    /// Rewrites every placeholder block in `code`.
    ///
    /// - `namespace P { body }` becomes `body`
    /// - `namespace P.Sub { body }` becomes `namespace Sub { body }`
    ///
    /// Returns `Cow::Borrowed` when `code` has no placeholder block.
    #[must_use]
    pub fn rewrite<'t>(&self, code: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(code, |caps: &Captures<'_>| {
            let body = caps.get(2).map_or("", |m| m.as_str());
            match caps.get(1) {
                Some(inner) => format!("namespace {} {{{}}}", inner.as_str(), body),
                None => body.to_string(),
            }
        })
    }
}

impl Default for NamespaceRewriter {
    fn default() -> Self {
        // The default placeholder is a valid identifier, so neither check can fail.
        Self::new(DEFAULT_PLACEHOLDER).unwrap_or_else(|e| panic!("BUG: {e}"))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
