//! Error types for locating the delegate generator.

use globalds_core::{Guid, Status};
use thiserror::Error;

/// Error type for registry snapshot parsing.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed character or entity reference.
    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Unknown element encountered.
    #[error("unknown element '{element}' in context '{context}'")]
    UnknownElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Invalid snapshot structure.
    #[error("invalid registry snapshot: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl ManifestError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an unknown element error.
    pub fn unknown_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

/// Error type for generator resolution.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The registry root holding host versions does not exist.
    #[error("registry key '{root}' not found")]
    RootNotFound {
        /// Registry path that was searched.
        root: String,
    },

    /// No host version registers the generator.
    #[error("unable to find CLSID {{{id}}}")]
    NotFound {
        /// Generator identifier.
        id: Guid,
    },

    /// The generator's registry key lacks a required value.
    #[error("registry key '{path}' has no '{name}' value")]
    MissingValue {
        /// Registry key path.
        path: String,
        /// Value name.
        name: String,
    },

    /// No factory is known for the registered assembly and class.
    #[error("cannot create instance of '{class}' from assembly '{assembly}'")]
    ActivationFailed {
        /// Assembly name as registered.
        assembly: String,
        /// Class name as registered.
        class: String,
    },

    /// The host service provider rejected the query.
    #[error("service query for {{{id}}} failed with status {status}")]
    ServiceQuery {
        /// Generator identifier.
        id: Guid,
        /// Status returned by the host.
        status: Status,
    },

    /// The located component does not implement the generator capability set.
    #[error("component {{{id}}} does not implement the generator capabilities")]
    MissingCapability {
        /// Generator identifier.
        id: Guid,
    },
}

impl LocateError {
    /// Creates a missing value error.
    pub fn missing_value(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self::MissingValue {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Creates an activation error.
    pub fn activation_failed(assembly: impl Into<String>, class: impl Into<String>) -> Self {
        Self::ActivationFailed {
            assembly: assembly.into(),
            class: class.into(),
        }
    }
}
