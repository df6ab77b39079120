//! Request and handle types passed across the host boundary.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Identifier of an item within a host project hierarchy.
pub type ItemId = u32;

/// A single generation request from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    input_path: String,
    input_contents: String,
    default_namespace: String,
}

impl GenerationRequest {
    /// Creates a new request.
    ///
    /// # Arguments
    /// * `input_path` - Full path of the input file
    /// * `input_contents` - Contents of the input file
    /// * `default_namespace` - Namespace the host asks the output to use
    pub fn new(
        input_path: impl Into<String>,
        input_contents: impl Into<String>,
        default_namespace: impl Into<String>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            input_contents: input_contents.into(),
            default_namespace: default_namespace.into(),
        }
    }

    /// Returns the full path of the input file.
    #[must_use]
    pub fn input_path(&self) -> &str {
        &self.input_path
    }

    /// Returns the contents of the input file.
    #[must_use]
    pub fn input_contents(&self) -> &str {
        &self.input_contents
    }

    /// Returns the namespace requested by the host.
    #[must_use]
    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    /// Returns a copy of this request targeting a different namespace.
    #[must_use]
    pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
        Self {
            input_path: self.input_path.clone(),
            input_contents: self.input_contents.clone(),
            default_namespace: namespace.into(),
        }
    }
}

/// Opaque, shared reference to a host-owned object such as a project
/// hierarchy or a site.
///
/// Generators never look inside; they only pass the handle along. Equality
/// is identity.
#[derive(Clone)]
pub struct HostObject(Arc<dyn Any + Send + Sync>);

impl HostObject {
    /// Wraps a host value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns the wrapped value if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns true if both handles refer to the same host object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for HostObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for HostObject {}

impl fmt::Debug for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostObject")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
