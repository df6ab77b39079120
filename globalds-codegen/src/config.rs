//! Generator configuration.

use crate::generator::MS_DATASET_GENERATOR_CLSID;
use crate::namespace::DEFAULT_PLACEHOLDER;
use globalds_core::Guid;

/// Configuration for a [`GlobalDataSetGenerator`](crate::GlobalDataSetGenerator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    delegate_clsid: Guid,
    placeholder_namespace: String,
}

impl GeneratorConfig {
    /// Returns a builder starting from the default configuration.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Returns the identifier of the generator to delegate to.
    #[must_use]
    pub fn delegate_clsid(&self) -> &Guid {
        &self.delegate_clsid
    }

    /// Returns the namespace handed to the delegate in place of the host's.
    #[must_use]
    pub fn placeholder_namespace(&self) -> &str {
        &self.placeholder_namespace
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfigBuilder::new().build()
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct GeneratorConfigBuilder {
    delegate_clsid: Guid,
    placeholder_namespace: String,
}

impl GeneratorConfigBuilder {
    /// Creates a builder delegating to the typed DataSet generator with the
    /// default placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delegate_clsid: MS_DATASET_GENERATOR_CLSID,
            placeholder_namespace: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Sets the identifier of the generator to delegate to.
    #[must_use]
    pub fn delegate_clsid(mut self, clsid: Guid) -> Self {
        self.delegate_clsid = clsid;
        self
    }

    /// Sets the placeholder namespace.
    ///
    /// It is validated when the generator is created.
    #[must_use]
    pub fn placeholder_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.placeholder_namespace = namespace.into();
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig {
            delegate_clsid: self.delegate_clsid,
            placeholder_namespace: self.placeholder_namespace,
        }
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
