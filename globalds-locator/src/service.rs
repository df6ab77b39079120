//! Resolution through the host's global service provider.

use crate::activator::ComponentObject;
use crate::error::LocateError;
use crate::resolver::GeneratorResolver;
use globalds_core::{Generator, Guid, Status};
use std::sync::Arc;

/// The host-wide service provider.
pub trait HostServiceProvider {
    /// Queries the provider for the component registered under `service`.
    ///
    /// # Errors
    /// Returns the host status when no such component is available.
    fn query_service(&self, service: &Guid) -> Result<Box<dyn ComponentObject>, Status>;
}

/// Scoped wrapper around the host's service provider.
///
/// Holds a reference to the provider for the duration of one lookup and
/// releases it when dropped.
pub struct ServiceProviderAdapter {
    provider: Arc<dyn HostServiceProvider>,
}

impl ServiceProviderAdapter {
    /// Acquires a reference to `provider`.
    pub fn new(provider: Arc<dyn HostServiceProvider>) -> Self {
        Self { provider }
    }

    /// Queries the wrapped provider.
    ///
    /// # Errors
    /// Returns the host status when the query fails.
    pub fn get_service(&self, service: &Guid) -> Result<Box<dyn ComponentObject>, Status> {
        self.provider.query_service(service)
    }
}

impl Drop for ServiceProviderAdapter {
    fn drop(&mut self) {
        tracing::trace!("Releasing service provider adapter");
    }
}

/// Resolves generators by querying the host service provider.
pub struct ServiceResolver {
    global: Arc<dyn HostServiceProvider>,
}

impl ServiceResolver {
    /// Creates a resolver over the host's global service provider.
    pub fn new(global: Arc<dyn HostServiceProvider>) -> Self {
        Self { global }
    }
}

impl GeneratorResolver for ServiceResolver {
    fn resolve(&self, id: &Guid) -> Result<Box<dyn Generator>, LocateError> {
        let adapter = ServiceProviderAdapter::new(Arc::clone(&self.global));
        tracing::debug!("Querying host service provider for {{{}}}", id);
        let component = adapter
            .get_service(id)
            .map_err(|status| LocateError::ServiceQuery { id: *id, status })?;
        let generator = component
            .into_generator()
            .ok_or(LocateError::MissingCapability { id: *id })?;
        tracing::info!("Resolved generator {{{}}} from host service provider", id);
        Ok(generator)
    }
}
