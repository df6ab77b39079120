//! Generator resolution.
//!
//! The relocator only depends on [`GeneratorResolver`]. Production code
//! plugs in a [`RegistryResolver`] or a
//! [`ServiceResolver`](crate::service::ServiceResolver); tests plug in stubs.

use crate::activator::Activator;
use crate::error::LocateError;
use crate::registry::{HostVersion, RegistryHive};
use globalds_core::{Generator, Guid};

/// Registry root under which each installed host version has a subkey.
pub const VISUAL_STUDIO_ROOT: &str = r"SOFTWARE\Microsoft\VisualStudio";

/// Resolves a generator identifier to a live generator.
pub trait GeneratorResolver {
    /// Finds and instantiates the generator registered under `id`.
    ///
    /// # Errors
    /// Returns `LocateError` if no generator is registered under `id`, or
    /// the registered component cannot be created or lacks a capability.
    fn resolve(&self, id: &Guid) -> Result<Box<dyn Generator>, LocateError>;
}

impl<R: GeneratorResolver + ?Sized> GeneratorResolver for &R {
    fn resolve(&self, id: &Guid) -> Result<Box<dyn Generator>, LocateError> {
        (**self).resolve(id)
    }
}

impl<R: GeneratorResolver + ?Sized> GeneratorResolver for Box<R> {
    fn resolve(&self, id: &Guid) -> Result<Box<dyn Generator>, LocateError> {
        (**self).resolve(id)
    }
}

/// Resolves generators by scanning the per-version `CLSID` keys of a
/// registry hive.
///
/// Versions are searched most recent first. The first version that
/// registers the identifier decides the outcome: its `Assembly` and `Class`
/// values are handed to the [`Activator`], and any failure from there on is
/// returned without trying older versions.
#[derive(Debug)]
pub struct RegistryResolver<H, A> {
    hive: H,
    activator: A,
    root: String,
}

impl<H: RegistryHive, A: Activator> RegistryResolver<H, A> {
    /// Creates a resolver searching [`VISUAL_STUDIO_ROOT`].
    pub fn new(hive: H, activator: A) -> Self {
        Self {
            hive,
            activator,
            root: VISUAL_STUDIO_ROOT.to_string(),
        }
    }

    /// Sets the registry root to search.
    #[must_use]
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Returns the version subkey names under the root, most recent first.
    ///
    /// Subkeys that are not plain decimal versions are skipped; of several
    /// names for the same version the first listed wins.
    ///
    /// # Errors
    /// Returns `RootNotFound` if the root key does not exist.
    pub fn versions(&self) -> Result<Vec<String>, LocateError> {
        let names = self
            .hive
            .subkey_names(&self.root)
            .ok_or_else(|| LocateError::RootNotFound {
                root: self.root.clone(),
            })?;

        let mut versions: Vec<(HostVersion, String)> = Vec::with_capacity(names.len());
        for name in names {
            if let Some(version) = HostVersion::parse(&name)
                && !versions.iter().any(|(v, _)| *v == version)
            {
                versions.push((version, name));
            }
        }
        versions.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(versions.into_iter().map(|(_, name)| name).collect())
    }
}

impl<H: RegistryHive, A: Activator> GeneratorResolver for RegistryResolver<H, A> {
    fn resolve(&self, id: &Guid) -> Result<Box<dyn Generator>, LocateError> {
        let clsid = id.to_braced_string();
        for version in self.versions()? {
            let path = format!(r"{}\{}\CLSID\{}", self.root, version, clsid);
            if !self.hive.key_exists(&path) {
                tracing::debug!("{} not registered for version {}", clsid, version);
                continue;
            }

            let assembly = self
                .hive
                .string_value(&path, "Assembly")
                .ok_or_else(|| LocateError::missing_value(&path, "Assembly"))?;
            let class = self
                .hive
                .string_value(&path, "Class")
                .ok_or_else(|| LocateError::missing_value(&path, "Class"))?;

            let component = self.activator.create_instance(&assembly, &class)?;
            let generator = component
                .into_generator()
                .ok_or(LocateError::MissingCapability { id: *id })?;
            tracing::info!(
                "Resolved generator {} as {} from {} (version {})",
                clsid,
                class,
                assembly,
                version
            );
            return Ok(generator);
        }

        Err(LocateError::NotFound { id: *id })
    }
}
