//! Component activation by assembly and class name.

use crate::error::LocateError;
use globalds_core::Generator;
use std::collections::HashMap;
use std::fmt;

/// A component instantiated or queried from the host.
///
/// Casting to the generator capability set consumes the component; when the
/// cast fails the component is dropped with it.
pub trait ComponentObject {
    /// Returns the component as a generator, or `None` if it lacks any of the
    /// generator capabilities.
    fn into_generator(self: Box<Self>) -> Option<Box<dyn Generator>>;
}

/// A component that implements the full generator capability set.
#[derive(Debug)]
pub struct GeneratorComponent<G>(pub G);

impl<G: Generator + 'static> GeneratorComponent<G> {
    /// Boxes `generator` as a component.
    pub fn boxed(generator: G) -> Box<dyn ComponentObject> {
        Box::new(Self(generator))
    }
}

impl<G: Generator + 'static> ComponentObject for GeneratorComponent<G> {
    fn into_generator(self: Box<Self>) -> Option<Box<dyn Generator>> {
        Some(Box::new(self.0))
    }
}

/// Creates component instances from the assembly and class names stored in
/// the registry.
pub trait Activator {
    /// Instantiates `class` from `assembly`.
    ///
    /// # Errors
    /// Returns `LocateError::ActivationFailed` if the pair is unknown or the
    /// component cannot be created.
    fn create_instance(
        &self,
        assembly: &str,
        class: &str,
    ) -> Result<Box<dyn ComponentObject>, LocateError>;
}

type Factory = Box<dyn Fn() -> Box<dyn ComponentObject>>;

/// Activator backed by a table of factories.
///
/// Assemblies are matched by simple name (the text before the first `,`),
/// ignoring case; class names are matched exactly.
#[derive(Default)]
pub struct ActivatorTable {
    factories: HashMap<(String, String), Factory>,
}

impl ActivatorTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory for `class` in `assembly`.
    #[must_use]
    pub fn register<F>(mut self, assembly: &str, class: &str, factory: F) -> Self
    where
        F: Fn() -> Box<dyn ComponentObject> + 'static,
    {
        self.factories
            .insert(table_key(assembly, class), Box::new(factory));
        self
    }

    /// Returns the number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if no factories are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Activator for ActivatorTable {
    fn create_instance(
        &self,
        assembly: &str,
        class: &str,
    ) -> Result<Box<dyn ComponentObject>, LocateError> {
        let factory = self
            .factories
            .get(&table_key(assembly, class))
            .ok_or_else(|| LocateError::activation_failed(assembly, class))?;
        Ok(factory())
    }
}

impl fmt::Debug for ActivatorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivatorTable")
            .field("factories", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn table_key(assembly: &str, class: &str) -> (String, String) {
    let simple_name = assembly.split(',').next().unwrap_or(assembly).trim();
    (simple_name.to_lowercase(), class.to_string())
}
