//! Capability traits a generator exposes to the host.
//!
//! A generator usable as a drop-in replacement for the host's own generators
//! implements the full capability set:
//! - [`SingleFileGenerator`] to run the transformation
//! - [`RefactorNotify`] to take part in symbol and parameter refactorings
//! - [`ObjectWithSite`] to be bound to the host's site
//!
//! [`Generator`] is the union of the three and is implemented automatically.
//!
//! Calls are serialized by the host; implementations take `&mut self` and need
//! no internal locking.

use crate::buffer::GeneratorOutput;
use crate::guid::Guid;
use crate::status::Status;
use crate::types::{GenerationRequest, HostObject, ItemId};

/// Sink through which a generator reports progress and diagnostics.
pub trait GeneratorProgress {
    /// Reports an error or warning against the input file.
    ///
    /// # Arguments
    /// * `warning` - True for a warning, false for an error
    /// * `level` - Severity level, host-defined
    /// * `message` - Diagnostic text
    /// * `line` - Zero-based line in the input file
    /// * `column` - Zero-based column in the input file
    fn generator_error(
        &mut self,
        warning: bool,
        level: u32,
        message: &str,
        line: u32,
        column: u32,
    ) -> Status;

    /// Reports how much of the generation has completed.
    fn progress(&mut self, complete: u32, total: u32) -> Status;
}

/// Progress sink that discards everything, for hosts that supply none.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl GeneratorProgress for NoProgress {
    fn generator_error(&mut self, _: bool, _: u32, _: &str, _: u32, _: u32) -> Status {
        Status::S_OK
    }

    fn progress(&mut self, _: u32, _: u32) -> Status {
        Status::S_OK
    }
}

/// Transformation capability: turns an input file into generated output.
pub trait SingleFileGenerator {
    /// Returns the extension, leading period included, of the output file.
    ///
    /// # Errors
    /// Returns the host status reported by the generator.
    fn default_extension(&self) -> Result<String, Status>;

    /// Runs the transformation.
    ///
    /// On success the generator fills `output` with a newly allocated buffer
    /// and its byte count. Any non-success status is host-defined.
    fn generate(
        &mut self,
        request: &GenerationRequest,
        output: &mut GeneratorOutput,
        progress: &mut dyn GeneratorProgress,
    ) -> Status;
}

/// The project item a refactoring applies to.
#[derive(Debug, Clone, Copy)]
pub struct RefactorTarget<'a> {
    /// Hierarchy that owns the item.
    pub hierarchy: &'a HostObject,
    /// Item within the hierarchy.
    pub item_id: ItemId,
}

/// A reorder or removal of parameters on a method.
#[derive(Debug, Clone, Copy)]
pub struct ParameterChange<'a> {
    /// Fully qualified name of the method.
    pub rq_name: &'a str,
    /// Indexes of the affected parameters.
    pub param_indexes: &'a [u32],
}

/// An addition of parameters to a method.
#[derive(Debug, Clone, Copy)]
pub struct ParameterAddition<'a> {
    /// Fully qualified name of the method.
    pub rq_name: &'a str,
    /// Indexes at which parameters are inserted.
    pub param_indexes: &'a [u32],
    /// Fully qualified type names of the new parameters.
    pub rq_type_names: &'a [String],
    /// Names of the new parameters.
    pub param_names: &'a [String],
}

/// Refactoring notifications.
///
/// The `on_before_*` calls may add items that must be checked out to
/// `additional_checkouts`.
pub trait RefactorNotify {
    /// Called before a global symbol is renamed.
    fn on_before_global_symbol_renamed(
        &mut self,
        target: RefactorTarget<'_>,
        rq_names: &[String],
        new_name: &str,
        additional_checkouts: &mut Vec<ItemId>,
    ) -> Status;

    /// Called after a global symbol is renamed.
    fn on_global_symbol_renamed(
        &mut self,
        target: RefactorTarget<'_>,
        rq_names: &[String],
        new_name: &str,
    ) -> Status;

    /// Called before parameters are reordered.
    fn on_before_reorder_params(
        &mut self,
        target: RefactorTarget<'_>,
        change: ParameterChange<'_>,
        additional_checkouts: &mut Vec<ItemId>,
    ) -> Status;

    /// Called after parameters are reordered.
    fn on_reorder_params(
        &mut self,
        target: RefactorTarget<'_>,
        change: ParameterChange<'_>,
    ) -> Status;

    /// Called before parameters are removed.
    fn on_before_remove_params(
        &mut self,
        target: RefactorTarget<'_>,
        change: ParameterChange<'_>,
        additional_checkouts: &mut Vec<ItemId>,
    ) -> Status;

    /// Called after parameters are removed.
    fn on_remove_params(
        &mut self,
        target: RefactorTarget<'_>,
        change: ParameterChange<'_>,
    ) -> Status;

    /// Called before parameters are added.
    fn on_before_add_params(
        &mut self,
        target: RefactorTarget<'_>,
        addition: ParameterAddition<'_>,
        additional_checkouts: &mut Vec<ItemId>,
    ) -> Status;

    /// Called after parameters are added.
    fn on_add_params(
        &mut self,
        target: RefactorTarget<'_>,
        addition: ParameterAddition<'_>,
    ) -> Status;
}

/// Site-binding capability.
pub trait ObjectWithSite {
    /// Returns the current site, queried for interface `iid`.
    ///
    /// # Errors
    /// Returns the host status when there is no site or it lacks `iid`.
    fn get_site(&self, iid: &Guid) -> Result<HostObject, Status>;

    /// Binds the object to a site, or unbinds it with `None`.
    fn set_site(&mut self, site: Option<HostObject>);
}

/// The full capability set of a generator.
pub trait Generator: SingleFileGenerator + RefactorNotify + ObjectWithSite {}

impl<T: SingleFileGenerator + RefactorNotify + ObjectWithSite + ?Sized> Generator for T {}
