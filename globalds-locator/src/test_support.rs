//! Stub components for resolver tests.

use crate::activator::ComponentObject;
use globalds_core::{
    Generator, GenerationRequest, GeneratorOutput, GeneratorProgress, Guid, HostObject, ItemId,
    ObjectWithSite, ParameterAddition, ParameterChange, RefactorNotify, RefactorTarget,
    SingleFileGenerator, Status,
};

pub(crate) const DATASET_GENERATOR: Guid = Guid::from_fields(
    0xE76D_53CC,
    0x3D4F,
    0x40A2,
    [0xBD, 0x4D, 0x4F, 0x34, 0x19, 0x75, 0x54, 0x76],
);

/// Component that is not a generator.
pub(crate) struct Opaque;

impl ComponentObject for Opaque {
    fn into_generator(self: Box<Self>) -> Option<Box<dyn Generator>> {
        None
    }
}

/// Generator that only answers `default_extension`.
pub(crate) struct StubGenerator {
    extension: &'static str,
}

impl StubGenerator {
    pub(crate) fn new(extension: &'static str) -> Self {
        Self { extension }
    }
}

impl SingleFileGenerator for StubGenerator {
    fn default_extension(&self) -> Result<String, Status> {
        Ok(self.extension.to_string())
    }

    fn generate(
        &mut self,
        _: &GenerationRequest,
        _: &mut GeneratorOutput,
        _: &mut dyn GeneratorProgress,
    ) -> Status {
        Status::E_NOTIMPL
    }
}

impl RefactorNotify for StubGenerator {
    fn on_before_global_symbol_renamed(
        &mut self,
        _: RefactorTarget<'_>,
        _: &[String],
        _: &str,
        _: &mut Vec<ItemId>,
    ) -> Status {
        Status::S_OK
    }

    fn on_global_symbol_renamed(&mut self, _: RefactorTarget<'_>, _: &[String], _: &str) -> Status {
        Status::S_OK
    }

    fn on_before_reorder_params(
        &mut self,
        _: RefactorTarget<'_>,
        _: ParameterChange<'_>,
        _: &mut Vec<ItemId>,
    ) -> Status {
        Status::S_OK
    }

    fn on_reorder_params(&mut self, _: RefactorTarget<'_>, _: ParameterChange<'_>) -> Status {
        Status::S_OK
    }

    fn on_before_remove_params(
        &mut self,
        _: RefactorTarget<'_>,
        _: ParameterChange<'_>,
        _: &mut Vec<ItemId>,
    ) -> Status {
        Status::S_OK
    }

    fn on_remove_params(&mut self, _: RefactorTarget<'_>, _: ParameterChange<'_>) -> Status {
        Status::S_OK
    }

    fn on_before_add_params(
        &mut self,
        _: RefactorTarget<'_>,
        _: ParameterAddition<'_>,
        _: &mut Vec<ItemId>,
    ) -> Status {
        Status::S_OK
    }

    fn on_add_params(&mut self, _: RefactorTarget<'_>, _: ParameterAddition<'_>) -> Status {
        Status::S_OK
    }
}

impl ObjectWithSite for StubGenerator {
    fn get_site(&self, _: &Guid) -> Result<HostObject, Status> {
        Err(Status::E_FAIL)
    }

    fn set_site(&mut self, _: Option<HostObject>) {}
}
