//! The global-namespace typed DataSet generator.
//!
//! [`GlobalDataSetGenerator`] is a drop-in replacement for the typed DataSet
//! generator. It runs the real generator with a placeholder namespace and
//! relocates the output into the global namespace; every other call is
//! forwarded unchanged.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::namespace::NamespaceRewriter;
use crate::relocate::relocate;
use globalds_core::{
    GenerationRequest, Generator, GeneratorOutput, GeneratorProgress, Guid, HostObject, ItemId,
    ObjectWithSite, ParameterAddition, ParameterChange, RefactorNotify, RefactorTarget,
    SingleFileGenerator, Status,
};
use globalds_locator::GeneratorResolver;

/// Class identifier of the typed DataSet generator (`MSDataSetGenerator`).
pub const MS_DATASET_GENERATOR_CLSID: Guid = Guid::from_fields(
    0xE76D_53CC,
    0x3D4F,
    0x40A2,
    [0xBD, 0x4D, 0x4F, 0x34, 0x19, 0x75, 0x54, 0x76],
);

/// Class identifier of [`GlobalDataSetGenerator`].
pub const GLOBAL_DATASET_GENERATOR_CLSID: Guid = Guid::from_fields(
    0x920D_AD23,
    0x09C9,
    0x4AFD,
    [0xBD, 0xC9, 0x55, 0x40, 0x5D, 0x58, 0x7A, 0xD6],
);

/// Typed DataSet generator that always generates into the global namespace.
///
/// The requested namespace is ignored. The delegate is resolved once, when
/// the generator is created, and used for every call afterwards.
pub struct GlobalDataSetGenerator {
    delegate: Box<dyn Generator>,
    rewriter: NamespaceRewriter,
}

impl GlobalDataSetGenerator {
    /// Creates a generator, resolving its delegate through `resolver`.
    ///
    /// # Errors
    /// Returns `CodegenError::Locate` if the delegate cannot be resolved, or
    /// `InvalidPlaceholder` if the configured placeholder is not an identifier.
    pub fn new<R>(config: &GeneratorConfig, resolver: &R) -> Result<Self, CodegenError>
    where
        R: GeneratorResolver + ?Sized,
    {
        let delegate = resolver.resolve(config.delegate_clsid())?;
        Self::with_delegate(config, delegate)
    }

    /// Creates a generator around an already resolved delegate.
    ///
    /// # Errors
    /// Returns `InvalidPlaceholder` if the configured placeholder is not an
    /// identifier.
    pub fn with_delegate(
        config: &GeneratorConfig,
        delegate: Box<dyn Generator>,
    ) -> Result<Self, CodegenError> {
        let rewriter = NamespaceRewriter::new(config.placeholder_namespace())?;
        Ok(Self { delegate, rewriter })
    }

    /// Returns the placeholder namespace handed to the delegate.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        self.rewriter.placeholder()
    }

    /// Runs the delegate and relocates its output.
    ///
    /// A non-success status from the delegate, or an empty output, is
    /// returned as is without touching the output. Otherwise the output
    /// buffer is rewritten in place and its byte count updated.
    ///
    /// # Errors
    /// Returns `CodegenError` if the reported byte count exceeds the buffer or
    /// the relocated output does not fit in it. The output is left as the
    /// delegate produced it.
    pub fn try_generate(
        &mut self,
        request: &GenerationRequest,
        output: &mut GeneratorOutput,
        progress: &mut dyn GeneratorProgress,
    ) -> Result<Status, CodegenError> {
        let delegated = request.with_namespace(self.rewriter.placeholder());
        let status = self.delegate.generate(&delegated, output, progress);
        if !status.is_ok() {
            tracing::debug!(
                "Delegate failed for {} with status {}",
                request.input_path(),
                status
            );
            return Ok(status);
        }

        let Some(raw) = output.reported_bytes()? else {
            tracing::debug!("Delegate produced no output for {}", request.input_path());
            return Ok(status);
        };

        let relocated = relocate(&raw, &self.rewriter)?;
        if let Some(buffer) = output.contents_mut() {
            buffer.overwrite(&relocated.bytes)?;
            output.set_byte_count(relocated.bytes.len() as u32);
        }
        Ok(status)
    }
}

impl SingleFileGenerator for GlobalDataSetGenerator {
    fn default_extension(&self) -> Result<String, Status> {
        self.delegate.default_extension()
    }

    fn generate(
        &mut self,
        request: &GenerationRequest,
        output: &mut GeneratorOutput,
        progress: &mut dyn GeneratorProgress,
    ) -> Status {
        match self.try_generate(request, output, progress) {
            Ok(status) => status,
            Err(e) => {
                tracing::error!("Generation failed for {}: {}", request.input_path(), e);
                progress.generator_error(false, 0, &e.to_string(), 0, 0);
                // No partial output: the host gets an empty slot with E_FAIL.
                *output = GeneratorOutput::new();
                Status::E_FAIL
            }
        }
    }
}

impl RefactorNotify for GlobalDataSetGenerator {
    fn on_before_global_symbol_renamed(
        &mut self,
        target: RefactorTarget<'_>,
        rq_names: &[String],
        new_name: &str,
        additional_checkouts: &mut Vec<ItemId>,
    ) -> Status {
        self.delegate.on_before_global_symbol_renamed(
            target,
            rq_names,
            new_name,
            additional_checkouts,
        )
    }

    fn on_global_symbol_renamed(
        &mut self,
        target: RefactorTarget<'_>,
        rq_names: &[String],
        new_name: &str,
    ) -> Status {
        self.delegate.on_global_symbol_renamed(target, rq_names, new_name)
    }

    fn on_before_reorder_params(
        &mut self,
        target: RefactorTarget<'_>,
        change: ParameterChange<'_>,
        additional_checkouts: &mut Vec<ItemId>,
    ) -> Status {
        self.delegate.on_before_reorder_params(target, change, additional_checkouts)
    }

    fn on_reorder_params(
        &mut self,
        target: RefactorTarget<'_>,
        change: ParameterChange<'_>,
    ) -> Status {
        self.delegate.on_reorder_params(target, change)
    }

    fn on_before_remove_params(
        &mut self,
        target: RefactorTarget<'_>,
        change: ParameterChange<'_>,
        additional_checkouts: &mut Vec<ItemId>,
    ) -> Status {
        self.delegate.on_before_remove_params(target, change, additional_checkouts)
    }

    fn on_remove_params(
        &mut self,
        target: RefactorTarget<'_>,
        change: ParameterChange<'_>,
    ) -> Status {
        self.delegate.on_remove_params(target, change)
    }

    fn on_before_add_params(
        &mut self,
        target: RefactorTarget<'_>,
        addition: ParameterAddition<'_>,
        additional_checkouts: &mut Vec<ItemId>,
    ) -> Status {
        self.delegate.on_before_add_params(target, addition, additional_checkouts)
    }

    fn on_add_params(
        &mut self,
        target: RefactorTarget<'_>,
        addition: ParameterAddition<'_>,
    ) -> Status {
        self.delegate.on_add_params(target, addition)
    }
}

impl ObjectWithSite for GlobalDataSetGenerator {
    fn get_site(&self, iid: &Guid) -> Result<HostObject, Status> {
        self.delegate.get_site(iid)
    }

    fn set_site(&mut self, site: Option<HostObject>) {
        self.delegate.set_site(site);
    }
}

impl std::fmt::Debug for GlobalDataSetGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalDataSetGenerator")
            .field("placeholder", &self.rewriter.placeholder())
            .finish_non_exhaustive()
    }
}
