//! Full pipeline: registry snapshot, delegate activation, generation.

use globalds::core::{ItemId, ParameterAddition, ParameterChange, RefactorTarget};
use globalds::prelude::*;

const SNAPSHOT: &str = r#"
<registry>
  <key path="SOFTWARE\Microsoft\VisualStudio">
    <key path="9.0"/>
    <key path="10.0">
      <key path="CLSID\{E76D53CC-3D4F-40A2-BD4D-4F3419755476}">
        <value name="Assembly" data="Microsoft.VSDesigner, Version=10.0.0.0, Culture=neutral"/>
        <value name="Class" data="Microsoft.VSDesigner.CodeGenerator.TypedDataSourceGenerator"/>
      </key>
    </key>
  </key>
</registry>
"#;

const ASSEMBLY: &str = "Microsoft.VSDesigner";
const CLASS: &str = "Microsoft.VSDesigner.CodeGenerator.TypedDataSourceGenerator";

/// Emits a typed DataSet class in the requested namespace, as UTF-16LE.
struct TypedDataSourceGenerator;

impl SingleFileGenerator for TypedDataSourceGenerator {
    fn default_extension(&self) -> Result<String, Status> {
        Ok(".Designer.cs".to_string())
    }

    fn generate(
        &mut self,
        request: &GenerationRequest,
        output: &mut GeneratorOutput,
        _: &mut dyn GeneratorProgress,
    ) -> Status {
        let code = format!(
            "namespace {} {{\n    public partial class Orders {{\n    }}\n}}\n",
            request.default_namespace()
        );
        match output.fill(TextEncoding::Utf16Le.encode(&code)) {
            Ok(()) => Status::S_OK,
            Err(_) => Status::E_FAIL,
        }
    }
}

impl RefactorNotify for TypedDataSourceGenerator {
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

impl ObjectWithSite for TypedDataSourceGenerator {
    fn get_site(&self, _: &Guid) -> Result<HostObject, Status> {
        Err(Status::E_FAIL)
    }

    fn set_site(&mut self, _: Option<HostObject>) {}
}

fn resolver() -> RegistryResolver<MemoryRegistry, ActivatorTable> {
    let hive = parse_registry_xml(SNAPSHOT).unwrap();
    let activator = ActivatorTable::new().register(ASSEMBLY, CLASS, || {
        GeneratorComponent::boxed(TypedDataSourceGenerator)
    });
    RegistryResolver::new(hive, activator)
}

#[test]
fn test_generates_global_namespace_from_registry() {
    globalds::logging::init(Some("debug"));

    let resolver = resolver();
    assert_eq!(resolver.versions().unwrap(), vec!["10.0", "9.0"]);

    let mut generator =
        GlobalDataSetGenerator::new(&GeneratorConfig::default(), &resolver).unwrap();
    assert_eq!(generator.default_extension().unwrap(), ".Designer.cs");

    let request = GenerationRequest::new("Orders.xsd", "<xs:schema/>", "Contoso.Orders");
    let mut output = GeneratorOutput::new();
    let status = generator.generate(&request, &mut output, &mut NoProgress);
    assert_eq!(status, Status::S_OK);

    let buffer = output.contents().unwrap();
    let written = &buffer.as_slice()[..output.byte_count() as usize];
    let expected = "\n    public partial class Orders {\n    }\n\n";
    assert_eq!(written, TextEncoding::Utf16Le.encode(expected).as_slice());
}

#[test]
fn test_missing_delegate_is_reported() {
    let hive = parse_registry_xml(SNAPSHOT).unwrap();
    let resolver = RegistryResolver::new(hive, ActivatorTable::new());

    let err = GlobalDataSetGenerator::new(&GeneratorConfig::default(), &resolver).unwrap_err();
    assert!(matches!(
        err,
        CodegenError::Locate(LocateError::ActivationFailed { .. })
    ));
}

#[test]
fn test_relocate_default() {
    let raw = b"namespace GlobalDataSetGeneratorTempNamespace.Sales {\nclass Foo {}\n}";
    let relocated = globalds::relocate_default(raw).unwrap();
    assert_eq!(relocated, b"namespace Sales {\nclass Foo {}\n}");
}
