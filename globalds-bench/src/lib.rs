//! # GlobalDS Bench
//!
//! Fixtures for benchmarking namespace relocation.

use globalds_codegen::DEFAULT_PLACEHOLDER;

/// Builds typed DataSet source with `tables` table classes inside `namespace`.
///
/// The shape follows what the typed DataSet generator emits: a file header,
/// one namespace block, and nested classes whose closing braces are indented.
#[must_use]
pub fn dataset_source(namespace: &str, tables: usize) -> String {
    let mut out = String::from(
        "//------------------------------------------------------------------------------\n\
         // <auto-generated>\n\
         //     This code was generated by a tool.\n\
         // </auto-generated>\n\
         //------------------------------------------------------------------------------\n\n\
         #pragma warning disable 1591\n\n",
    );
    out.push_str(&format!("namespace {namespace} {{\n    \n"));
    out.push_str("    public partial class Orders : global::System.Data.DataSet {\n");
    for i in 0..tables {
        out.push_str(&format!(
            "        \n        private Table{i}DataTable tableTable{i};\n        \n\
             \x20       public partial class Table{i}DataTable : global::System.Data.DataTable {{\n\
             \x20           public Table{i}DataTable() {{\n\
             \x20               this.TableName = \"Table{i}\";\n\
             \x20           }}\n\
             \x20       }}\n"
        ));
    }
    out.push_str("    }\n}\n\n#pragma warning restore 1591\n");
    out
}

/// Builds [`dataset_source`] in the placeholder namespace, as the delegate
/// produces it.
#[must_use]
pub fn placeholder_source(tables: usize) -> String {
    dataset_source(DEFAULT_PLACEHOLDER, tables)
}

/// Builds [`dataset_source`] in a nested placeholder namespace.
#[must_use]
pub fn nested_placeholder_source(suffix: &str, tables: usize) -> String {
    dataset_source(&format!("{DEFAULT_PLACEHOLDER}.{suffix}"), tables)
}
