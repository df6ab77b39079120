//! Relocates a generated typed DataSet file into the global namespace.
//!
//! The input must have been generated with the placeholder namespace, i.e.
//! `namespace GlobalDataSetGeneratorTempNamespace { ... }`.
//!
//! Run with: `cargo run --example relocate -- Orders.Designer.cs [output]`

use globalds::TextEncoding;
use globalds::codegen::{DEFAULT_PLACEHOLDER, NamespaceRewriter, relocate};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    globalds::logging::init(None);

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        eprintln!("usage: relocate <input> [output]");
        std::process::exit(2);
    };
    let output = args.next().map(PathBuf::from).unwrap_or_else(|| input.clone());

    let raw = std::fs::read(&input)?;
    let rewriter = NamespaceRewriter::new(DEFAULT_PLACEHOLDER)?;
    let relocated = relocate(&raw, &rewriter)?;

    if !relocated.rewritten {
        println!(
            "{}: no '{}' namespace found, left unchanged",
            input.display(),
            DEFAULT_PLACEHOLDER
        );
        return Ok(());
    }

    std::fs::write(&output, &relocated.bytes)?;
    println!(
        "{} -> {} ({}, {} -> {} bytes)",
        input.display(),
        output.display(),
        relocated.encoding,
        raw.len(),
        relocated.bytes.len()
    );
    if relocated.encoding != TextEncoding::default() {
        tracing::info!("Preserved {} encoding", relocated.encoding);
    }
    Ok(())
}
