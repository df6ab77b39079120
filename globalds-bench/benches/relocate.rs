//! Relocation benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use globalds_bench::{nested_placeholder_source, placeholder_source};
use globalds_codegen::{DEFAULT_PLACEHOLDER, NamespaceRewriter, relocate};
use globalds_core::TextEncoding;
use std::hint::black_box;

fn benchmark_rewrite(c: &mut Criterion) {
    let rewriter = NamespaceRewriter::new(DEFAULT_PLACEHOLDER).unwrap();
    let mut group = c.benchmark_group("rewrite");

    for tables in [1, 16, 256] {
        let source = placeholder_source(tables);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("hoist", tables), &source, |b, source| {
            b.iter(|| rewriter.rewrite(black_box(source)))
        });
    }

    let nested = nested_placeholder_source("Sales", 16);
    group.bench_function("rehome", |b| {
        b.iter(|| rewriter.rewrite(black_box(&nested)))
    });

    let untouched = globalds_bench::dataset_source("Contoso.Data", 16);
    group.bench_function("identity", |b| {
        b.iter(|| rewriter.rewrite(black_box(&untouched)))
    });

    group.finish();
}

fn benchmark_relocate(c: &mut Criterion) {
    let rewriter = NamespaceRewriter::new(DEFAULT_PLACEHOLDER).unwrap();
    let source = placeholder_source(16);
    let mut group = c.benchmark_group("relocate");

    for encoding in [
        TextEncoding::Utf8,
        TextEncoding::Utf8Bom,
        TextEncoding::Utf16Le,
        TextEncoding::Utf32Be,
    ] {
        let raw = encoding.encode(&source);
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(encoding), &raw, |b, raw| {
            b.iter(|| relocate(black_box(raw), &rewriter))
        });
    }

    group.finish();
}

fn benchmark_detect(c: &mut Criterion) {
    let raw = TextEncoding::Utf16Be.encode(&placeholder_source(1));

    c.bench_function("detect_encoding", |b| {
        b.iter(|| TextEncoding::detect(black_box(&raw)))
    });
}

criterion_group!(
    benches,
    benchmark_rewrite,
    benchmark_relocate,
    benchmark_detect,
);
criterion_main!(benches);
