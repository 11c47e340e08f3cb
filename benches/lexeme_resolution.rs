// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use notemark::domain::{Language, ModuleId, Namespace};
use notemark::lexemes::load_default_registry;
use std::hint::black_box;

fn lexeme_resolution_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexeme_resolution");

    group.bench_function("load_packaged_registry", |b| {
        b.iter(|| black_box(load_default_registry(None)));
    });

    let registry = load_default_registry(None).registry;

    group.bench_function("resolve_exact", |b| {
        b.iter(|| {
            black_box(registry.resolve_in(
                Namespace::Toolbar,
                black_box("actions_label_save"),
                Language::German,
            ))
        });
    });

    group.bench_function("resolve_shared_fallback", |b| {
        b.iter(|| {
            black_box(registry.resolve(
                Namespace::Module(ModuleId::OpenAi),
                black_box("retry"),
                black_box("ja-JP"),
            ))
        });
    });

    group.bench_function("resolve_missing", |b| {
        b.iter(|| black_box(registry.resolve(Namespace::MainMenu, black_box("no_such_key"), "de")));
    });

    group.finish();
}

criterion_group!(benches, lexeme_resolution_benchmark);
criterion_main!(benches);
