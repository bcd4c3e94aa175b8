//! Emission benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sumgen_codegen::{load_candidates, CSharpEmitter, CodeEmitter, Generator};
use sumgen_core::{MemberModel, SchemaModel};

const FIXTURE: &str = include_str!("../../../tests/fixtures/ipaddr.json");

fn wide_schema() -> SchemaModel {
    let members = (0..64).map(|i| {
        MemberModel::with_types(format!("Case{}", i), vec!["int"; i % 5])
    });
    SchemaModel::builder("Wide")
        .members(members)
        .build()
        .expect("wide schema is valid")
}

fn emit_wide(c: &mut Criterion) {
    let emitter = CSharpEmitter::new().expect("default options are valid");
    let schema = wide_schema();
    c.bench_function("emit_wide", |b| {
        b.iter(|| emitter.emit_schema(black_box(&schema)))
    });
}

fn run_fixture(c: &mut Criterion) {
    let generator = Generator::new().expect("default options are valid");
    let candidates = load_candidates(FIXTURE).expect("fixture parses");
    c.bench_function("run_fixture", |b| {
        b.iter(|| generator.run(black_box(&candidates)))
    });
}

criterion_group!(benches, emit_wide, run_fixture);
criterion_main!(benches);
