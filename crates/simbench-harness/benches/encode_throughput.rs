use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use simbench_core::{NodeKind, RunParam};
use simbench_harness::{encode, total_time_seconds};

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_grid", |b| {
        b.iter(|| encode(black_box(&RunParam::GridCells(15000))).unwrap())
    });
    c.bench_function("encode_input_nodes", |b| {
        b.iter(|| {
            encode(black_box(&RunParam::Nodes {
                kind: NodeKind::Input,
                count: 16,
            }))
            .unwrap()
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let stdout = "Number of ticks: 1000\nsetup done\nTotal time = 3.21 seconds\n";
    c.bench_function("parse_timing_line", |b| {
        b.iter(|| total_time_seconds(black_box(stdout)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_parse);
criterion_main!(benches);
