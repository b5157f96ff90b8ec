use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use levalign::{edit_distance, opcodes, ratio, CostMode};
use std::hint::black_box;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789 ";
const LENGTHS: [usize; 3] = [16, 60, 400];

// xorshift keeps the inputs reproducible without pulling in a rng crate
fn pseudo_random_text(len: usize, mut seed: u64) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            ALPHABET[(seed % ALPHABET.len() as u64) as usize]
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");
    for len in LENGTHS {
        let left = pseudo_random_text(len, 0x9e37_79b9);
        let right = pseudo_random_text(len, 0x85eb_ca6b);
        group.throughput(Throughput::Elements((len * len) as u64));
        for mode in [CostMode::Uniform, CostMode::DoubleSubstitution] {
            group.bench_with_input(BenchmarkId::new(format!("{mode:?}"), len), &len, |b, _| {
                b.iter(|| edit_distance(black_box(&left), black_box(&right), mode))
            });
        }
    }
    group.finish();
}

fn bench_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratio");
    for len in LENGTHS {
        let left = pseudo_random_text(len, 7);
        let right = pseudo_random_text(len, 707);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| ratio(black_box(&left), black_box(&right)))
        });
    }
    group.finish();
}

fn bench_opcodes(c: &mut Criterion) {
    let mut group = c.benchmark_group("opcodes");
    for len in LENGTHS {
        let left = pseudo_random_text(len, 909);
        let right = pseudo_random_text(len, 20260213);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| opcodes(black_box(&left), black_box(&right)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distance, bench_ratio, bench_opcodes);
criterion_main!(benches);
