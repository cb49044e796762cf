use bioprop_rs::{Alphabet, coding_sequence, kmers, sequence};
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::TestRunner;

use rand::{Rng, SeedableRng};
use std::hint::black_box;

const K: usize = 31;

/// Generate a reproducible 100-kbp pseudo-random DNA sequence.
fn make_seq() -> String {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    const BASES: [u8; 4] = *b"ACGT";
    (0..100_000)
        .map(|_| BASES[rng.random_range(0..4)] as char)
        .collect()
}

fn draw<S: Strategy>(strategy: &S, runner: &mut TestRunner) -> S::Value {
    strategy.new_tree(runner).unwrap().current()
}

fn bench_sequence(c: &mut Criterion) {
    let strategy = sequence(Alphabet::DnaIupac, 1000, 0).unwrap();
    let mut runner = TestRunner::deterministic();
    c.bench_function("sequence DNA_IUPAC <=1000", |b| {
        b.iter(|| black_box(draw(&strategy, &mut runner)))
    });
}

fn bench_kmers(c: &mut Criterion) {
    let seq = make_seq();
    let strategy = kmers(&seq, Alphabet::Dna, K, true);
    let mut runner = TestRunner::deterministic();
    c.bench_function("kmers k=31 rc from 100 kbp", |b| {
        b.iter(|| black_box(draw(&strategy, &mut runner)))
    });
}

fn bench_coding_sequence(c: &mut Criterion) {
    let strategy = coding_sequence(Some(50), Some(100), true, true, false).unwrap();
    let mut runner = TestRunner::deterministic();
    c.bench_function("coding_sequence 50-100 codons", |b| {
        b.iter(|| black_box(draw(&strategy, &mut runner)))
    });
}

criterion_group!(
    benches,
    bench_sequence,
    bench_kmers,
    bench_coding_sequence
);
criterion_main!(benches);
