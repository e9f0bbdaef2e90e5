//! Benchmarks for wavetable construction (an offline cost, but worth
//! tracking since the two-pass build recomputes every harmonic).

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fixwave::dsp::{fixed, wavetable::Harmonic, wavetable::Wavetable};

pub fn bench_wavetable(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/wavetable");

    for &count in &[1usize, 8, 32, 128] {
        let harmonics: Vec<Harmonic> = (0..count)
            .map(|i| Harmonic::with_amplitude(fixed::ONE / (i as i32 + 1)))
            .collect();

        group.bench_with_input(BenchmarkId::new("build", count), &count, |b, _| {
            b.iter(|| black_box(Wavetable::build(black_box(&harmonics))))
        });
    }

    group.finish();
}
