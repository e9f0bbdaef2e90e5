//! Benchmarks for the phase-accumulator oscillator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fixwave::dsp::{fixed, oscillator::Oscillator, wavetable::Harmonic, wavetable::Wavetable};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    let sine = Wavetable::build(&[Harmonic::with_amplitude(fixed::ONE)]);
    let rich = Wavetable::build(
        &(0..32)
            .map(|i| Harmonic::with_amplitude(fixed::ONE / (i + 1)))
            .collect::<Vec<_>>(),
    );

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0i32; size];

        // Table contents do not affect read cost, but keep both shapes
        // honest against cache effects.
        let mut osc = Oscillator::new();
        osc.set_frequency(440, SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("sine_table", size), &size, |b, _| {
            b.iter(|| {
                for slot in buffer.iter_mut() {
                    *slot = osc.process(black_box(&sine));
                }
                black_box(&mut buffer);
            })
        });

        let mut osc = Oscillator::new();
        osc.set_frequency(440, SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("rich_table", size), &size, |b, _| {
            b.iter(|| {
                for slot in buffer.iter_mut() {
                    *slot = osc.process(black_box(&rich));
                }
                black_box(&mut buffer);
            })
        });
    }

    group.finish();
}
