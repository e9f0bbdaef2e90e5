//! Benchmarks for a complete voice chain: oscillator → envelope → filter.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion};
use fixwave::dsp::{envelope::EnvelopeParams, fixed, wavetable::Harmonic, wavetable::Wavetable};
use fixwave::synth::Voice;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voice");

    let table = Arc::new(Wavetable::build(
        &(0..8)
            .map(|i| Harmonic::with_amplitude(fixed::ONE / (i + 1)))
            .collect::<Vec<_>>(),
    ));

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0i32; size];

        let mut voice = Voice::new(Arc::clone(&table));
        voice.set_envelope(EnvelopeParams::new(10, 50, fixed::ONE / 2, 100, SAMPLE_RATE));
        voice.set_cutoff(1_500, SAMPLE_RATE);
        voice.set_damping(fixed::ONE);
        voice.note_on(440, SAMPLE_RATE);

        group.bench_with_input(BenchmarkId::new("sustained", size), &size, |b, _| {
            b.iter(|| {
                voice.process_block(black_box(&mut buffer), false);
            })
        });
    }

    group.finish();
}
