//! Benchmarks for mixing several voices into one block via the
//! accumulate path, plus the PCM mix-down boundary.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion};
use fixwave::dsp::{envelope::EnvelopeParams, fixed, wavetable::Harmonic, wavetable::Wavetable};
use fixwave::io::pcm;
use fixwave::synth::Voice;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_chord(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/chord");

    let table = Arc::new(Wavetable::build(
        &(0..8)
            .map(|i| Harmonic::with_amplitude(fixed::ONE / (i + 1)))
            .collect::<Vec<_>>(),
    ));

    for &voices in &[3usize, 8, 16] {
        let size = *BLOCK_SIZES.last().unwrap();
        let mut mix = vec![0i32; size];
        let mut out = vec![0i16; size];

        let mut pool: Vec<Voice> = (0..voices)
            .map(|i| {
                let mut v = Voice::new(Arc::clone(&table));
                v.set_envelope(EnvelopeParams::new(10, 50, fixed::ONE / 2, 100, SAMPLE_RATE));
                v.set_cutoff(1_500, SAMPLE_RATE);
                v.set_damping(fixed::ONE);
                v.note_on(220 + 55 * i as u32, SAMPLE_RATE);
                v
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("mix_and_clamp", voices),
            &voices,
            |b, _| {
                b.iter(|| {
                    for (i, voice) in pool.iter_mut().enumerate() {
                        voice.process_block(black_box(&mut mix), i > 0);
                    }
                    pcm::write_pcm16(&mix, pool.len() as u32, black_box(&mut out));
                })
            },
        );
    }

    group.finish();
}
