//! Benchmarks for the fixed-point ADSR envelope generator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fixwave::dsp::envelope::{Envelope, EnvelopeParams};
use fixwave::dsp::fixed;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        // Attack phase (ramping up)
        let mut env = Envelope::new(EnvelopeParams::new(
            100,
            100,
            fixed::ONE / 2,
            300,
            SAMPLE_RATE,
        ));
        env.note_on();
        group.bench_with_input(BenchmarkId::new("attack", size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..size {
                    black_box(env.process());
                }
            })
        });

        // Sustain phase (holding steady)
        let mut env = Envelope::new(EnvelopeParams::new(1, 1, fixed::ONE / 2, 300, SAMPLE_RATE));
        env.note_on();
        for _ in 0..200 {
            env.process();
        }
        group.bench_with_input(BenchmarkId::new("sustain", size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..size {
                    black_box(env.process());
                }
            })
        });

        // Release phase (ramping down)
        let mut env = Envelope::new(EnvelopeParams::new(1, 1, fixed::ONE / 2, 100, SAMPLE_RATE));
        env.note_on();
        for _ in 0..200 {
            env.process();
        }
        env.note_off();
        group.bench_with_input(BenchmarkId::new("release", size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..size {
                    black_box(env.process());
                }
            })
        });
    }

    group.finish();
}
