//! Benchmarks for the state-variable filter recurrence.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fixwave::dsp::{filter::Filter, fixed};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let input: Vec<i32> = (0..size)
            .map(|i| if (i / 16) % 2 == 0 { 12_000 } else { -12_000 })
            .collect();
        let mut output = vec![0i32; size];

        let mut filter = Filter::new();
        filter.set_cutoff(1_000, SAMPLE_RATE);
        filter.set_damping(fixed::ONE);

        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                for (o, &x) in output.iter_mut().zip(input.iter()) {
                    *o = filter.process(black_box(x));
                }
                black_box(&mut output);
            })
        });
    }

    group.finish();
}
