//! Benchmarks for the fixed-point DSP primitives and voice scenarios.
//!
//! Run with: cargo bench
//!
//! Every operation here sits inside a hard realtime budget. Reference
//! deadlines at 44.1kHz:
//!   - 64 samples  = 1.45ms deadline
//!   - 128 samples = 2.90ms deadline
//!   - 256 samples = 5.80ms deadline
//!   - 512 samples = 11.61ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Low-level primitives (oscillator, envelope, filter)
//!   - scenarios/*  Full voice chains and multi-voice mixes

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

pub const SAMPLE_RATE: u32 = 44_100;

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_oscillator,
    dsp::bench_envelope,
    dsp::bench_filter,
    dsp::bench_wavetable,
    // Real-world scenarios
    scenarios::bench_voice,
    scenarios::bench_chord,
);
criterion_main!(benches);
