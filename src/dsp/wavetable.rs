/*
Additive Wavetable Construction
===============================

A wavetable is one cycle of a periodic waveform, stored as 256 signed
16-bit samples and read back by the oscillator with the same phase
convention as the sine evaluator (top 8 bits index, low 24 bits
interpolate).

Construction sums a caller-supplied set of harmonics:

    sample[i] = Σ_h  amplitude_h · sin(i·2^24 · (h+1) + phase_h)

and then normalizes so the loudest point of the cycle lands at a fixed
peak (32760), keeping every table at the same level regardless of how
the harmonics interfere.

Two passes: the first only measures the peak, the second recomputes each
sample and applies the scale. Caching the first pass would need a 256-entry
i32 scratch buffer; recomputing trades a little one-time CPU for zero extra
memory, and construction is an offline operation anyway.

Harmonic policy:
  - at most 128 harmonics are read; harmonic number 128 and up would fold
    over Nyquist at this table resolution, so they are silently dropped
  - zero-amplitude harmonics contribute nothing, including their phase
  - all-zero input normalizes against a floor of 1 instead of dividing by
    zero, yielding an all-zero table
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::{fixed, sine};

/// Samples in one table cycle. Matches the sine evaluator's resolution so
/// both share one phase convention.
pub const WAVETABLE_SIZE: usize = sine::TABLE_SIZE;

/// Most harmonics a table will read; higher ones alias past Nyquist.
pub const MAX_HARMONICS: usize = 128;

/// Peak absolute amplitude every normalized table is scaled to.
pub const TARGET_PEAK: i32 = 32760;

/// One additive component: a Q16.16 amplitude and a phase offset in
/// 32-bit phase units (2^32 = one cycle of the harmonic).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Harmonic {
    pub amplitude: i32,
    pub phase: u32,
}

impl Harmonic {
    /// Harmonic with no phase offset.
    pub const fn with_amplitude(amplitude: i32) -> Self {
        Self {
            amplitude,
            phase: 0,
        }
    }
}

/// An immutable one-cycle waveform, shared read-only by every oscillator
/// that uses it. Wrap in `Arc` to share across voices; it is never mutated
/// after construction.
#[derive(Debug, Clone)]
pub struct Wavetable {
    samples: [i16; WAVETABLE_SIZE],
}

impl Wavetable {
    /// Build a normalized table from up to [`MAX_HARMONICS`] components.
    /// Harmonic `h` (zero-based) runs at `h + 1` times the fundamental.
    pub fn build(harmonics: &[Harmonic]) -> Self {
        let harmonics = &harmonics[..harmonics.len().min(MAX_HARMONICS)];

        // Pass 1: measure the peak for normalization. Floor of 1 guards the
        // divide when every harmonic is zero.
        let mut max_amp = 1i32;
        for i in 0..WAVETABLE_SIZE {
            let sample = additive_sample(harmonics, (i as u32) << sine::FRAC_BITS);
            max_amp = max_amp.max(sample.abs());
        }

        let scale = (((TARGET_PEAK as i64) << fixed::SHIFT) / max_amp as i64) as i32;

        // Pass 2: recompute and rescale. The clamp only catches rounding
        // overshoot; a normalized table already fits i16.
        let mut samples = [0i16; WAVETABLE_SIZE];
        for (i, slot) in samples.iter_mut().enumerate() {
            let sample = additive_sample(harmonics, (i as u32) << sine::FRAC_BITS);
            *slot = fixed::mul(sample, scale).clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        }

        Self { samples }
    }

    /// Read the table at a 32-bit phase, linearly interpolating between
    /// adjacent entries exactly like the sine evaluator.
    #[inline]
    pub fn lookup(&self, phase: u32) -> i32 {
        let index = (phase >> sine::FRAC_BITS) as usize & sine::TABLE_MASK;
        let frac = (phase & sine::FRAC_MASK) as i64;

        let p1 = self.samples[index] as i32;
        let p2 = self.samples[(index + 1) & sine::TABLE_MASK] as i32;

        let delta = (p2 - p1) as i64;
        p1 + ((delta * frac) >> sine::FRAC_BITS) as i32
    }

    /// Raw table contents.
    pub fn samples(&self) -> &[i16; WAVETABLE_SIZE] {
        &self.samples
    }
}

/// Sum every harmonic's contribution at one table position. The phase
/// multiply wraps on purpose: a harmonic past one cycle folds back around.
fn additive_sample(harmonics: &[Harmonic], base_phase: u32) -> i32 {
    let mut sample = 0i32;
    for (h, harmonic) in harmonics.iter().enumerate() {
        if harmonic.amplitude == 0 {
            continue;
        }
        let harmonic_num = h as u32 + 1;
        let phase = base_phase
            .wrapping_mul(harmonic_num)
            .wrapping_add(harmonic.phase);
        sample += fixed::mul(harmonic.amplitude, sine::sin(phase));
    }
    sample
}
