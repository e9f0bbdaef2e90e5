use crate::dsp::{fixed, sine};

/*
Chamberlin state-variable filter, fixed point.

Per-sample recurrence for input x:

    high = x - low - damping·band
    band = band + cutoff·high
    low  = low  + cutoff·band

The lowpass tap (`low`) is the output. The recurrence also produces band
and high taps but this kernel only exposes lowpass.

`cutoff` is the classic SVF tuning coefficient 2·sin(π·f/sr), evaluated on
the shared sine table by mapping f/sr into phase units: one half-cycle of
phase (2^31) corresponds to π, so phase = f·2^31/sr. The coefficient is
clamped to ~0.8 in Q16.16; beyond that the recurrence diverges. At 44.1kHz
the ceiling works out to roughly a 5.6kHz cutoff (oversampling would raise
it, at double the per-sample cost).

`damping` is the inverse-resonance control: damping = ONE is a plain
lowpass, smaller values ring harder around the cutoff.
*/

/// Stability ceiling for the cutoff coefficient (~0.8 in Q16.16).
pub const MAX_CUTOFF: i32 = 52_429;

#[derive(Debug, Clone, Copy)]
pub struct Filter {
    low: i32,
    band: i32,

    cutoff: i32,
    damping: i32,
}

impl Filter {
    /// A fully open filter: unit cutoff coefficient, no damping. Signals
    /// pass through unshaped until the caller tunes it.
    pub fn new() -> Self {
        Self {
            low: 0,
            band: 0,
            cutoff: fixed::ONE,
            damping: 0,
        }
    }

    /// Derive the cutoff coefficient from a target frequency.
    /// Caller contract: `sample_rate` is nonzero.
    pub fn set_cutoff(&mut self, cutoff_hz: u32, sample_rate: u32) {
        // phase = f · 2^31 / sr, so sin(phase) = sin(π·f/sr)
        let phase = (((cutoff_hz as u64) << 31) / sample_rate as u64) as u32;
        self.cutoff = (sine::sin(phase) * 2).min(MAX_CUTOFF);
    }

    /// Set the inverse-resonance coefficient (Q16.16; ONE = no resonance).
    pub fn set_damping(&mut self, damping: i32) {
        self.damping = damping;
    }

    /// Clear both integrator states.
    pub fn reset(&mut self) {
        self.low = 0;
        self.band = 0;
    }

    /// Run one sample through the recurrence; returns the lowpass tap.
    #[inline]
    pub fn process(&mut self, input: i32) -> i32 {
        let high = input - self.low - fixed::mul(self.damping, self.band);
        self.band += fixed::mul(self.cutoff, high);
        self.low += fixed::mul(self.cutoff, self.band);
        self.low
    }

    pub fn cutoff(&self) -> i32 {
        self.cutoff
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new()
    }
}
