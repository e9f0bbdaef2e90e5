use crate::dsp::wavetable::Wavetable;

/// Phase-accumulator oscillator.
///
/// Pitch lives entirely in `increment`: each sample the 32-bit phase
/// advances by it and wraps on overflow, which is the cycle boundary —
/// 2^32 phase units are exactly one cycle of the wavetable. The wraparound
/// is load-bearing, not an overflow bug.
///
/// The oscillator owns no table data; the caller passes the shared
/// wavetable into [`process`](Self::process), so any number of oscillators
/// can read one table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Oscillator {
    phase: u32,
    increment: u32,
}

impl Oscillator {
    pub fn new() -> Self {
        Self {
            phase: 0,
            increment: 0,
        }
    }

    /// Derive the per-sample phase increment for a pitch.
    ///
    /// `increment = freq · 2^32 / sample_rate`, computed in u64 so the
    /// shift cannot overflow. Caller contract: `sample_rate` is nonzero.
    pub fn set_frequency(&mut self, freq_hz: u32, sample_rate: u32) {
        self.increment = (((freq_hz as u64) << 32) / sample_rate as u64) as u32;
    }

    /// Advance one sample and read the table at the new phase.
    #[inline]
    pub fn process(&mut self, wavetable: &Wavetable) -> i32 {
        self.phase = self.phase.wrapping_add(self.increment);
        wavetable.lookup(self.phase)
    }

    /// Rewind to the start of the cycle without touching pitch.
    pub fn reset(&mut self) {
        self.phase = 0;
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn increment(&self) -> u32 {
        self.increment
    }
}
