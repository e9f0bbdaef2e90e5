use std::sync::Arc;

use crate::dsp::{
    envelope::{Envelope, EnvelopeParams},
    filter::Filter,
    fixed,
    oscillator::Oscillator,
    wavetable::Wavetable,
};

/// One monophonic note generator: oscillator → envelope gain → filter.
///
/// A voice exclusively owns its oscillator, envelope and filter state; the
/// only shared data is the read-only wavetable behind the `Arc`, so many
/// voices reference one table without copying or locking. Every method is
/// allocation-free and completes in bounded time, safe to call from a
/// realtime audio callback.
pub struct Voice {
    oscillator: Oscillator,
    envelope: Envelope,
    filter: Filter,
    wavetable: Arc<Wavetable>,
}

impl Voice {
    /// A voice with a gate-like instant envelope and a fully open filter.
    pub fn new(wavetable: Arc<Wavetable>) -> Self {
        Self {
            oscillator: Oscillator::new(),
            envelope: Envelope::new(EnvelopeParams::instant()),
            filter: Filter::new(),
            wavetable,
        }
    }

    pub fn set_envelope(&mut self, params: EnvelopeParams) {
        self.envelope.set_params(params);
    }

    /// Tune the filter cutoff; see [`Filter::set_cutoff`] for the
    /// stability clamp.
    pub fn set_cutoff(&mut self, cutoff_hz: u32, sample_rate: u32) {
        self.filter.set_cutoff(cutoff_hz, sample_rate);
    }

    pub fn set_damping(&mut self, damping: i32) {
        self.filter.set_damping(damping);
    }

    /// Start (or retrigger) a note. Sets the oscillator pitch and gates
    /// the envelope into Attack. Caller contract: `sample_rate` nonzero.
    pub fn note_on(&mut self, freq_hz: u32, sample_rate: u32) {
        self.oscillator.set_frequency(freq_hz, sample_rate);
        self.envelope.note_on();
    }

    /// Release the note; the envelope decays to silence on its own.
    pub fn note_off(&mut self) {
        self.envelope.note_off();
    }

    /// Produce one output sample in the signal format.
    #[inline]
    pub fn process(&mut self) -> i32 {
        let osc_out = self.oscillator.process(&self.wavetable);
        let env_gain = self.envelope.process();
        self.filter.process(fixed::mul(osc_out, env_gain))
    }

    /// Render `out.len()` samples. With `accumulate` set the block is
    /// added onto the existing buffer contents — that is the multi-voice
    /// mixing path, no intermediate per-voice buffer needed.
    pub fn process_block(&mut self, out: &mut [i32], accumulate: bool) {
        if accumulate {
            for slot in out.iter_mut() {
                *slot += self.process();
            }
        } else {
            for slot in out.iter_mut() {
                *slot = self.process();
            }
        }
    }

    /// True while the envelope is still shaping output. A host can skip
    /// rendering inactive voices.
    pub fn is_active(&self) -> bool {
        self.envelope.is_active()
    }

    /// Raw envelope level, Q8.24 (diagnostics and voice stealing).
    pub fn envelope_level(&self) -> i32 {
        self.envelope.level()
    }

    pub fn wavetable(&self) -> &Arc<Wavetable> {
        &self.wavetable
    }
}
