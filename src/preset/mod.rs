#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::sync::Arc;

use crate::dsp::{envelope::EnvelopeParams, fixed, wavetable::Harmonic, wavetable::Wavetable};
use crate::synth::voice::Voice;

/// A complete sound description: harmonic content plus envelope and filter
/// settings. Plain data — building the wavetable and deriving rates from a
/// sample rate happens when the patch is instantiated, so one patch can be
/// reused across hosts running at different rates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Patch {
    pub name: String,
    pub description: Option<String>,
    pub harmonics: Vec<Harmonic>,
    pub envelope: EnvelopeDescriptor,
    pub filter: Option<FilterDescriptor>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeDescriptor {
    pub attack_ms: u32,
    pub decay_ms: u32,
    /// Q16.16 sustain level.
    pub sustain: i32,
    pub release_ms: u32,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct FilterDescriptor {
    pub cutoff_hz: u32,
    /// Q16.16 inverse-resonance coefficient.
    pub damping: i32,
}

impl EnvelopeDescriptor {
    pub fn params(&self, sample_rate: u32) -> EnvelopeParams {
        EnvelopeParams::new(
            self.attack_ms,
            self.decay_ms,
            self.sustain,
            self.release_ms,
            sample_rate,
        )
    }
}

impl Patch {
    /// Build the shared wavetable this patch describes. Offline: do this
    /// once at load time, never inside the audio callback.
    pub fn build_wavetable(&self) -> Arc<Wavetable> {
        Arc::new(Wavetable::build(&self.harmonics))
    }

    /// Construct a voice playing this patch at the given sample rate.
    pub fn voice(&self, wavetable: Arc<Wavetable>, sample_rate: u32) -> Voice {
        let mut voice = Voice::new(wavetable);
        voice.set_envelope(self.envelope.params(sample_rate));
        if let Some(filter) = self.filter {
            voice.set_cutoff(filter.cutoff_hz, sample_rate);
            voice.set_damping(filter.damping);
        }
        voice
    }

    /// The organ-ish default patch from the original demo: eight harmonics
    /// at 1/n amplitude with quadratically spread phases.
    pub fn organ() -> Self {
        let harmonics = (0..8)
            .map(|i| {
                let n = i as i32 + 1;
                Harmonic {
                    amplitude: fixed::ONE / n,
                    // ~11 degrees per n^2: 0x0800_0000 is 1/32 of a cycle.
                    // Wraps past a full turn for the upper harmonics.
                    phase: ((n * n) as u32).wrapping_mul(0x0800_0000),
                }
            })
            .collect();

        Self {
            name: "organ".into(),
            description: Some("stacked 1/n harmonics with spread phases".into()),
            harmonics,
            envelope: EnvelopeDescriptor {
                attack_ms: 2_000,
                decay_ms: 1_000,
                sustain: fixed::ONE / 3,
                release_ms: 300,
            },
            filter: Some(FilterDescriptor {
                cutoff_hz: 500,
                damping: fixed::ONE,
            }),
        }
    }
}
