//! Show the soft-retrigger behavior: a note retriggered mid-decay ramps
//! up again from its current envelope level instead of snapping to zero.
//! Prints the envelope level (Q8.24, as a fraction) around the retrigger.

use std::sync::Arc;

use fixwave::dsp::{envelope::EnvelopeParams, fixed, wavetable::Harmonic, wavetable::Wavetable};
use fixwave::synth::Voice;

const SAMPLE_RATE: u32 = 44_100;

fn main() {
    let table = Arc::new(Wavetable::build(&[Harmonic::with_amplitude(fixed::ONE)]));
    let mut voice = Voice::new(table);
    voice.set_envelope(EnvelopeParams::new(50, 400, fixed::ONE / 4, 100, SAMPLE_RATE));

    voice.note_on(440, SAMPLE_RATE);

    // Run well into the decay stage, then retrigger.
    let retrigger_at = (SAMPLE_RATE / 10) as usize; // 100ms in
    for i in 0..(SAMPLE_RATE / 5) as usize {
        if i == retrigger_at {
            println!(
                "retrigger at level {:.4} (not 0.0000)",
                voice.envelope_level() as f64 / fixed::ENV_ONE as f64
            );
            voice.note_on(440, SAMPLE_RATE);
        }
        voice.process();

        if i % 2_205 == 0 {
            println!(
                "t={:>5.3}s level={:.4}",
                i as f64 / SAMPLE_RATE as f64,
                voice.envelope_level() as f64 / fixed::ENV_ONE as f64
            );
        }
    }
}
