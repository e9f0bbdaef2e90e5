//! Render the three-voice chord scenario to `output.raw` (mono 16-bit
//! signed little-endian PCM at 44.1kHz — import raw in any audio editor).
//!
//! A3 / C#4 / E4 on the organ patch, note-off at three seconds, five
//! seconds total.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use fixwave::io::pcm;
use fixwave::preset::Patch;
use fixwave::synth::Voice;

const SAMPLE_RATE: u32 = 44_100;
const DURATION_SEC: u32 = 5;
const BLOCK_SIZE: usize = 256;

fn main() -> std::io::Result<()> {
    let patch = Patch::organ();
    let table = patch.build_wavetable();

    let mut voices: Vec<Voice> = [220u32, 277, 329] // A3, C#4, E4
        .iter()
        .map(|&freq| {
            let mut v = patch.voice(Arc::clone(&table), SAMPLE_RATE);
            v.note_on(freq, SAMPLE_RATE);
            v
        })
        .collect();

    let file = File::create("output.raw")?;
    let mut writer = BufWriter::new(file);

    let total_samples = (SAMPLE_RATE * DURATION_SEC) as usize;
    let note_off_sample = (SAMPLE_RATE * 3) as usize;

    let mut mix = [0i32; BLOCK_SIZE];
    let mut out = [0i16; BLOCK_SIZE];
    let mut rendered = 0usize;

    while rendered < total_samples {
        let n = BLOCK_SIZE.min(total_samples - rendered);

        if rendered <= note_off_sample && note_off_sample < rendered + n {
            // Split the block at the note-off boundary so the release
            // starts on the exact sample.
            let first = note_off_sample - rendered;
            render(&mut voices, &mut mix[..first]);
            for voice in &mut voices {
                voice.note_off();
            }
            let (_, rest) = mix.split_at_mut(first);
            render(&mut voices, &mut rest[..n - first]);
        } else {
            render(&mut voices, &mut mix[..n]);
        }

        pcm::write_pcm16(&mix[..n], voices.len() as u32, &mut out[..n]);
        for &sample in &out[..n] {
            writer.write_all(&sample.to_le_bytes())?;
        }
        rendered += n;
    }

    writer.flush()?;
    println!("Done. Written to output.raw");
    Ok(())
}

fn render(voices: &mut [Voice], mix: &mut [i32]) {
    for (i, voice) in voices.iter_mut().enumerate() {
        voice.process_block(mix, i > 0);
    }
}
