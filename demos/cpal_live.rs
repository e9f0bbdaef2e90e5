//! Play the organ patch through the default output device.
//!
//! Build with: cargo run --example cpal_live --features cpal-demo
//!
//! The synth runs inside the cpal callback; note events travel over a
//! lock-free rtrb queue from the main thread, so the audio thread never
//! blocks or allocates.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use fixwave::io::pcm;
use fixwave::preset::Patch;
use fixwave::synth::{message::SynthMessage, poly::PolySynth};
use fixwave::MAX_BLOCK_SIZE;

const MAX_VOICES: usize = 4;

fn main() {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .expect("no audio output device");
    let config = device
        .default_output_config()
        .expect("no default output config");

    if config.sample_format() != cpal::SampleFormat::F32 {
        eprintln!("demo only handles f32 output, got {:?}", config.sample_format());
        return;
    }

    let sample_rate = config.sample_rate().0;
    let channels = config.channels() as usize;

    let patch = Patch::organ();
    let table = patch.build_wavetable();
    let (mut tx, rx) = rtrb::RingBuffer::<SynthMessage>::new(64);

    let mut synth = PolySynth::new(
        Arc::clone(&table),
        sample_rate,
        MAX_VOICES,
        patch.envelope.params(sample_rate),
        rx,
    );
    if let Some(filter) = patch.filter {
        synth.set_cutoff(filter.cutoff_hz, filter.damping);
    }

    let mut mix = vec![0i32; MAX_BLOCK_SIZE];
    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                for frames in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
                    let n = frames.len() / channels;
                    synth.render_block(&mut mix[..n]);
                    for (frame, &sample) in frames.chunks_mut(channels).zip(mix.iter()) {
                        let value =
                            pcm::to_pcm16(sample, MAX_VOICES as u32) as f32 / 32_768.0;
                        frame.fill(value);
                    }
                }
            },
            |err| eprintln!("stream error: {err}"),
            None,
        )
        .expect("failed to build output stream");

    stream.play().expect("failed to start stream");

    // A3 / C#4 / E4, held for three seconds, then released.
    for freq in [220, 277, 329] {
        tx.push(SynthMessage::NoteOn { freq_hz: freq }).ok();
    }
    thread::sleep(Duration::from_secs(3));
    tx.push(SynthMessage::AllNotesOff).ok();
    thread::sleep(Duration::from_secs(1));
}
