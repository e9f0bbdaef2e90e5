use std::sync::Arc;

use crate::{
    dsp::{envelope::EnvelopeParams, wavetable::Wavetable},
    synth::{
        message::{MessageReceiver, SynthMessage},
        voice::Voice,
    },
    MAX_BLOCK_SIZE,
};

struct VoiceSlot {
    voice: Voice,
    freq_hz: u32,
    age: u64,
}

/// A fixed pool of voices sharing one wavetable, driven by control
/// messages and mixed into a caller buffer.
///
/// All allocation happens in `new`; `render_block` is allocation-free and
/// mixes through the voices' accumulate path, so it is safe to call from
/// an audio callback with the message producer living on another thread.
pub struct PolySynth<R: MessageReceiver> {
    slots: Vec<VoiceSlot>,
    rx: R,
    sample_rate: u32,
    frame_counter: u64,
}

impl<R: MessageReceiver> PolySynth<R> {
    pub fn new(
        wavetable: Arc<Wavetable>,
        sample_rate: u32,
        max_voices: usize,
        envelope: EnvelopeParams,
        rx: R,
    ) -> Self {
        let slots = (0..max_voices)
            .map(|_| {
                let mut voice = Voice::new(Arc::clone(&wavetable));
                voice.set_envelope(envelope);
                VoiceSlot {
                    voice,
                    freq_hz: 0,
                    age: 0,
                }
            })
            .collect();

        Self {
            slots,
            rx,
            sample_rate,
            frame_counter: 0,
        }
    }

    /// Number of voice slots; the divisor a host should hand to the PCM
    /// mix-down to keep the worst-case sum inside the sample range.
    pub fn voice_count(&self) -> usize {
        self.slots.len()
    }

    /// Tune every voice's filter at once.
    pub fn set_cutoff(&mut self, cutoff_hz: u32, damping: i32) {
        for slot in &mut self.slots {
            slot.voice.set_cutoff(cutoff_hz, self.sample_rate);
            slot.voice.set_damping(damping);
        }
    }

    /// Drain pending messages, then mix all sounding voices into `out`.
    /// The buffer is zeroed first; convert with [`crate::io::pcm`] after.
    pub fn render_block(&mut self, out: &mut [i32]) {
        debug_assert!(out.len() <= MAX_BLOCK_SIZE);

        while let Some(msg) = self.rx.pop() {
            match msg {
                SynthMessage::NoteOn { freq_hz } => {
                    let age = self.frame_counter;
                    let sample_rate = self.sample_rate;
                    if let Some(slot) = self.allocate_slot() {
                        slot.freq_hz = freq_hz;
                        slot.age = age;
                        slot.voice.note_on(freq_hz, sample_rate);
                    }
                }
                SynthMessage::NoteOff { freq_hz } => {
                    if let Some(slot) = self.find_slot(freq_hz) {
                        slot.voice.note_off();
                    }
                }
                SynthMessage::AllNotesOff => {
                    for slot in &mut self.slots {
                        if slot.voice.is_active() {
                            slot.voice.note_off();
                        }
                    }
                }
            }
        }

        out.fill(0);
        for slot in &mut self.slots {
            if slot.voice.is_active() {
                slot.voice.process_block(out, true);
            }
        }

        self.frame_counter += out.len() as u64;
    }

    /// Free voice first; otherwise steal the longest-sounding one. An
    /// active note stolen mid-flight soft-retriggers from its current
    /// envelope level, so stealing never clicks.
    fn allocate_slot(&mut self) -> Option<&mut VoiceSlot> {
        let idx = match self.slots.iter().position(|s| !s.voice.is_active()) {
            Some(idx) => idx,
            None => self
                .slots
                .iter()
                .enumerate()
                .min_by_key(|(_, s)| s.age)
                .map(|(idx, _)| idx)?,
        };
        Some(&mut self.slots[idx])
    }

    fn find_slot(&mut self, freq_hz: u32) -> Option<&mut VoiceSlot> {
        self.slots
            .iter_mut()
            .find(|s| s.freq_hz == freq_hz && s.voice.is_active())
    }
}
