#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Control messages a host pushes into the engine from outside the audio
/// callback. Notes are addressed by frequency — this kernel speaks hertz,
/// not any control protocol.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SynthMessage {
    NoteOn { freq_hz: u32 },
    NoteOff { freq_hz: u32 },
    AllNotesOff,
}

/// Seam between the engine and whatever queue delivers its messages, so
/// the realtime path never depends on a concrete channel type.
pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

/// Lock-free SPSC ring buffer — the queue to use when the engine runs
/// inside an audio callback.
#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}

/// Plain FIFO for offline rendering and tests, where realtime safety of
/// the queue itself does not matter.
impl MessageReceiver for std::collections::VecDeque<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        self.pop_front()
    }
}
