// Purpose: voice composition and multi-voice management
// This layer sits above the dsp primitives and wires them into notes

pub mod message;
pub mod poly;
pub mod voice;

pub use voice::Voice;
