pub mod dsp;
pub mod io; // Host-boundary sample format conversions
pub mod preset; // Patch descriptors for building voices
pub mod synth; // Voice composition and multi-voice engines

/// Largest block a host is expected to render in one call.
pub const MAX_BLOCK_SIZE: usize = 2048;
