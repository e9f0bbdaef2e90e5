//! Low-level fixed-point DSP primitives.
//!
//! These components are deterministic, allocation-free and realtime-safe,
//! using only integer arithmetic — no float ever touches the signal path.
//! They intentionally stay focused on the signal-processing math so the
//! `synth` layer can compose them into voices without hidden state.

/// Attack/decay/sustain/release envelope generator (Q8.24 internally).
pub mod envelope;
/// Q16.16 signal format, Q8.24 envelope format, widening multiply.
pub mod fixed;
/// Chamberlin state-variable filter, lowpass tap.
pub mod filter;
/// Phase-accumulator wavetable oscillator.
pub mod oscillator;
/// Quantized sine lookup with 24-bit linear interpolation.
pub mod sine;
/// Additive wavetable construction and shared read-only tables.
pub mod wavetable;

pub use envelope::EnvelopeState;
