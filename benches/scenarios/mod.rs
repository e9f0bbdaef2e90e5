//! Real-world scenario benchmarks: full voice chains and multi-voice
//! mixes, modeled on the chord demo.

mod chord;
mod voice;

pub use chord::bench_chord;
pub use voice::bench_voice;
