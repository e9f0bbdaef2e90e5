//! Mix-down from the kernel's signal format to host PCM.
//!
//! Voice output already spans the i16 sample range (the wavetable is
//! normalized to ±32760 and envelope gain never exceeds one), so the
//! boundary conversion is: scale down by the number of summed voices,
//! then clamp as a safety net against filter resonance overshoot.

/// Convert one mixed sample to 16-bit PCM. `voice_count` is the number of
/// voices summed into the sample; 0 is treated as 1.
#[inline]
pub fn to_pcm16(sample: i32, voice_count: u32) -> i16 {
    let scaled = sample / voice_count.max(1) as i32;
    scaled.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// Convert a mixed block into a host-provided i16 buffer.
/// Both slices must be the same length.
pub fn write_pcm16(block: &[i32], voice_count: u32, out: &mut [i16]) {
    debug_assert_eq!(block.len(), out.len());
    for (slot, &sample) in out.iter_mut().zip(block.iter()) {
        *slot = to_pcm16(sample, voice_count);
    }
}
