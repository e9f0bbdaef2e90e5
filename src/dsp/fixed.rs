/*
Fixed-Point Formats
===================

Everything in this crate is integer math over two fixed-point formats:

  signal    Q16.16 over i32. One is 65536. Used for audio samples, gains
            and filter coefficients.

  envelope  Q8.24 over i32. One is 16777216. Used only inside the envelope
            generator, where per-sample increments can be tiny (a 2-second
            attack at 48kHz steps by ~1/96000 per sample) and Q16.16 would
            quantize the ramp audibly.

The multiply widens to i64 before shifting back down, so two full-scale
Q16.16 values multiply without intermediate overflow:

    a * b           up to 62 significant bits in i64
    >> 16           back to Q16.16
    as i32          caller guarantees the product fits

No saturation happens here. Keeping amplitudes bounded upstream (the
wavetable normalizes to a known peak, envelope gain never exceeds one) is
what makes the truncating cast safe.
*/

/// Fractional bits in the signal format.
pub const SHIFT: u32 = 16;
/// 1.0 in Q16.16.
pub const ONE: i32 = 1 << SHIFT;

/// Fractional bits in the envelope format.
pub const ENV_SHIFT: u32 = 24;
/// 1.0 in Q8.24.
pub const ENV_ONE: i32 = 1 << ENV_SHIFT;

/// Convert an integer to Q16.16.
#[inline]
pub const fn from_int(value: i32) -> i32 {
    value << SHIFT
}

/// Truncate a Q16.16 value to its integer part.
#[inline]
pub const fn to_int(value: i32) -> i32 {
    value >> SHIFT
}

/// Multiply two Q16.16 values, widening through i64.
#[inline]
pub const fn mul(a: i32, b: i32) -> i32 {
    ((a as i64 * b as i64) >> SHIFT) as i32
}
