use crate::{layout::*, tables::EXP_LUT};

// float magnitudes at or below this round to zero (0x3300_0000 is 2^-25, a
// tie between zero and the smallest subnormal)
const FLUSH_TO_ZERO_MAX: u32 = 0x3300_0000;

// largest float magnitude that still rounds to a finite half (just below 65520)
const FINITE_MAX: u32 = 0x477f_efff;

// smallest float magnitude that narrows to a normalized half (2^-14)
const NORMAL_MIN: u32 = 0x3880_0000;

// exponent rebias from single to half, in single-precision bit position
const REBIAS: u32 = (BIAS_DELTA as u32) << FLOAT_MANTISSA_BITS;

/// Narrow the bit pattern of a single-precision float to a half, rounding to
/// nearest even.
///
/// Total: overflow rounds to a signed infinity, underflow to a signed zero or
/// subnormal, and NaNs stay NaNs (see [`NAN_FALLBACK_BIT`]). Dispatches to the
/// table path when the `lut` feature is enabled, otherwise to
/// [`encode_arith`].
#[inline]
pub fn encode(f: u32) -> u16 {
    if cfg!(feature = "lut") {
        encode_table(f)
    } else {
        encode_arith(f)
    }
}

/// Table path.
///
/// The exponent lookup table resolves the common case, a float that narrows
/// to a normalized half without any chance of exponent overflow. Everything
/// else (zeros, underflow, overflow, infinities and NaNs) gets the sentinel
/// and goes through [`convert_general`].
#[inline]
pub fn encode_table(f: u32) -> u16 {
    let fragment = EXP_LUT[exp_lut_key(f)];
    if fragment != 0 {
        let m = float_mantissa(f);
        fragment + ((m + 0x0fff + ((m >> MANTISSA_SHIFT) & 1)) >> MANTISSA_SHIFT) as u16
    } else {
        convert_general(f)
    }
}

fn convert_general(f: u32) -> u16 {
    let s = (float_sign(f) >> 16) as u16;
    let e = float_exponent(f) as i32 - BIAS_DELTA;
    let m = float_mantissa(f);

    if e <= 0 {
        if e < -10 {
            // below half the smallest subnormal, or zero, or a float subnormal
            return s;
        }

        // subnormal half: add the hidden bit, then round to (10 + e) bits,
        // ties to even. A carry out of the mantissa lands in the exponent
        // field and yields the smallest normalized half.
        let m = m | 0x0080_0000;
        let t = (14 - e) as u32;
        let a = (1 << (t - 1)) - 1;
        let b = (m >> t) & 1;
        return s | ((m + a + b) >> t) as u16;
    }

    if e == FLOAT_EXPONENT_SPECIAL as i32 - BIAS_DELTA {
        if m == 0 {
            return s | HALF_EXPONENT_MASK;
        }
        let payload = (m >> MANTISSA_SHIFT) as u16;
        let s = if NAN_PRESERVES_SIGN { s } else { 0 };
        if payload == 0 {
            return s | HALF_EXPONENT_MASK | NAN_FALLBACK_BIT;
        }
        return s | HALF_EXPONENT_MASK | payload;
    }

    let m = m + 0x0fff + ((m >> MANTISSA_SHIFT) & 1);
    let (e, m) = if m & 0x0080_0000 != 0 { (e + 1, 0) } else { (e, m) };

    if e > 30 {
        return s | HALF_EXPONENT_MASK;
    }

    s | ((e as u16) << HALF_MANTISSA_BITS) | (m >> MANTISSA_SHIFT) as u16
}

/// Arithmetic path: range checks on the float magnitude, no tables.
pub const fn encode_arith(f: u32) -> u16 {
    let magnitude = f & FLOAT_MAGNITUDE_MASK;
    let sign = (float_sign(f) >> 16) as u16;

    if magnitude <= FLUSH_TO_ZERO_MAX {
        return sign;
    }

    if magnitude >= FLOAT_EXPONENT_MASK {
        if magnitude == FLOAT_EXPONENT_MASK {
            return sign | HALF_EXPONENT_MASK;
        }
        let payload = (float_mantissa(magnitude) >> MANTISSA_SHIFT) as u16;
        let sign = if NAN_PRESERVES_SIGN { sign } else { 0 };
        let fallback = if payload == 0 { NAN_FALLBACK_BIT } else { 0 };
        return sign | HALF_EXPONENT_MASK | payload | fallback;
    }

    if magnitude > FINITE_MAX {
        return sign | HALF_EXPONENT_MASK;
    }

    if magnitude >= NORMAL_MIN {
        let rebiased = magnitude - REBIAS;
        let rounded = (rebiased + 0x0fff + ((rebiased >> MANTISSA_SHIFT) & 1)) >> MANTISSA_SHIFT;
        return sign | rounded as u16;
    }

    // subnormal half: `rest` holds the discarded bits left-aligned, so the
    // round bit is bit 31 and everything below it is sticky
    let shift = 0x7e - (magnitude >> FLOAT_MANTISSA_BITS);
    let m = 0x0080_0000 | float_mantissa(magnitude);
    let rest = m << (32 - shift);
    let h = sign | (m >> shift) as u16;
    if rest > 0x8000_0000 || (rest == 0x8000_0000 && h & 1 != 0) {
        h + 1
    } else {
        h
    }
}

pub fn encode_f32(value: f32) -> u16 {
    encode(value.to_bits())
}

/// Encode `src` into `dst`.
///
/// # Panics
///
/// When the two slices differ in length.
pub fn encode_slice(src: &[f32], dst: &mut [u16]) {
    assert_eq!(src.len(), dst.len(), "encode_slice: length mismatch");
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = encode_f32(s);
    }
}
