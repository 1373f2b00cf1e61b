use crate::{layout::*, tables::to_float_table};

/// Widen a half to the bit pattern of the equal single-precision float.
///
/// Exact for every input: zeros, subnormals, infinities and NaN payloads all
/// survive unchanged. Dispatches to the table path when the `lut` feature is
/// enabled, otherwise to [`decode_arith`].
#[inline]
pub fn decode(h: u16) -> u32 {
    if cfg!(feature = "lut") {
        decode_table(h)
    } else {
        decode_arith(h)
    }
}

/// Table path: one lookup in the to-float table.
#[inline]
pub fn decode_table(h: u16) -> u32 {
    to_float_table()[h as usize]
}

/// Arithmetic path: rebias the exponent and shift the mantissa into place,
/// normalizing subnormals.
pub const fn decode_arith(h: u16) -> u32 {
    let sign = (half_sign(h) as u32) << 16;
    let exponent = half_exponent(h) as u32;
    let mantissa = half_mantissa(h) as u32;

    if exponent == 0 {
        if mantissa == 0 {
            return sign;
        }
        // the leading one sits at bit 31 - lz; move it to bit 23 and drop it
        let lz = mantissa.leading_zeros();
        let exponent = 134 - lz;
        let mantissa = (mantissa << (lz - 8)) & FLOAT_MANTISSA_MASK;
        return sign | (exponent << FLOAT_MANTISSA_BITS) | mantissa;
    }

    if exponent == HALF_EXPONENT_SPECIAL as u32 {
        return sign | FLOAT_EXPONENT_MASK | (mantissa << MANTISSA_SHIFT);
    }

    let exponent = exponent + BIAS_DELTA as u32;
    sign | (exponent << FLOAT_MANTISSA_BITS) | (mantissa << MANTISSA_SHIFT)
}

pub fn decode_f32(h: u16) -> f32 {
    f32::from_bits(decode(h))
}

/// Decode `src` into `dst`.
///
/// # Panics
///
/// When the two slices differ in length.
pub fn decode_slice(src: &[u16], dst: &mut [f32]) {
    assert_eq!(src.len(), dst.len(), "decode_slice: length mismatch");
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = decode_f32(s);
    }
}
