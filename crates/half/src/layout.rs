//! Bit layouts of the half (1-5-10) and single (1-8-23) formats.
//!
//! ```text
//! half    15 | 14   10 | 9        0
//!          s |  eeeee  | mmmmmmmmmm
//!
//! single  31 | 30     23 | 22                    0
//!          s |  eeeeeeee | mmmmmmmmmmmmmmmmmmmmmmm
//! ```

// --- Half ---

pub const HALF_SIGN_MASK: u16 = 0x8000;
pub const HALF_EXPONENT_MASK: u16 = 0x7c00;
pub const HALF_MANTISSA_MASK: u16 = 0x03ff;
pub const HALF_MAGNITUDE_MASK: u16 = 0x7fff;

pub const HALF_MANTISSA_BITS: u32 = 10;
pub const HALF_EXPONENT_BIAS: i32 = 15;

/// Biased exponent of infinities and NaNs.
pub const HALF_EXPONENT_SPECIAL: u16 = 0x1f;

// --- Single ---

pub const FLOAT_SIGN_MASK: u32 = 0x8000_0000;
pub const FLOAT_EXPONENT_MASK: u32 = 0x7f80_0000;
pub const FLOAT_MANTISSA_MASK: u32 = 0x007f_ffff;
pub const FLOAT_MAGNITUDE_MASK: u32 = 0x7fff_ffff;

pub const FLOAT_MANTISSA_BITS: u32 = 23;
pub const FLOAT_EXPONENT_BIAS: i32 = 127;

/// Biased exponent of infinities and NaNs.
pub const FLOAT_EXPONENT_SPECIAL: u32 = 0xff;

/// Difference between the two exponent biases (127 - 15).
pub const BIAS_DELTA: i32 = FLOAT_EXPONENT_BIAS - HALF_EXPONENT_BIAS;

/// Number of mantissa bits dropped when narrowing single to half.
pub const MANTISSA_SHIFT: u32 = FLOAT_MANTISSA_BITS - HALF_MANTISSA_BITS;

// --- NaN narrowing policy ---

/// Narrowing a NaN always keeps its sign bit.
pub const NAN_PRESERVES_SIGN: bool = true;

/// Mantissa bit forced on when the top ten payload bits of a float NaN are
/// all zero, so the narrowed value cannot read as an infinity.
pub const NAN_FALLBACK_BIT: u16 = 0x0001;

// --- Accessors ---

pub const fn half_sign(h: u16) -> u16 {
    h & HALF_SIGN_MASK
}

/// Biased 5-bit exponent field.
pub const fn half_exponent(h: u16) -> u16 {
    (h & HALF_EXPONENT_MASK) >> HALF_MANTISSA_BITS
}

pub const fn half_mantissa(h: u16) -> u16 {
    h & HALF_MANTISSA_MASK
}

pub const fn float_sign(f: u32) -> u32 {
    f & FLOAT_SIGN_MASK
}

/// Biased 8-bit exponent field.
pub const fn float_exponent(f: u32) -> u32 {
    (f & FLOAT_EXPONENT_MASK) >> FLOAT_MANTISSA_BITS
}

pub const fn float_mantissa(f: u32) -> u32 {
    f & FLOAT_MANTISSA_MASK
}

/// Key into the exponent lookup table: the sign bit and the 8-bit exponent.
pub const fn exp_lut_key(f: u32) -> usize {
    (f >> FLOAT_MANTISSA_BITS) as usize
}

/// Assemble a half from its three fields. Fields are masked, not checked.
pub const fn pack_half(sign: bool, exponent: u16, mantissa: u16) -> u16 {
    let s = if sign { HALF_SIGN_MASK } else { 0 };
    s | ((exponent << HALF_MANTISSA_BITS) & HALF_EXPONENT_MASK) | (mantissa & HALF_MANTISSA_MASK)
}
