use crate::layout::*;

/// Sign bit set. Holds for negative zero and for NaNs with the sign bit set.
pub const fn is_negative(h: u16) -> bool {
    h & HALF_SIGN_MASK != 0
}

/// Either signed zero.
pub const fn is_zero(h: u16) -> bool {
    h & HALF_MAGNITUDE_MASK == 0
}

/// Normalized, denormalized or zero.
pub const fn is_finite(h: u16) -> bool {
    half_exponent(h) != HALF_EXPONENT_SPECIAL
}

pub const fn is_normalized(h: u16) -> bool {
    let e = half_exponent(h);
    e != 0 && e != HALF_EXPONENT_SPECIAL
}

pub const fn is_denormalized(h: u16) -> bool {
    half_exponent(h) == 0 && half_mantissa(h) != 0
}

pub const fn is_infinity(h: u16) -> bool {
    half_exponent(h) == HALF_EXPONENT_SPECIAL && half_mantissa(h) == 0
}

pub const fn is_nan(h: u16) -> bool {
    half_exponent(h) == HALF_EXPONENT_SPECIAL && half_mantissa(h) != 0
}
