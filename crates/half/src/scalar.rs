use {
    crate::{bits::format_half_bits, classify, decode::decode, encode::encode, error::ParseHalfError, layout::*},
    std::{
        cmp::Ordering,
        fmt,
        ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
        str::FromStr,
    },
};

/// 16-bit floating point number.
///
/// Magnitudes between roughly 6.1e-5 and 6.5e+4 carry a relative error of
/// about 9.8e-4; smaller ones are subnormal with an absolute error of 6.0e-8.
/// Every integer in -2048..=2048 is exact.
///
/// Widening to `f32` is exact. Narrowing rounds to nearest even. Arithmetic
/// promotes both operands to `f32`, operates there, and narrows the result.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct Half(u16);

impl Half {
    pub const ZERO: Self = Self(0x0000);
    pub const NEG_ZERO: Self = Self(0x8000);
    pub const ONE: Self = Self(0x3c00);
    pub const INFINITY: Self = Self(0x7c00);
    pub const NEG_INFINITY: Self = Self(0xfc00);
    /// NaN with the bit pattern 0111111111111111.
    pub const QNAN: Self = Self(0x7fff);
    /// NaN with the bit pattern 0111110111111111.
    pub const SNAN: Self = Self(0x7dff);

    /// Smallest positive subnormal, 2^-24 (about 5.96e-8).
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);
    /// Smallest positive normalized value, 2^-14 (about 6.10e-5).
    pub const MIN_POSITIVE: Self = Self(0x0400);
    /// Largest finite value, 65504.
    pub const MAX: Self = Self(0x7bff);
    /// Most negative finite value, -65504.
    pub const MIN: Self = Self(0xfbff);
    /// Smallest e for which 1 + e != 1, 2^-10.
    pub const EPSILON: Self = Self(0x1400);

    /// Significand digits including the hidden bit.
    pub const MANTISSA_DIGITS: u32 = 11;
    /// Decimal digits that survive a round trip through half.
    pub const DIGITS: u32 = 3;
    /// Decimal digits needed to distinguish every half.
    pub const DECIMAL_DIGITS: u32 = 5;
    pub const RADIX: u32 = 2;
    pub const MIN_EXP: i32 = -13;
    pub const MAX_EXP: i32 = 16;
    pub const MIN_10_EXP: i32 = -4;
    pub const MAX_10_EXP: i32 = 4;

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u16 {
        self.0
    }

    pub fn from_f32(value: f32) -> Self {
        Self(encode(value.to_bits()))
    }

    pub fn to_f32(self) -> f32 {
        f32::from_bits(decode(self.0))
    }

    /// Narrows through `f32`, so the value is rounded twice.
    pub fn from_f64(value: f64) -> Self {
        Self::from_f32(value as f32)
    }

    pub fn to_f64(self) -> f64 {
        self.to_f32() as f64
    }

    /// Round the significand to `n` bits (`n` below 10), ties away from zero.
    ///
    /// The low `10 - n` mantissa bits of the result are zero. If rounding up
    /// would overflow into the infinity exponent the significand is truncated
    /// instead. NaNs and infinities come back unchanged.
    pub fn round(self, n: u32) -> Self {
        if n >= HALF_MANTISSA_BITS || !self.is_finite() {
            return self;
        }

        let s = half_sign(self.0);
        let mut e = self.0 & HALF_MAGNITUDE_MASK;

        // exponent adjusts by itself when the significand carries
        e >>= 9 - n;
        e += e & 1;
        e <<= 9 - n;

        if e >= HALF_EXPONENT_MASK {
            e = self.0 & HALF_MAGNITUDE_MASK;
            e >>= 10 - n;
            e <<= 10 - n;
        }

        Self(s | e)
    }

    pub fn abs(self) -> Self {
        Self(self.0 & HALF_MAGNITUDE_MASK)
    }

    // --- Classification ---

    pub const fn is_finite(self) -> bool {
        classify::is_finite(self.0)
    }

    pub const fn is_normalized(self) -> bool {
        classify::is_normalized(self.0)
    }

    pub const fn is_denormalized(self) -> bool {
        classify::is_denormalized(self.0)
    }

    pub const fn is_zero(self) -> bool {
        classify::is_zero(self.0)
    }

    pub const fn is_nan(self) -> bool {
        classify::is_nan(self.0)
    }

    pub const fn is_infinity(self) -> bool {
        classify::is_infinity(self.0)
    }

    pub const fn is_negative(self) -> bool {
        classify::is_negative(self.0)
    }
}

// --- Conversions ---

impl From<f32> for Half {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<Half> for f32 {
    fn from(value: Half) -> Self {
        value.to_f32()
    }
}

impl From<Half> for f64 {
    fn from(value: Half) -> Self {
        value.to_f64()
    }
}

// --- Comparison ---

impl PartialEq for Half {
    fn eq(&self, other: &Self) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Half {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

// --- Arithmetic operators ---

impl Neg for Half {
    type Output = Self;
    fn neg(self) -> Self {
        Self(self.0 ^ HALF_SIGN_MASK)
    }
}

macro_rules! promoted_op {
    ($op:ident, $fn:ident, $assign:ident, $assign_fn:ident) => {
        impl $op for Half {
            type Output = Self;
            fn $fn(self, rhs: Self) -> Self {
                Self::from_f32(self.to_f32().$fn(rhs.to_f32()))
            }
        }

        impl $op<f32> for Half {
            type Output = Self;
            fn $fn(self, rhs: f32) -> Self {
                Self::from_f32(self.to_f32().$fn(rhs))
            }
        }

        impl $assign for Half {
            fn $assign_fn(&mut self, rhs: Self) {
                *self = $op::$fn(*self, rhs);
            }
        }

        impl $assign<f32> for Half {
            fn $assign_fn(&mut self, rhs: f32) {
                *self = $op::$fn(*self, rhs);
            }
        }
    };
}

promoted_op!(Add, add, AddAssign, add_assign);
promoted_op!(Sub, sub, SubAssign, sub_assign);
promoted_op!(Mul, mul, MulAssign, mul_assign);
promoted_op!(Div, div, DivAssign, div_assign);

// --- Formatting ---

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Half").field(&self.to_f32()).finish()
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl fmt::Binary for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_half_bits(self.0))
    }
}

impl FromStr for Half {
    type Err = ParseHalfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseHalfError::Empty);
        }
        Ok(Self::from_f32(s.parse::<f32>()?))
    }
}
