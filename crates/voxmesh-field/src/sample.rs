//! Numeric sample types a field can hold.

use std::fmt::Debug;

/// A scalar value stored in a [`ScalarField3D`](crate::ScalarField3D).
///
/// Classification and interpolation run in `f64`, so every sample type only
/// needs lossless-enough conversions in both directions. Integer conversions
/// from `f64` round to nearest and saturate at the type's range.
pub trait Sample: Copy + Default + PartialOrd + Debug + Send + Sync + 'static {
    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_sample_int {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value.round() as $t
                }
            }
        )*
    };
}

impl_sample_int!(u8, u16, i16, i32, u32, i64);

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_rounding() {
        assert_eq!(u8::from_f64(127.6), 128);
        assert_eq!(i32::from_f64(-2.4), -2);
    }

    #[test]
    fn test_integer_saturation() {
        assert_eq!(u8::from_f64(1000.0), 255);
        assert_eq!(u8::from_f64(-5.0), 0);
        assert_eq!(i16::from_f64(1e9), i16::MAX);
    }

    #[test]
    fn test_float_passthrough() {
        assert_eq!(f64::from_f64(0.25).to_f64(), 0.25);
        assert_eq!(f32::from_f64(1.5), 1.5f32);
    }
}
