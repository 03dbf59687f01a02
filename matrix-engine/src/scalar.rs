//! FILENAME: matrix-engine/src/scalar.rs
//! PURPOSE: Element types the determinant engine can work over.
//! CONTEXT: Integer scalars give exact results or report overflow; they
//! never wrap. Floating-point scalars accumulate ordinary rounding across
//! the expansion and their checked operations always succeed. No pivoting
//! or compensation is attempted for either.

use std::fmt::Debug;

/// A number that can appear as a matrix entry.
pub trait Scalar: Copy + Debug + PartialEq + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_neg(self) -> Option<Self>;
}

macro_rules! impl_integer_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                fn checked_neg(self) -> Option<Self> {
                    <$ty>::checked_neg(self)
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }

                fn checked_neg(self) -> Option<Self> {
                    Some(-self)
                }
            }
        )*
    };
}

impl_integer_scalar!(i32, i64, i128);
impl_float_scalar!(f32, f64);
