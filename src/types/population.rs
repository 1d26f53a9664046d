use std::{fmt, iter::Sum, ops::{Add, AddAssign, Sub, SubAssign}};

use serde::{Serialize, Serializer};

/// Fractional bits of the fixed-point representation.
const SCALE: f64 = 18446744073709551616.0; // 2^64

/// [`Population::LIMIT`] in fixed-point units.
const LIMIT_RAW: i128 = 1 << 125;

/// A non-negative head count held in 64.64 fixed point.
///
/// Every `f64` of magnitude at least `2^-12` converts without loss, and sums are
/// exact integer arithmetic, so aggregates do not depend on the order in which
/// blocks were added or removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Population(i128);

impl Population {
    pub const ZERO: Self = Self(0);

    /// Largest count accepted for a block or a whole table.
    pub const LIMIT: f64 = 2305843009213693952.0; // 2^61

    /// Convert a finite count in `[0, LIMIT]`, rounding below the fixed-point resolution.
    pub fn from_f64(value: f64) -> Option<Self> {
        (value.is_finite() && (0.0..=Self::LIMIT).contains(&value))
            .then(|| Self((value * SCALE).round() as i128))
    }

    /// Nearest `f64` to the exact count.
    #[inline] pub fn to_f64(self) -> f64 { self.0 as f64 / SCALE }

    #[inline] pub fn is_zero(self) -> bool { self.0 == 0 }

    /// Add, returning `None` once the result exceeds [`LIMIT`](Self::LIMIT).
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0)
            .filter(|&sum| sum <= LIMIT_RAW)
            .map(Self)
    }

    /// An even share of this count across `parts`, rounded down to the resolution.
    ///
    /// A count `p` satisfies `p <= self.share(n)` exactly when `p * n <= self`.
    pub fn share(self, parts: usize) -> Self {
        assert!(parts > 0, "cannot share a population across zero parts");
        Self(self.0 / parts as i128)
    }
}

impl Add for Population {
    type Output = Self;
    #[inline] fn add(self, other: Self) -> Self { Self(self.0 + other.0) }
}

impl AddAssign for Population {
    #[inline] fn add_assign(&mut self, other: Self) { self.0 += other.0 }
}

impl Sub for Population {
    type Output = Self;
    #[inline] fn sub(self, other: Self) -> Self { Self(self.0 - other.0) }
}

impl SubAssign for Population {
    #[inline] fn sub_assign(&mut self, other: Self) { self.0 -= other.0 }
}

impl Sum for Population {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self { iter.fold(Self::ZERO, Add::add) }
}

impl<'a> Sum<&'a Population> for Population {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self { iter.copied().sum() }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.to_f64(), f) }
}

impl Serialize for Population {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}
