//! The closed set of scalar types a [`Column`](crate::Column) can hold.
//!
//! Every supported type is fixed-width, has a defined byte representation
//! (`bytemuck::Pod`), and a zero bit pattern as its default value. The set is
//! sealed: downstream crates cannot add implementations, which lets the bulk
//! kernels rely on these properties without runtime dispatch.

use std::cmp::Ordering;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

mod private {
    pub trait Sealed {}
}

/// Where NaN values collate in the ascending value order.
///
/// Only meaningful for float columns; integer comparisons ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NanDirection {
    /// NaN sorts before every ordinary value.
    First,
    /// NaN sorts after every ordinary value.
    Last,
}

/// A fixed-width scalar storable in a column.
pub trait Scalar:
    private::Sealed + Pod + PartialEq + PartialOrd + Default + std::fmt::Debug + Send + Sync + 'static
{
    /// Byte width of one stored value.
    const WIDTH: usize = std::mem::size_of::<Self>();

    /// Whether the type has NaN values that need placement during sorts.
    const HAS_NAN: bool = false;

    /// Total three-way comparison. `nan_direction` decides where NaN
    /// collates for float types and is ignored otherwise.
    fn cmp_with_nan(self, other: Self, nan_direction: NanDirection) -> Ordering;

    /// The packed 64-bit temporal representation of this value, when the
    /// type can carry one. Only the 64-bit signed integer participates in
    /// the temporal checksum path.
    #[inline]
    fn packed_temporal(self) -> Option<i64> {
        None
    }
}

macro_rules! int_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl Scalar for $t {
            #[inline]
            fn cmp_with_nan(self, other: Self, _nan_direction: NanDirection) -> Ordering {
                self.cmp(&other)
            }
        }
    )*};
}

int_scalar!(i8, i16, i32, i128, u8, u16, u32, u64, u128);

impl private::Sealed for i64 {}

impl Scalar for i64 {
    #[inline]
    fn cmp_with_nan(self, other: Self, _nan_direction: NanDirection) -> Ordering {
        self.cmp(&other)
    }

    #[inline]
    fn packed_temporal(self) -> Option<i64> {
        Some(self)
    }
}

macro_rules! float_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl Scalar for $t {
            const HAS_NAN: bool = true;

            #[inline]
            fn cmp_with_nan(self, other: Self, nan_direction: NanDirection) -> Ordering {
                match (self.is_nan(), other.is_nan()) {
                    // Neither side is NaN, so partial_cmp is total here.
                    (false, false) => self.partial_cmp(&other).unwrap_or(Ordering::Equal),
                    (true, true) => Ordering::Equal,
                    (true, false) => match nan_direction {
                        NanDirection::First => Ordering::Less,
                        NanDirection::Last => Ordering::Greater,
                    },
                    (false, true) => match nan_direction {
                        NanDirection::First => Ordering::Greater,
                        NanDirection::Last => Ordering::Less,
                    },
                }
            }
        }
    )*};
}

float_scalar!(f32, f64);

/// A 128-bit network address stored as its raw integer representation.
#[repr(transparent)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable,
)]
pub struct Ipv6(pub u128);

impl private::Sealed for Ipv6 {}

impl Scalar for Ipv6 {
    #[inline]
    fn cmp_with_nan(self, other: Self, _nan_direction: NanDirection) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl From<std::net::Ipv6Addr> for Ipv6 {
    #[inline]
    fn from(addr: std::net::Ipv6Addr) -> Self {
        Ipv6(u128::from(addr))
    }
}

impl From<Ipv6> for std::net::Ipv6Addr {
    #[inline]
    fn from(v: Ipv6) -> Self {
        std::net::Ipv6Addr::from(v.0)
    }
}
