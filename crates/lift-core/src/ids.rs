//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash`.  The inner integer is `pub` so callers can
//! build one from a loop counter, but indexing into `Vec`s should go through
//! `.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a floor, `0..N-1` from the ground up.
    pub struct FloorId(u32);
}

typed_id! {
    /// Index of a carriage in the building's car list.
    pub struct CarId(u32);
}

impl FloorId {
    /// Signed distance `self - from` in floors.
    #[inline]
    pub fn delta_from(self, from: FloorId) -> i64 {
        i64::from(self.0) - i64::from(from.0)
    }

    /// Absolute distance in floors.
    #[inline]
    pub fn distance(self, other: FloorId) -> u32 {
        self.0.abs_diff(other.0)
    }
}
