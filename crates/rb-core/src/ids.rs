//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
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
    /// User-facing train number.  `TrainId(1)` displays as `T1`.
    pub struct TrainId(u32);
}

typed_id! {
    /// Zero-based index of a block in the run's topology.
    ///
    /// Displays 1-based (`BlockId(0)` is "block 1") to match how track
    /// segments are numbered along a line.
    pub struct BlockId(u32);
}

impl BlockId {
    /// Block numbered `n` along the line (1-based), i.e. `BlockId(n - 1)`.
    ///
    /// Returns `None` for `n == 0`.
    #[inline]
    pub fn from_number(n: u32) -> Option<BlockId> {
        n.checked_sub(1).map(BlockId)
    }

    /// The 1-based number shown in logs and output.
    #[inline]
    pub fn number(self) -> u32 {
        self.0 + 1
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block {}", self.number())
    }
}

// ── Priority ──────────────────────────────────────────────────────────────────

/// Numeric admission key used to break contention on a block.
///
/// The direction (whether a smaller value is served first) is not a property
/// of the number itself; it is decided by the block's admission order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Priority(pub i32);

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}
