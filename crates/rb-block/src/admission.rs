//! Admission order — which way a priority number points.
//!
//! Lower-value-first is the convention the scenarios are written against
//! (an Express at priority 1 beats a Passenger at 2).  It is a value rather
//! than a hard-coded comparison so a scenario can flip it.

use std::cmp::Ordering;

use rb_core::Priority;

/// Comparator used to order a block's wait list.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AdmissionOrder {
    /// Smaller priority value is served first.
    #[default]
    LowerFirst,
    /// Larger priority value is served first.
    HigherFirst,
}

impl AdmissionOrder {
    /// `Less` when a requester at priority `a` must be served before one at
    /// `b`, `Equal` when neither outranks the other.
    #[inline]
    pub fn compare(self, a: Priority, b: Priority) -> Ordering {
        match self {
            AdmissionOrder::LowerFirst  => a.cmp(&b),
            AdmissionOrder::HigherFirst => b.cmp(&a),
        }
    }
}
