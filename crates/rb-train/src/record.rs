//! `SegmentRecord` — one completed block traversal.

use rb_core::{BlockId, SimTime, TrainId};

/// Immutable log entry appended once per block a train fully traverses.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentRecord {
    pub train:       TrainId,
    /// 1-based position of the block in the train's route.
    pub block_index: u32,
    /// The block itself.  Equals `BlockId(block_index - 1)` whenever the
    /// train runs the default line route.
    pub block:       BlockId,
    pub start:       SimTime,
    pub end:         SimTime,
}

impl SegmentRecord {
    /// Minutes the train occupied the block.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end.since(self.start)
    }

    /// Copy with `start` and `end` rounded to two decimals, the precision of
    /// published timelines.
    pub fn rounded(&self) -> SegmentRecord {
        SegmentRecord {
            start: SimTime(self.start.rounded()),
            end:   SimTime(self.end.rounded()),
            ..*self
        }
    }

    /// `true` if the half-open intervals `[start, end)` of the two records
    /// intersect.
    pub fn overlaps(&self, other: &SegmentRecord) -> bool {
        self.start < other.end && other.start < self.end
    }
}
