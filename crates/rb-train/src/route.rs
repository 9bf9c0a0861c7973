//! Ordered sequence of blocks a train traverses.

use std::fmt;

use rb_core::BlockId;

/// The blocks a train must occupy, in order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route(Vec<BlockId>);

/// Why a route cannot be run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDefect {
    Empty,
    /// Refers to a block outside the topology.
    UnknownBlock(BlockId),
    /// Lists a block twice; a train never re-enters a block it released.
    RevisitsBlock(BlockId),
}

impl fmt::Display for RouteDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteDefect::Empty            => f.write_str("route is empty"),
            RouteDefect::UnknownBlock(b)  => write!(f, "{b} does not exist"),
            RouteDefect::RevisitsBlock(b) => write!(f, "{b} appears more than once"),
        }
    }
}

impl Route {
    pub fn new(blocks: Vec<BlockId>) -> Self {
        Route(blocks)
    }

    /// Blocks `0..count` in line order.
    pub fn line(count: u32) -> Self {
        Route((0..count).map(BlockId).collect())
    }

    /// Check the route against a topology of `block_count` blocks.
    pub fn check(&self, block_count: usize) -> Result<(), RouteDefect> {
        if self.0.is_empty() {
            return Err(RouteDefect::Empty);
        }
        let mut seen = vec![false; block_count];
        for &block in &self.0 {
            let Some(slot) = seen.get_mut(block.index()) else {
                return Err(RouteDefect::UnknownBlock(block));
            };
            if *slot {
                return Err(RouteDefect::RevisitsBlock(block));
            }
            *slot = true;
        }
        Ok(())
    }

    /// Block at 0-based `position`.
    #[inline]
    pub fn get(&self, position: usize) -> Option<BlockId> {
        self.0.get(position).copied()
    }

    pub fn blocks(&self) -> &[BlockId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<BlockId>> for Route {
    fn from(blocks: Vec<BlockId>) -> Self {
        Route(blocks)
    }
}
