//! `Topology` — the ordered set of blocks built fresh for each run.

use rb_core::BlockId;

use crate::{AdmissionOrder, BlockError, BlockResource, BlockResult};

/// All blocks of one run, indexed by `BlockId`.
#[derive(Clone, Debug)]
pub struct Topology {
    blocks: Vec<BlockResource>,
}

impl Topology {
    /// A straight line of `count` blocks, `BlockId(0)..BlockId(count)`, all
    /// sharing the same admission order.
    pub fn line(count: u32, order: AdmissionOrder) -> Self {
        let blocks = (0..count)
            .map(|i| BlockResource::new(BlockId(i), order))
            .collect();
        Self { blocks }
    }

    pub fn get(&self, id: BlockId) -> BlockResult<&BlockResource> {
        self.blocks.get(id.index()).ok_or(BlockError::UnknownBlock(id))
    }

    pub fn get_mut(&mut self, id: BlockId) -> BlockResult<&mut BlockResource> {
        self.blocks.get_mut(id.index()).ok_or(BlockError::UnknownBlock(id))
    }

    #[inline]
    pub fn contains(&self, id: BlockId) -> bool {
        id.index() < self.blocks.len()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockResource> {
        self.blocks.iter()
    }

    /// Block IDs in line order, which is the default route.
    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(BlockResource::id).collect()
    }
}
