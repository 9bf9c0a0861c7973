use rb_core::{BlockId, TrainId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("{train} released {block} without holding it (owner: {owner:?})")]
    InvalidRelease {
        block: BlockId,
        train: TrainId,
        owner: Option<TrainId>,
    },

    #[error("{train} requested {block} while already holding or waiting for it")]
    DuplicateRequest {
        block: BlockId,
        train: TrainId,
    },

    #[error("{0} is not part of the topology")]
    UnknownBlock(BlockId),
}

pub type BlockResult<T> = Result<T, BlockError>;
