use rb_block::BlockError;
use rb_clock::ClockError;
use rb_core::{CoreError, TrainId};
use rb_train::TrainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("train table parse error: {0}")]
    Parse(String),

    #[error("{0} appears more than once in the train table")]
    DuplicateTrain(TrainId),

    #[error("event refers to {0}, which is not part of this run")]
    UnknownTrain(TrainId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("clock error: {0}")]
    Clock(#[from] ClockError),

    #[error("block protocol violation: {0}")]
    Block(#[from] BlockError),

    #[error("train error: {0}")]
    Train(#[from] TrainError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
