use rb_core::{BlockId, TrainId};
use thiserror::Error;

use crate::{RouteDefect, TrainState};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrainError {
    #[error("{train} has a malformed route: {defect}")]
    MalformedRoute {
        train:  TrainId,
        defect: RouteDefect,
    },

    #[error("{train} has invalid speed {speed}: must be finite and positive")]
    InvalidSpeed {
        train: TrainId,
        speed: f64,
    },

    #[error("{train} cannot start from state {state:?}")]
    NotPending {
        train: TrainId,
        state: TrainState,
    },

    #[error("{train} was granted {block} while in state {state:?}")]
    UnexpectedGrant {
        train: TrainId,
        block: BlockId,
        state: TrainState,
    },

    #[error("{train} finished travelling while in state {state:?}")]
    UnexpectedArrival {
        train: TrainId,
        state: TrainState,
    },
}

pub type TrainResult<T> = Result<T, TrainError>;
