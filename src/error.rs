use std::io;

use thiserror::Error;

use crate::game::GameStatus;

/// Errors reported by the simulation core and its configuration layer.
///
/// Collisions are not errors; they are reported as regular tick outcomes.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("cannot {operation} while the game is {status:?}")]
    InvalidStateTransition {
        operation: &'static str,
        status: GameStatus,
    },

    #[error(
        "grid {width}x{height} is not a positive multiple of cell size {cell_size} \
         large enough for the starting snake"
    )]
    OutOfBoundsConfiguration {
        width: u16,
        height: u16,
        cell_size: u16,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("config io error: {0}")]
    Io(#[from] io::Error),
}
