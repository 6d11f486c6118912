//! Setup and configuration faults.
//!
//! Gameplay never produces these: an illegal click is a state transition, not
//! an error. Everything here means the engine cannot run at all.

use std::path::PathBuf;

use crate::types::{Coord, Team};

#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    #[error("board dimensions {width}x{height} are outside 1..={max}")]
    InvalidDimensions { width: i8, height: i8, max: i8 },

    /// The standard layout hard-codes 8x8 ranks and files.
    #[error("standard layout needs an 8x8 board, got {width}x{height}")]
    NonStandardBoard { width: i8, height: i8 },

    #[error("placement has {found} ranks, board has {expected}")]
    RankCount { expected: usize, found: usize },

    #[error("placement rank {rank} covers {found} files, board has {expected}")]
    FileCount {
        rank: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown piece letter '{0}' in placement")]
    UnknownPiece(char),

    #[error("square {0} is off the board")]
    OffBoard(Coord),

    #[error("square {0} is already occupied")]
    Occupied(Coord),

    #[error("{0} has no king on the board")]
    MissingKing(Team),

    #[error("failed to read config {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    ParseConfig(#[from] toml::de::Error),
}
