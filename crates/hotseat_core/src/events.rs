//! Notifications emitted after each engine state transition.

use serde::Serialize;

use crate::types::{Coord, Move, PieceId, PieceKind, Team};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A piece of the side to move was selected. `moves` may be empty.
    PieceSelected {
        piece: PieceId,
        at: Coord,
        moves: Vec<Move>,
    },
    SelectionCleared,
    PieceCaptured {
        piece: PieceId,
        team: Team,
        kind: PieceKind,
        at: Coord,
    },
    /// Also raised for the rook half of a castling move.
    PieceMoved {
        piece: PieceId,
        from: Coord,
        to: Coord,
    },
    TurnChanged {
        team: Team,
    },
    GameOver {
        winner: Team,
    },
    BoardReset,
}

/// Synchronous subscriber. Called in emission order; the engine does not
/// wait for or inspect anything the listener does.
pub type Listener = Box<dyn FnMut(&GameEvent)>;
