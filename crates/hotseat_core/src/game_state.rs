//! Read-only view of whose turn it is, the previous move and the result.
//!
//! Only the turn engine mutates this; the pawn strategy reads the last move
//! to decide en passant.

use serde::Serialize;

use crate::types::{Coord, PieceId, Team};

/// The most recently completed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LastMove {
    pub piece: PieceId,
    pub from: Coord,
    pub to: Coord,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    current_team: Team,
    last_move: Option<LastMove>,
    winner: Option<Team>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Team::White)
    }
}

impl GameState {
    pub fn new(first_team: Team) -> Self {
        Self {
            current_team: first_team,
            last_move: None,
            winner: None,
        }
    }

    pub fn current_team(&self) -> Team {
        self.current_team
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn last_moved_piece(&self) -> Option<PieceId> {
        self.last_move.map(|m| m.piece)
    }

    pub fn last_move_from(&self) -> Option<Coord> {
        self.last_move.map(|m| m.from)
    }

    pub fn last_move_to(&self) -> Option<Coord> {
        self.last_move.map(|m| m.to)
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    pub(crate) fn record_move(&mut self, piece: PieceId, from: Coord, to: Coord) {
        self.last_move = Some(LastMove { piece, from, to });
    }

    pub(crate) fn end_turn(&mut self) -> Team {
        self.current_team = self.current_team.other();
        self.current_team
    }

    pub(crate) fn declare_winner(&mut self, team: Team) {
        self.winner = Some(team);
    }
}
