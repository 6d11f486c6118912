//! The turn engine: click routing, selection, and one full move cycle.
//!
//! `Idle` -> `Selected` (moves computed and cached) -> execute -> `Idle` with
//! the turn handed over. Illegal clicks are state transitions, never errors.

use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Tile};
use crate::config::GameConfig;
use crate::error::SetupError;
use crate::events::{GameEvent, Listener};
use crate::game_state::GameState;
use crate::movegen::generate_moves;
use crate::types::*;

/// What the input layer resolved a click to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Piece(PieceId),
    Square(Coord),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected { piece: PieceId, moves: Vec<Move> },
}

impl Selection {
    pub fn piece(&self) -> Option<PieceId> {
        match self {
            Selection::Idle => None,
            Selection::Selected { piece, .. } => Some(*piece),
        }
    }

    /// Cached moves of the selected piece; empty when idle.
    pub fn moves(&self) -> &[Move] {
        match self {
            Selection::Idle => &[],
            Selection::Selected { moves, .. } => moves,
        }
    }

    pub fn move_to(&self, to: Coord) -> Option<Move> {
        self.moves().iter().find(|m| m.to == to).copied()
    }
}

pub struct TurnEngine {
    config: GameConfig,
    board: Board,
    state: GameState,
    selection: Selection,
    busy: bool,
    listeners: Vec<Listener>,
}

impl fmt::Debug for TurnEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnEngine")
            .field("board", &self.board.placement())
            .field("state", &self.state)
            .field("selection", &self.selection)
            .field("busy", &self.busy)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl TurnEngine {
    /// Standard layout, White to move.
    pub fn standard() -> Self {
        Self::with_parts(GameConfig::default(), Board::standard())
    }

    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        let board = config.build_board()?;
        check_kings(&board)?;
        Ok(Self::with_parts(config, board))
    }

    /// Starts from an already built board. [`TurnEngine::reset`] later
    /// rebuilds it from its placement, with every piece unmoved.
    pub fn from_board(board: Board, first_team: Team) -> Result<Self, SetupError> {
        check_kings(&board)?;
        let config = GameConfig {
            width: board.width(),
            height: board.height(),
            placement: Some(board.placement()),
            first_team,
        };
        Ok(Self::with_parts(config, board))
    }

    fn with_parts(config: GameConfig, board: Board) -> Self {
        Self {
            state: GameState::new(config.first_team),
            config,
            board,
            selection: Selection::Idle,
            busy: false,
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Moves of any live piece in the current position, without selecting it.
    pub fn legal_moves(&self, id: PieceId) -> Vec<Move> {
        generate_moves(&self.board, id, &self.state)
    }

    /// Registers a listener that sees every event, in order, as it is emitted.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Keeps the engine busy while the presentation animates the last move.
    pub fn hold_input(&mut self) {
        self.busy = true;
    }

    pub fn release_input(&mut self) {
        self.busy = false;
    }

    /// Routes a click on a piece or a bare square.
    pub fn on_click(&mut self, target: ClickTarget) -> Vec<GameEvent> {
        self.run(|engine, out| match target {
            ClickTarget::Piece(id) => engine.click_piece(id, out),
            ClickTarget::Square(at) => engine.click_tile(at, out),
        })
    }

    /// Resolves `at` to its occupant first, then to the tile itself.
    pub fn click_square(&mut self, at: Coord) -> Vec<GameEvent> {
        let target = match self.board.tile_at(at) {
            Tile::Occupied(id) => ClickTarget::Piece(id),
            _ => ClickTarget::Square(at),
        };
        self.on_click(target)
    }

    pub fn select(&mut self, id: PieceId) -> Vec<GameEvent> {
        self.run(|engine, out| engine.select_piece(id, out))
    }

    pub fn deselect(&mut self) -> Vec<GameEvent> {
        self.run(|engine, out| engine.clear_selection(out))
    }

    /// Executes the selected piece's cached move to `to`, or deselects if
    /// there is none.
    pub fn execute(&mut self, to: Coord) -> Vec<GameEvent> {
        self.run(|engine, out| engine.execute_to(to, out))
    }

    /// Replaces board and game state with a fresh game from the engine's
    /// configuration.
    pub fn reset(&mut self) -> Result<Vec<GameEvent>, SetupError> {
        let board = self.config.build_board()?;
        check_kings(&board)?;
        self.board = board;
        self.state = GameState::new(self.config.first_team);
        self.selection = Selection::Idle;
        self.busy = false;
        info!(first = %self.config.first_team, "board reset");

        let events = vec![GameEvent::BoardReset];
        self.dispatch(&events);
        Ok(events)
    }

    fn run(&mut self, op: impl FnOnce(&mut Self, &mut Vec<GameEvent>)) -> Vec<GameEvent> {
        if self.busy {
            debug!("input refused while a move is in progress");
            return Vec::new();
        }
        if self.state.is_game_over() {
            debug!("input refused after game over");
            return Vec::new();
        }
        let mut events = Vec::new();
        op(self, &mut events);
        self.dispatch(&events);
        events
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            for listener in &mut self.listeners {
                listener(event);
            }
        }
    }

    fn click_piece(&mut self, id: PieceId, out: &mut Vec<GameEvent>) {
        let Some(at) = self.board.piece(id).and_then(|pc| pc.coord) else {
            debug!(piece = id.0, "click on a piece that is not on the board");
            return;
        };
        if self.selection.piece() == Some(id) {
            self.clear_selection(out);
        } else if self.selection.move_to(at).is_some() {
            self.execute_to(at, out);
        } else {
            self.select_piece(id, out);
        }
    }

    fn click_tile(&mut self, at: Coord, out: &mut Vec<GameEvent>) {
        if self.selection.move_to(at).is_some() {
            self.execute_to(at, out);
        } else {
            self.clear_selection(out);
        }
    }

    fn select_piece(&mut self, id: PieceId, out: &mut Vec<GameEvent>) {
        let Some(pc) = self.board.piece(id) else {
            return;
        };
        let Some(at) = pc.coord else {
            return;
        };
        if pc.team != self.state.current_team() {
            debug!(piece = id.0, team = %pc.team, "not this team's turn, selection ignored");
            return;
        }

        let moves = generate_moves(&self.board, id, &self.state);
        debug!(piece = id.0, kind = %pc.kind, %at, moves = moves.len(), "piece selected");
        out.push(GameEvent::PieceSelected {
            piece: id,
            at,
            moves: moves.clone(),
        });
        self.selection = Selection::Selected { piece: id, moves };
    }

    fn clear_selection(&mut self, out: &mut Vec<GameEvent>) {
        if self.selection == Selection::Idle {
            return;
        }
        self.selection = Selection::Idle;
        out.push(GameEvent::SelectionCleared);
    }

    fn execute_to(&mut self, to: Coord, out: &mut Vec<GameEvent>) {
        let Some(piece) = self.selection.piece() else {
            return;
        };
        let found = self.selection.move_to(to);
        let Some(mv) = found else {
            debug!(%to, "destination not offered, clearing selection");
            self.clear_selection(out);
            return;
        };
        let Some(team) = self.board.piece(piece).map(|pc| pc.team) else {
            return;
        };

        self.busy = true;

        let mut captured_king = false;
        if mv.is_capture {
            let victim = self
                .board
                .piece_at(mv.victim_square())
                .filter(|pc| pc.team != team)
                .map(|pc| (pc.id, pc.team, pc.kind));
            if let Some((victim, victim_team, kind)) = victim {
                if let Some(at) = self.board.capture(victim) {
                    info!(piece = victim.0, %kind, %at, en_passant = mv.is_en_passant, "captured");
                    out.push(GameEvent::PieceCaptured {
                        piece: victim,
                        team: victim_team,
                        kind,
                        at,
                    });
                    captured_king = kind == PieceKind::King;
                }
            }
        }

        if mv.is_castling {
            if let (Some(rook_from), Some(rook_to)) = (mv.rook_from, mv.rook_to) {
                let rook = self
                    .board
                    .piece_at(rook_from)
                    .filter(|pc| pc.kind == PieceKind::Rook)
                    .map(|pc| pc.id);
                if let Some(rook) = rook {
                    self.board.place_piece(rook, rook_to);
                    out.push(GameEvent::PieceMoved {
                        piece: rook,
                        from: rook_from,
                        to: rook_to,
                    });
                }
            }
        }

        self.board.place_piece(piece, mv.to);
        info!(%team, mv = %mv, "move played");
        out.push(GameEvent::PieceMoved {
            piece,
            from: mv.from,
            to: mv.to,
        });

        self.state.record_move(piece, mv.from, mv.to);
        let next = self.state.end_turn();
        self.busy = false;

        self.clear_selection(out);
        out.push(GameEvent::TurnChanged { team: next });

        if captured_king {
            self.state.declare_winner(team);
            info!(winner = %team, "king captured, game over");
            out.push(GameEvent::GameOver { winner: team });
        }
    }
}

/// A game without both kings cannot end, so it is refused at setup.
fn check_kings(board: &Board) -> Result<(), SetupError> {
    for team in [Team::White, Team::Black] {
        if board.king(team).is_none() {
            return Err(SetupError::MissingKing(team));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
