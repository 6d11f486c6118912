use tracing::{debug, warn};

use crate::error::SetupError;
use crate::types::*;

/// Largest width or height a board may be configured with.
pub const MAX_BOARD_SIZE: i8 = 16;

/// Piece placement of the standard starting position, rank 8 first.
pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// What a coordinate resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    OffBoard,
    Empty,
    Occupied(PieceId),
}

impl Tile {
    pub fn piece(self) -> Option<PieceId> {
        match self {
            Tile::Occupied(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }
}

/// The single position index: tiles map coordinates to piece handles, and the
/// arena holds every piece created at setup, dead or alive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i8,
    height: i8,
    tiles: Vec<Option<PieceId>>,
    pieces: Vec<Piece>,
}

impl Board {
    pub fn empty(width: i8, height: i8) -> Result<Self, SetupError> {
        let valid = 1..=MAX_BOARD_SIZE;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(SetupError::InvalidDimensions {
                width,
                height,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            width,
            height,
            tiles: vec![None; width as usize * height as usize],
            pieces: Vec::with_capacity(32),
        })
    }

    /// The standard 8x8 starting position.
    pub fn standard() -> Self {
        let mut b = Board {
            width: 8,
            height: 8,
            tiles: vec![None; 64],
            pieces: Vec::with_capacity(32),
        };

        // Pawns
        for f in 0..8 {
            b.spawn_unchecked(PieceKind::Pawn, Team::White, Coord::new(f, 1));
            b.spawn_unchecked(PieceKind::Pawn, Team::Black, Coord::new(f, 6));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.spawn_unchecked(kind, Team::White, Coord::new(f as i8, 0));
            b.spawn_unchecked(kind, Team::Black, Coord::new(f as i8, 7));
        }
        b
    }

    /// Builds a board from FEN-style piece placement: ranks separated by `/`,
    /// highest rank first, digits for runs of empty squares. Every piece
    /// starts unmoved.
    pub fn from_placement(width: i8, height: i8, placement: &str) -> Result<Self, SetupError> {
        let mut board = Board::empty(width, height)?;
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != height as usize {
            return Err(SetupError::RankCount {
                expected: height as usize,
                found: ranks.len(),
            });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = height - 1 - rank_idx as i8;
            let mut file: usize = 0;
            let mut run: usize = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    run = run.saturating_mul(10).saturating_add(d as usize);
                    if file.saturating_add(run) > width as usize {
                        return Err(SetupError::FileCount {
                            rank: rank as usize + 1,
                            expected: width as usize,
                            found: file.saturating_add(run),
                        });
                    }
                    continue;
                }
                file += run;
                run = 0;
                let (kind, team) = PieceKind::from_symbol(ch).ok_or(SetupError::UnknownPiece(ch))?;
                if file >= width as usize {
                    return Err(SetupError::FileCount {
                        rank: rank as usize + 1,
                        expected: width as usize,
                        found: file + 1,
                    });
                }
                board.spawn(kind, team, Coord::new(file as i8, rank))?;
                file += 1;
            }
            file += run;
            if file != width as usize {
                return Err(SetupError::FileCount {
                    rank: rank as usize + 1,
                    expected: width as usize,
                    found: file,
                });
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_placement`].
    pub fn placement(&self) -> String {
        let mut out = String::new();
        for rank in (0..self.height).rev() {
            let mut run = 0;
            for file in 0..self.width {
                match self.piece_at(Coord::new(file, rank)) {
                    Some(pc) => {
                        if run > 0 {
                            out.push_str(&run.to_string());
                            run = 0;
                        }
                        out.push(pc.symbol());
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                out.push_str(&run.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }

    /// Adds a new unmoved piece during setup.
    pub fn spawn(&mut self, kind: PieceKind, team: Team, at: Coord) -> Result<PieceId, SetupError> {
        match self.tile_at(at) {
            Tile::OffBoard => Err(SetupError::OffBoard(at)),
            Tile::Occupied(_) => Err(SetupError::Occupied(at)),
            Tile::Empty => Ok(self.spawn_unchecked(kind, team, at)),
        }
    }

    fn spawn_unchecked(&mut self, kind: PieceKind, team: Team, at: Coord) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece {
            id,
            team,
            kind,
            has_moved: false,
            coord: Some(at),
        });
        if let Some(idx) = self.index(at) {
            self.tiles[idx] = Some(id);
        }
        id
    }

    pub fn width(&self) -> i8 {
        self.width
    }

    pub fn height(&self) -> i8 {
        self.height
    }

    pub fn contains(&self, c: Coord) -> bool {
        (0..self.width).contains(&c.file) && (0..self.height).contains(&c.rank)
    }

    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.rank as usize * self.width as usize + c.file as usize)
        } else {
            None
        }
    }

    pub fn tile_at(&self, c: Coord) -> Tile {
        match self.index(c) {
            None => Tile::OffBoard,
            Some(idx) => match self.tiles[idx] {
                Some(id) => Tile::Occupied(id),
                None => Tile::Empty,
            },
        }
    }

    /// Occupant of `c`; off-board and empty both read as `None`.
    pub fn piece_at(&self, c: Coord) -> Option<&Piece> {
        self.tile_at(c).piece().map(|id| &self.pieces[id.0])
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// Every piece created at setup, captured ones included.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |pc| pc.team == team && pc.is_alive())
    }

    pub fn king(&self, team: Team) -> Option<&Piece> {
        self.pieces_of(team).find(|pc| pc.kind == PieceKind::King)
    }

    /// Moves a piece to `to`, vacating its previous tile. The piece counts as
    /// moved only when it leaves a different tile it already stood on.
    pub fn place_piece(&mut self, id: PieceId, to: Coord) {
        let Some(idx) = self.index(to) else {
            warn!(piece = id.0, %to, "ignoring placement off the board");
            return;
        };
        let Some(previous) = self.pieces.get(id.0).map(|pc| pc.coord) else {
            warn!(piece = id.0, "ignoring placement of unknown piece");
            return;
        };
        if previous == Some(to) {
            return;
        }

        if let Some(prev_idx) = previous.and_then(|c| self.index(c)) {
            self.tiles[prev_idx] = None;
        }
        if let Some(other) = self.tiles[idx] {
            warn!(piece = id.0, displaced = other.0, %to, "placement displaced an occupant");
            self.pieces[other.0].coord = None;
        }
        self.tiles[idx] = Some(id);

        let piece = &mut self.pieces[id.0];
        piece.coord = Some(to);
        if previous.is_some() {
            piece.has_moved = true;
        }
    }

    /// Removes a piece from play. Returns the square it was taken on.
    pub fn capture(&mut self, id: PieceId) -> Option<Coord> {
        let at = self.pieces.get_mut(id.0)?.coord.take()?;
        if let Some(idx) = self.index(at) {
            self.tiles[idx] = None;
        }
        debug!(piece = id.0, %at, "piece removed from board");
        Some(at)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
