use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub fn other(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank delta of a single pawn step.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Rank the king and rooks start on in the standard layout.
    pub fn home_rank(self) -> i8 {
        match self {
            Team::White => 0,
            Team::Black => 7,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Placement letter, uppercase for White and lowercase for Black.
    pub fn symbol(self, team: Team) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match team {
            Team::White => c.to_ascii_uppercase(),
            Team::Black => c,
        }
    }

    pub fn from_symbol(c: char) -> Option<(PieceKind, Team)> {
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, team))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A (file, rank) pair, 0-indexed from White's queenside corner.
///
/// Coordinates are allowed to fall off the board; only the [`crate::Board`]
/// knows its bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    pub fn offset(self, df: i8, dr: i8) -> Self {
        Self {
            file: self.file + df,
            rank: self.rank + dr,
        }
    }

    /// Parses algebraic names such as `e2` or `a10`.
    pub fn parse(s: &str) -> Option<Coord> {
        let s = s.trim();
        let mut chars = s.chars();
        let f = chars.next()?.to_ascii_lowercase();
        if !f.is_ascii_lowercase() {
            return None;
        }
        let digits = chars.as_str();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let rank: i8 = digits.parse().ok()?;
        if rank < 1 {
            return None;
        }
        Some(Coord::new((f as u8 - b'a') as i8, rank - 1))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.file) && self.rank >= 0 {
            write!(f, "{}{}", (b'a' + self.file as u8) as char, self.rank + 1)
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

/// Stable handle of a piece in the board's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub id: PieceId,
    pub team: Team,
    pub kind: PieceKind,
    /// Flips once, on the first relocation to a different square.
    pub has_moved: bool,
    /// `None` once the piece has been captured.
    pub coord: Option<Coord>,
}

impl Piece {
    pub fn is_alive(&self) -> bool {
        self.coord.is_some()
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol(self.team)
    }
}

/// A candidate or executed transition produced by move generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub is_capture: bool,
    pub is_en_passant: bool,
    pub is_castling: bool,
    /// Set on pawn moves reaching the far rank. Nothing resolves it.
    pub is_promotion: bool,
    /// Square of the pawn removed by en passant; differs from `to`.
    pub en_passant_capture: Option<Coord>,
    pub rook_from: Option<Coord>,
    pub rook_to: Option<Coord>,
}

impl Move {
    pub fn new(from: Coord, to: Coord) -> Self {
        Self {
            from,
            to,
            is_capture: false,
            is_en_passant: false,
            is_castling: false,
            is_promotion: false,
            en_passant_capture: None,
            rook_from: None,
            rook_to: None,
        }
    }

    pub fn capture(from: Coord, to: Coord) -> Self {
        Self {
            is_capture: true,
            ..Self::new(from, to)
        }
    }

    pub fn en_passant(from: Coord, to: Coord, captured: Coord) -> Self {
        Self {
            is_capture: true,
            is_en_passant: true,
            en_passant_capture: Some(captured),
            ..Self::new(from, to)
        }
    }

    pub fn castle(from: Coord, to: Coord, rook_from: Coord, rook_to: Coord) -> Self {
        Self {
            is_castling: true,
            rook_from: Some(rook_from),
            rook_to: Some(rook_to),
            ..Self::new(from, to)
        }
    }

    /// Square whose occupant a capture removes.
    pub fn victim_square(&self) -> Coord {
        self.en_passant_capture.unwrap_or(self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)?;
        if self.is_en_passant {
            write!(f, " e.p.")?;
        }
        if self.is_castling {
            write!(f, " (castle)")?;
        }
        Ok(())
    }
}
