//! Per-piece move generation.
//!
//! Moves are pseudo-legal: occupancy and piece identity are checked, king
//! safety is not.

use crate::{board::Board, game_state::GameState, types::*};

pub const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// King file and rook files the castling rule is tied to.
const KING_FILE: i8 = 4;
const QUEENSIDE_ROOK_FILE: i8 = 0;
const KINGSIDE_ROOK_FILE: i8 = 7;

/// One way a piece can move. A kind may combine several.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Repeat each direction until blocked.
    Sliding(&'static [(i8, i8)]),
    /// Fixed offsets, never blocked by what lies between.
    Jumping(&'static [(i8, i8)]),
    Pawn,
    /// One-square steps plus castling.
    King,
}

pub fn strategies(kind: PieceKind) -> &'static [Strategy] {
    match kind {
        PieceKind::Pawn => &[Strategy::Pawn],
        PieceKind::Rook => &[Strategy::Sliding(&ORTHOGONAL)],
        PieceKind::Knight => &[Strategy::Jumping(&KNIGHT_OFFSETS)],
        PieceKind::Bishop => &[Strategy::Sliding(&DIAGONAL)],
        PieceKind::Queen => &[Strategy::Sliding(&ORTHOGONAL), Strategy::Sliding(&DIAGONAL)],
        PieceKind::King => &[Strategy::King],
    }
}

/// All moves for `id`, concatenated over its strategies. Empty for unknown
/// or captured pieces.
pub fn generate_moves(board: &Board, id: PieceId, state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    generate_moves_into(board, id, state, &mut out);
    out
}

/// Same as [`generate_moves`], reusing the caller's buffer.
pub fn generate_moves_into(board: &Board, id: PieceId, state: &GameState, out: &mut Vec<Move>) {
    out.clear();
    let Some(pc) = board.piece(id) else {
        return;
    };
    let Some(from) = pc.coord else {
        return;
    };
    for strategy in strategies(pc.kind) {
        match *strategy {
            Strategy::Sliding(dirs) => gen_slider(board, from, pc.team, dirs, out),
            Strategy::Jumping(offsets) => gen_jumps(board, from, pc.team, offsets, out),
            Strategy::Pawn => gen_pawn(board, pc, from, state, out),
            Strategy::King => {
                gen_jumps(board, from, pc.team, &KING_OFFSETS, out);
                gen_castle(board, pc, from, out);
            }
        }
    }
}

fn gen_slider(board: &Board, from: Coord, team: Team, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in dirs {
        let mut to = from.offset(df, dr);
        while board.contains(to) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.team != team => {
                    out.push(Move::capture(from, to));
                    break;
                }
                _ => break,
            }
            to = to.offset(df, dr);
        }
    }
}

fn gen_jumps(board: &Board, from: Coord, team: Team, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in offsets {
        let to = from.offset(df, dr);
        if !board.contains(to) {
            continue;
        }
        match board.piece_at(to) {
            None => out.push(Move::new(from, to)),
            Some(pc) if pc.team != team => out.push(Move::capture(from, to)),
            _ => {}
        }
    }
}

fn gen_pawn(board: &Board, pawn: &Piece, from: Coord, state: &GameState, out: &mut Vec<Move>) {
    let dir = pawn.team.pawn_direction();
    let promo_rank = match pawn.team {
        Team::White => board.height() - 1,
        Team::Black => 0,
    };
    let first = out.len();

    // forward 1, then 2 for an unmoved pawn
    let one = from.offset(0, dir);
    if board.tile_at(one).is_empty() {
        out.push(Move::new(from, one));
        if !pawn.has_moved {
            let two = from.offset(0, 2 * dir);
            if board.tile_at(two).is_empty() {
                out.push(Move::new(from, two));
            }
        }
    }

    // diagonal captures
    for df in [-1, 1] {
        let to = from.offset(df, dir);
        if let Some(target) = board.piece_at(to) {
            if target.team != pawn.team {
                out.push(Move::capture(from, to));
            }
        }
    }

    if let Some(mv) = en_passant(board, pawn, from, state) {
        out.push(mv);
    }

    for mv in &mut out[first..] {
        mv.is_promotion = mv.to.rank == promo_rank;
    }
}

/// En passant is only offered right after the enemy pawn's double step, and
/// only to a pawn standing beside it.
fn en_passant(board: &Board, pawn: &Piece, from: Coord, state: &GameState) -> Option<Move> {
    let last = state.last_move()?;
    let victim = board.piece(last.piece)?;
    if victim.team == pawn.team || victim.kind != PieceKind::Pawn {
        return None;
    }
    let victim_at = victim.coord?;
    if victim_at.rank != from.rank {
        return None;
    }
    if (last.to.rank - last.from.rank).abs() != 2 {
        return None;
    }
    if (victim_at.file - from.file).abs() != 1 {
        return None;
    }

    let to = Coord::new(victim_at.file, from.rank + pawn.team.pawn_direction());
    if board.tile_at(to).is_empty() {
        Some(Move::en_passant(from, to, victim_at))
    } else {
        None
    }
}

fn gen_castle(board: &Board, king: &Piece, from: Coord, out: &mut Vec<Move>) {
    // Must be the unmoved king on its original square
    if king.has_moved || from != Coord::new(KING_FILE, king.team.home_rank()) {
        return;
    }
    let rank = from.rank;

    // Queen side: b, c, d empty; rook a -> d, king e -> c
    if [1, 2, 3].iter().all(|&f| board.piece_at(Coord::new(f, rank)).is_none())
        && castling_rook(board, king.team, Coord::new(QUEENSIDE_ROOK_FILE, rank))
    {
        out.push(Move::castle(
            from,
            Coord::new(2, rank),
            Coord::new(QUEENSIDE_ROOK_FILE, rank),
            Coord::new(3, rank),
        ));
    }

    // King side: f, g empty; rook h -> f, king e -> g
    if [5, 6].iter().all(|&f| board.piece_at(Coord::new(f, rank)).is_none())
        && castling_rook(board, king.team, Coord::new(KINGSIDE_ROOK_FILE, rank))
    {
        out.push(Move::castle(
            from,
            Coord::new(6, rank),
            Coord::new(KINGSIDE_ROOK_FILE, rank),
            Coord::new(5, rank),
        ));
    }
}

fn castling_rook(board: &Board, team: Team, at: Coord) -> bool {
    matches!(
        board.piece_at(at),
        Some(pc) if pc.kind == PieceKind::Rook && pc.team == team && !pc.has_moved
    )
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
