//! En passant and castling played through the turn engine.

use hotseat_core::{Board, Coord, GameEvent, PieceKind, Team, Tile, TurnEngine};

fn sq(name: &str) -> Coord {
    Coord::parse(name).expect("square name")
}

fn engine_from(placement: &str, first: Team) -> TurnEngine {
    let board = Board::from_placement(8, 8, placement).expect("valid placement");
    TurnEngine::from_board(board, first).expect("both kings present")
}

fn play(engine: &mut TurnEngine, from: &str, to: &str) -> Vec<GameEvent> {
    let selected = engine.click_square(sq(from));
    assert!(
        matches!(selected.first(), Some(GameEvent::PieceSelected { .. })),
        "could not select {from}: {selected:?}"
    );
    engine.click_square(sq(to))
}

// =============================================================================
// En passant
// =============================================================================

#[test]
fn test_en_passant_right_after_double_step() {
    // White pawn e5 (4,4); black pawn f7 (5,6) about to double-step
    let mut engine = engine_from("4k3/5p2/8/4P3/8/8/8/4K3", Team::Black);
    let black_pawn = engine.board().piece_at(sq("f7")).unwrap().id;
    play(&mut engine, "f7", "f5");
    assert_eq!(engine.board().piece_at(sq("f5")).unwrap().id, black_pawn);

    let white_pawn = engine.board().piece_at(sq("e5")).unwrap().id;
    let moves = engine.legal_moves(white_pawn);
    let ep = moves
        .iter()
        .find(|m| m.to == Coord::new(5, 5))
        .expect("en passant offered");
    assert!(ep.is_en_passant);
    assert!(ep.is_capture);
    assert_eq!(ep.en_passant_capture, Some(Coord::new(5, 4)));

    let events = play(&mut engine, "e5", "f6");
    assert_eq!(
        events[0],
        GameEvent::PieceCaptured {
            piece: black_pawn,
            team: Team::Black,
            kind: PieceKind::Pawn,
            at: Coord::new(5, 4),
        }
    );
    assert_eq!(engine.board().tile_at(Coord::new(5, 4)), Tile::Empty);
    assert_eq!(
        engine.board().tile_at(Coord::new(5, 5)),
        Tile::Occupied(white_pawn)
    );
    assert_eq!(engine.board().pieces_of(Team::Black).count(), 1);
    assert!(!engine.state().is_game_over());
}

#[test]
fn test_en_passant_expires_after_one_ply() {
    let mut engine = engine_from("4k3/5p2/8/4P3/8/8/8/4K3", Team::Black);
    play(&mut engine, "f7", "f5");
    play(&mut engine, "e1", "d1");
    play(&mut engine, "e8", "d8");

    let white_pawn = engine.board().piece_at(sq("e5")).unwrap().id;
    assert!(engine.legal_moves(white_pawn).iter().all(|m| !m.is_en_passant));

    // f6 is no longer a destination, so clicking it just deselects
    engine.click_square(sq("e5"));
    assert_eq!(
        engine.click_square(sq("f6")),
        vec![GameEvent::SelectionCleared]
    );
}

#[test]
fn test_black_en_passant_mirrors() {
    // Black pawn d4 (3,3), white pawn c2 double-steps to c4
    let mut engine = engine_from("4k3/8/8/8/3p4/8/2P5/4K3", Team::White);
    play(&mut engine, "c2", "c4");
    let events = play(&mut engine, "d4", "c3");

    assert!(matches!(
        events[0],
        GameEvent::PieceCaptured { at, team: Team::White, .. } if at == sq("c4")
    ));
    assert_eq!(engine.board().piece_at(sq("c3")).unwrap().team, Team::Black);
    assert!(engine.board().piece_at(sq("c4")).is_none());
}

// =============================================================================
// Castling
// =============================================================================

#[test]
fn test_kingside_castle_moves_both_pieces() {
    let mut engine = engine_from("4k3/8/8/8/8/8/8/4K2R", Team::White);
    let king = engine.board().piece_at(sq("e1")).unwrap().id;
    let rook = engine.board().piece_at(sq("h1")).unwrap().id;

    let moves = engine.legal_moves(king);
    let castle = moves.iter().find(|m| m.is_castling).expect("castle offered");
    assert_eq!(castle.to, Coord::new(6, 0));
    assert_eq!(castle.rook_from, Some(Coord::new(7, 0)));
    assert_eq!(castle.rook_to, Some(Coord::new(5, 0)));

    let events = play(&mut engine, "e1", "g1");
    assert_eq!(
        events,
        vec![
            GameEvent::PieceMoved {
                piece: rook,
                from: sq("h1"),
                to: sq("f1"),
            },
            GameEvent::PieceMoved {
                piece: king,
                from: sq("e1"),
                to: sq("g1"),
            },
            GameEvent::SelectionCleared,
            GameEvent::TurnChanged { team: Team::Black },
        ]
    );

    let board = engine.board();
    assert_eq!(board.piece(king).unwrap().coord, Some(sq("g1")));
    assert_eq!(board.piece(rook).unwrap().coord, Some(sq("f1")));
    assert!(board.piece(king).unwrap().has_moved);
    assert!(board.piece(rook).unwrap().has_moved);
    assert!(board.piece_at(sq("e1")).is_none());
    assert!(board.piece_at(sq("h1")).is_none());
}

#[test]
fn test_black_queenside_castle() {
    let mut engine = engine_from("r3k3/8/8/8/8/8/8/4K3", Team::Black);
    play(&mut engine, "e8", "c8");

    let board = engine.board();
    assert_eq!(board.piece_at(sq("c8")).unwrap().kind, PieceKind::King);
    assert_eq!(board.piece_at(sq("d8")).unwrap().kind, PieceKind::Rook);
    assert!(board.piece_at(sq("a8")).is_none());
    assert_eq!(engine.state().current_team(), Team::White);
}

#[test]
fn test_no_castle_after_king_walks_back() {
    let mut engine = engine_from("4k3/8/8/8/8/8/8/R3K2R", Team::White);
    play(&mut engine, "e1", "e2");
    play(&mut engine, "e8", "e7");
    play(&mut engine, "e2", "e1");
    play(&mut engine, "e7", "e8");

    let king = engine.board().piece_at(sq("e1")).unwrap().id;
    assert!(engine.legal_moves(king).iter().all(|m| !m.is_castling));
}

#[test]
fn test_castling_ignores_attacked_squares() {
    // Black rook on f8 eyes f1; castling is still offered
    let mut engine = engine_from("4kr2/8/8/8/8/8/8/4K2R", Team::White);
    let events = play(&mut engine, "e1", "g1");
    assert!(events.contains(&GameEvent::TurnChanged { team: Team::Black }));
    assert_eq!(engine.board().piece_at(sq("f1")).unwrap().kind, PieceKind::Rook);
}
