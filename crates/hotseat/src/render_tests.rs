use super::*;
use hotseat_core::{Team, TurnEngine};

#[test]
fn test_standard_board_text() {
    let engine = TurnEngine::standard();
    let text = render_board(engine.board(), engine.selection());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], " 8  r  n  b  q  k  b  n  r ");
    assert_eq!(lines[4], " 4  .  .  .  .  .  .  .  . ");
    assert_eq!(lines[7], " 1  R  N  B  Q  K  B  N  R ");
    assert_eq!(lines[8], "    a  b  c  d  e  f  g  h ");
}

#[test]
fn test_selection_indicators() {
    let board = Board::from_placement(8, 8, "4k3/8/8/n7/8/8/8/R3K3").unwrap();
    let mut engine = TurnEngine::from_board(board, Team::White).unwrap();
    engine.click_square(Coord::parse("a1").unwrap());

    let text = render_board(engine.board(), engine.selection());
    let lines: Vec<&str> = text.lines().collect();
    // a5 knight is capturable, a2..a4 reachable, a1 rook selected
    assert!(lines[3].starts_with(" 5 (n)"));
    assert!(lines[4].starts_with(" 4  * "));
    assert!(lines[7].starts_with(" 1 [R] *  *  * "));
}

#[test]
fn test_descriptions() {
    assert_eq!(describe(&GameEvent::SelectionCleared), None);
    assert_eq!(
        describe(&GameEvent::TurnChanged { team: Team::Black }).as_deref(),
        Some("Black to move")
    );
    let moved = GameEvent::PieceMoved {
        piece: hotseat_core::PieceId(0),
        from: Coord::new(4, 1),
        to: Coord::new(4, 3),
    };
    assert_eq!(describe(&moved).as_deref(), Some("e2 -> e4"));
}
