//! Text rendering of the board and of engine notifications.

use hotseat_core::{Board, Coord, GameEvent, Selection};

/// Draws the board with White at the bottom. The selected piece is bracketed,
/// reachable empty squares carry `*` and capturable pieces are parenthesised.
pub fn render_board(board: &Board, selection: &Selection) -> String {
    let selected_at = selection
        .piece()
        .and_then(|id| board.piece(id))
        .and_then(|pc| pc.coord);
    let mut out = String::new();

    for rank in (0..board.height()).rev() {
        out.push_str(&format!("{:>2} ", rank + 1));
        for file in 0..board.width() {
            let at = Coord::new(file, rank);
            let target = selection.move_to(at);
            let cell = match (board.piece_at(at), target) {
                (Some(pc), _) if Some(at) == selected_at => format!("[{}]", pc.symbol()),
                (Some(pc), Some(_)) => format!("({})", pc.symbol()),
                (Some(pc), None) => format!(" {} ", pc.symbol()),
                // En passant lands on an empty square but still captures
                (None, Some(mv)) if mv.is_capture => " x ".to_string(),
                (None, Some(_)) => " * ".to_string(),
                (None, None) => " . ".to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    out.push_str("   ");
    for file in 0..board.width() {
        out.push_str(&format!(" {} ", (b'a' + file as u8) as char));
    }
    out.push('\n');
    out
}

/// One human-readable line per notification. `None` for events that only
/// change what the next redraw shows.
pub fn describe(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::PieceSelected { at, moves, .. } if moves.is_empty() => {
            Some(format!("Piece on {at} has no moves"))
        }
        GameEvent::PieceSelected { at, moves, .. } => {
            Some(format!("Selected {at}: {} move(s)", moves.len()))
        }
        GameEvent::SelectionCleared => None,
        GameEvent::PieceCaptured { team, kind, at, .. } => {
            Some(format!("{team} {kind} captured on {at}"))
        }
        GameEvent::PieceMoved { from, to, .. } => Some(format!("{from} -> {to}")),
        GameEvent::TurnChanged { team } => Some(format!("{team} to move")),
        GameEvent::GameOver { winner } => Some(format!(
            "{winner} captured the king and wins. Type `replay` for another game."
        )),
        GameEvent::BoardReset => Some("New game".to_string()),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
