//! Rules and move-execution engine for two players sharing one board.
//!
//! The engine enumerates each piece's moves (captures, en passant and
//! castling included), executes the chosen one and hands the turn over.
//! Check, mate and draw rules are not part of the game; capturing the king
//! ends it.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod game_state;
pub mod movegen;
pub mod types;

pub use board::*;
pub use config::GameConfig;
pub use engine::*;
pub use error::SetupError;
pub use events::*;
pub use game_state::*;
pub use movegen::*;
pub use types::*;
