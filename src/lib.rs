//! Chess rules engine: maintains the board, enumerates legal moves of a piece
//! under full chess law (including "cannot move into check"), applies moves
//! and detects check, checkmate and stalemate.
//!
//! The engine is the rules layer only. It does no I/O and has no notion of
//! move history, so castling, en passant, repetition and the fifty-move rule
//! are out of its scope. Presentation, networking and persistence are up to
//! the caller: construct a [`chess::game::Game`], drive it through
//! [`chess::game::Game::legal_moves`] and [`chess::game::Game::make_move`], and
//! consult the check/checkmate/stalemate queries after every move.
//!
//! ```
//! use chessrules::chess::core::{Move, Side, Square};
//! use chessrules::chess::game::Game;
//!
//! let mut game = Game::new();
//! game.make_move(Move::new(Square::new(2, 5), Square::new(4, 5), None))
//!     .expect("double advance from the starting row is legal");
//! assert_eq!(game.side_to_move(), Side::Black);
//! assert!(!game.is_in_check(Side::Black));
//! ```

pub mod chess;
pub mod perft;
