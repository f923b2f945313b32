//! State of a single game: the board and the side to move. [`Game`] owns the
//! notion of legality: a move is legal if it is pseudo-legal and does not
//! leave the mover's king attacked.
//!
//! Legality is checked by simulation: every candidate move is played on a
//! scratch copy of the board and the copy is inspected for check. The live
//! board is only ever changed by [`Game::make_move`].

use thiserror::Error;

use crate::chess::attacks;
use crate::chess::board::Board;
use crate::chess::core::{Move, MoveList, Piece, Side, Square};
use crate::chess::movegen;

/// The move is not among the legal moves of its origin square. This covers
/// an empty origin, a piece of the side not to move, an impossible
/// destination and a move leaving the king attacked alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal move: {attempted}")]
pub struct IllegalMove {
    /// The rejected move.
    pub attempted: Move,
}

/// How the game ended for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move is in check and has no legal moves.
    Checkmate {
        #[allow(missing_docs)]
        winner: Side,
    },
    /// The side to move is not in check and has no legal moves.
    Stalemate,
}

/// A game in progress. The game never refuses moves because it "ended":
/// deciding when to stop is up to the caller, who can consult
/// [`Game::is_in_checkmate`], [`Game::is_in_stalemate`] or [`Game::outcome`]
/// after each move.
///
/// A `Game` has no internal locking; share it between threads behind a mutex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Side,
}

impl Game {
    /// Creates a game in the starting position with White to move.
    ///
    /// ```
    /// use chessrules::chess::core::{Side, Square};
    /// use chessrules::chess::game::Game;
    ///
    /// let game = Game::new();
    /// assert_eq!(game.side_to_move(), Side::White);
    /// let moves = game.legal_moves(Square::new(2, 5)).unwrap();
    /// assert_eq!(moves.len(), 2);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Board::starting(), Side::White)
    }

    /// Resumes a game from an arbitrary position without replaying history.
    #[must_use]
    pub const fn from_parts(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board wholesale.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Overrides whose turn it is.
    pub fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;
    }

    /// Calculates the legal moves of the piece standing on `from`, in move
    /// generation order.
    ///
    /// Returns [`None`] if the square is empty. A piece of the side that is
    /// not to move has no legal moves, which is different from having no
    /// piece at all.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Option<MoveList> {
        let piece = self.board.at(from)?;
        if piece.owner != self.side_to_move {
            return Some(MoveList::new());
        }
        Some(safe_moves(&self.board, piece, from))
    }

    /// Calculates all legal moves of the side to move, square by square in
    /// [`Square::iter`] order.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(50);
        for (from, piece) in self.pieces_of(self.side_to_move) {
            moves.extend(safe_moves(&self.board, piece, from));
        }
        moves
    }

    /// Plays the move and passes the turn to the opponent. This is the only
    /// way the game state changes.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] and leaves the game untouched if the move is
    /// not among [`Game::legal_moves`] of its origin.
    pub fn make_move(&mut self, next_move: Move) -> Result<(), IllegalMove> {
        let is_legal = self
            .legal_moves(next_move.from())
            .is_some_and(|moves| moves.contains(&next_move));
        if !is_legal {
            return Err(IllegalMove {
                attempted: next_move,
            });
        }
        self.apply(&next_move);
        Ok(())
    }

    /// Plays a move coming straight from [`Game::moves`] without validating
    /// it again.
    pub(crate) fn apply(&mut self, next_move: &Move) {
        debug_assert!(
            self.board
                .at(next_move.from())
                .is_some_and(|piece| piece.owner == self.side_to_move),
            "{next_move} is not played by the side to move"
        );
        self.board.apply(next_move);
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Returns true if the king of `side` is attacked, or if `side` has no
    /// king at all.
    #[must_use]
    pub fn is_in_check(&self, side: Side) -> bool {
        attacks::in_check(&self.board, side)
    }

    /// In check and no legal moves. A side that is not to move never has
    /// legal moves, so a checked side waiting for its turn counts as mated.
    #[must_use]
    pub fn is_in_checkmate(&self, side: Side) -> bool {
        self.is_in_check(side) && !self.has_legal_moves(side)
    }

    /// Not in check but no legal moves either.
    #[must_use]
    pub fn is_in_stalemate(&self, side: Side) -> bool {
        !self.is_in_check(side) && !self.has_legal_moves(side)
    }

    /// Returns the result of the game if the side to move has no legal moves.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let side = self.side_to_move;
        if self.has_legal_moves(side) {
            return None;
        }
        if self.is_in_check(side) {
            Some(Outcome::Checkmate {
                winner: side.opponent(),
            })
        } else {
            Some(Outcome::Stalemate)
        }
    }

    /// The side that is not to move has no legal moves, just like
    /// [`Game::legal_moves`] reports for each of its pieces.
    fn has_legal_moves(&self, side: Side) -> bool {
        side == self.side_to_move
            && self
                .pieces_of(side)
                .any(|(from, piece)| !safe_moves(&self.board, piece, from).is_empty())
    }

    fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .pieces()
            .filter(move |(_, piece)| piece.owner == side)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Filters pseudo-legal moves of `piece` down to the ones that do not leave
/// its owner in check. Each candidate is played on its own copy of the board.
fn safe_moves(board: &Board, piece: Piece, from: Square) -> MoveList {
    let mut moves = movegen::piece_moves(piece, board, from);
    moves.retain(|candidate| {
        let mut scratch = board.clone();
        scratch.apply(candidate);
        !attacks::in_check(&scratch, piece.owner)
    });
    moves
}
