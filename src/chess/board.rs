//! [Mailbox] board representation: a fixed array of 64 slots, each either
//! empty or holding a single [`Piece`]. The board knows nothing about the
//! rules of chess.
//!
//! [Mailbox]: https://www.chessprogramming.org/Mailbox

use std::fmt::{self, Write};

use crate::chess::core::{Move, Piece, PieceKind, Side, Square, BOARD_SIZE, BOARD_WIDTH};

/// Pieces of the back rank from column 1 to column 8. The king stands on
/// column 4 and the queen on column 5: existing fixtures number the columns
/// this way.
const BACK_RANK: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement. Two boards are equal iff every slot holds an equal
/// occupant. Cloning produces a fully independent board.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Creates a board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Creates a board in the standard starting arrangement.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Unconditionally overwrites the slot: no validation, no capture
    /// bookkeeping.
    pub fn place(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    /// Returns the occupant of the square, if any.
    #[must_use]
    pub fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Clears the board and sets up the starting arrangement: pawns on rows 2
    /// and 7, back ranks on rows 1 and 8.
    pub fn reset(&mut self) {
        self.squares = [None; BOARD_SIZE as usize];
        for side in [Side::White, Side::Black] {
            for (column, kind) in (1..=BOARD_WIDTH).zip(BACK_RANK) {
                self.place(
                    Square::new(side.pawn_start_row(), column),
                    Some(Piece::new(side, PieceKind::Pawn)),
                );
                self.place(
                    Square::new(side.back_row(), column),
                    Some(Piece::new(side, kind)),
                );
            }
        }
    }

    /// Iterates over occupied squares in [`Square::iter`] order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.at(square).map(|piece| (square, piece)))
    }

    /// Locates the king of the given side. Boards built by hand may lack one.
    /// If there are several, the first in scan order is returned.
    #[must_use]
    pub fn king(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| *piece == Piece::new(side, PieceKind::King))
            .map(|(square, _)| square)
    }

    /// Moves the piece from the move's origin to its destination, replacing it
    /// with the promoted piece if the move carries a promotion. Whatever
    /// occupied the destination is overwritten. Legality is not checked.
    pub(super) fn apply(&mut self, next_move: &Move) {
        debug_assert!(
            self.at(next_move.from()).is_some(),
            "moving from an empty square: {next_move}"
        );
        let Some(moving) = self.at(next_move.from()) else {
            return;
        };
        let placed = match next_move.promotion() {
            Some(kind) => Piece::new(moving.owner, kind),
            None => moving,
        };
        self.place(next_move.from(), None);
        self.place(next_move.to(), Some(placed));
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=BOARD_WIDTH).rev() {
            for column in 1..=BOARD_WIDTH {
                match self.at(Square::new(row, column)) {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if column != BOARD_WIDTH {
                    f.write_str(SQUARE_SEPARATOR)?;
                }
            }
            if row != 1 {
                f.write_str(LINE_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Display for Board {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece) a-la Stockfish "debug" command in UCI mode. Row 8 is
    /// printed first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LINE_SEPARATOR)?;
        self.render(f)
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
