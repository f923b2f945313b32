//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::ops::Not;

use anyhow::bail;
use arrayvec::ArrayVec;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Upper bound on the number of moves a single piece can have: a queen in the
/// center of an otherwise empty board reaches 27 squares. A pawn fans out to
/// at most 12 moves (3 targets times 4 promotion choices).
pub const MAX_PIECE_MOVES: usize = 27;

/// Moves of a single piece. Lives on the stack: the move generator and the
/// legality filter are called for every piece of every simulated board.
pub type MoveList = ArrayVec<Move, MAX_PIECE_MOVES>;

/// A square of the board addressed by its row (rank) and column (file), both
/// within `1..=8`. Row 1 is White's back rank, column 1 is the leftmost
/// column from White's point of view.
///
/// Internally the square is a single byte: the index in a row-major layout,
/// starting from (1, 1).
///
/// ```
/// use chessrules::chess::core::Square;
///
/// let square = Square::new(2, 5);
/// assert_eq!(square.row(), 2);
/// assert_eq!(square.column(), 5);
/// assert_eq!(square.to_string(), "e2");
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Connects row and column to form a full square.
    ///
    /// # Panics
    ///
    /// If either coordinate is outside `1..=8`. Callers that compute
    /// coordinates (e.g. the move generator) should go through
    /// [`Square::offset`] instead.
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        assert!(
            row >= 1 && row <= BOARD_WIDTH && column >= 1 && column <= BOARD_WIDTH,
            "square coordinates should be within 1..=8"
        );
        Self((row - 1) * BOARD_WIDTH + (column - 1))
    }

    /// Returns the row (rank) the square is located on, `1..=8`.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_WIDTH + 1
    }

    /// Returns the column (file) the square is located on, `1..=8`.
    #[must_use]
    pub const fn column(self) -> u8 {
        self.0 % BOARD_WIDTH + 1
    }

    /// Shifts the square by the given number of rows and columns. Returns
    /// [`None`] if the target falls off the board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let column = self.column().checked_add_signed(d_column)?;
        if (1..=BOARD_WIDTH).contains(&row) && (1..=BOARD_WIDTH).contains(&column) {
            Some(Self::new(row, column))
        } else {
            None
        }
    }

    /// Iterates over all squares: row by row starting from row 1, left to
    /// right within a row. Every full-board scan uses this order.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).map(Self)
    }

    pub(super) fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses algebraic coordinates, e.g. "e2" is row 2, column 5.
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((column, row)) = square.chars().collect_tuple() else {
            bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            )
        };
        let column = match column {
            'a'..='h' => column as u8 - b'a' + 1,
            _ => bail!("column should be within 'a'..='h', got '{column}'"),
        };
        let row = match row {
            '1'..='8' => row as u8 - b'0',
            _ => bail!("row should be within '1'..='8', got '{row}'"),
        };
        Ok(Self::new(row, column))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column() - 1) as char, self.row())
    }
}

/// A standard game of chess is played between two sides: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a single pawn advance.
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Row pawns start on and may advance two squares from.
    #[must_use]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Self::White => 2,
            Self::Black => 7,
        }
    }

    /// Row on which a pawn of this side promotes.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Self::White => 8,
            Self::Black => 1,
        }
    }

    /// Row the back rank pieces of this side start on.
    #[must_use]
    pub const fn back_row(self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => 8,
        }
    }
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl TryFrom<&str> for Side {
    type Error = anyhow::Error;

    fn try_from(side: &str) -> anyhow::Result<Self> {
        match side {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("side should be 'w' or 'b', got '{side}'"),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    /// Pieces a pawn can promote to, in the order promotion moves are
    /// generated.
    pub const PROMOTIONS: [Self; 4] = [Self::Queen, Self::Knight, Self::Bishop, Self::Rook];
}

impl TryFrom<char> for PieceKind {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol.to_ascii_lowercase() {
            'k' => Ok(Self::King),
            'q' => Ok(Self::Queen),
            'b' => Ok(Self::Bishop),
            'n' => Ok(Self::Knight),
            'r' => Ok(Self::Rook),
            'p' => Ok(Self::Pawn),
            _ => bail!("piece symbol should be within \"kqbnrp\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Rook => 'r',
            Self::Pawn => 'p',
        })
    }
}

/// Represents a specific piece owned by a side. The piece does not know where
/// it stands: two pieces are equal if their owners and kinds match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Side,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(owner: Side, kind: PieceKind) -> Self {
        Self { owner, kind }
    }
}

impl fmt::Display for Piece {
    /// Prints the FEN symbol: uppercase for White, lowercase for Black.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.kind {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Pawn => 'p',
        };
        f.write_char(match self.owner {
            Side::White => symbol.to_ascii_uppercase(),
            Side::Black => symbol,
        })
    }
}

/// Moves a piece from one square to another. Captured pieces are simply
/// overwritten: the move does not record them. `promotion` is only set for
/// pawn moves landing on the promotion row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }
}

impl fmt::Display for Move {
    /// Serializes a move in [UCI format].
    ///
    /// [UCI format]: http://wbec-ridderkerk.nl/html/UCIProtocol.html
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{promotion}")?;
        }
        Ok(())
    }
}
