//! Pseudo-legal move generation: the squares a piece can physically reach
//! according to its movement pattern, without regard to whether the move
//! leaves its own king attacked. The legality filter lives in
//! [`crate::chess::game`].
//!
//! Generation is deterministic: sliding pieces walk each direction in the
//! order listed below from the nearest square outwards, leapers follow their
//! offset tables, pawns produce advances before captures and the left capture
//! before the right one.

use crate::chess::board::Board;
use crate::chess::core::{Move, MoveList, Piece, PieceKind, Side, Square};

/// (row, column) deltas.
type Offset = (i8, i8);

const KNIGHT_LEAPS: [Offset; 8] = [
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

const KING_STEPS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const DIAGONALS: [Offset; 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ORTHOGONALS: [Offset; 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Generates pseudo-legal moves of whatever stands on `from`. An empty square
/// produces no moves.
#[must_use]
pub fn generate_moves(board: &Board, from: Square) -> MoveList {
    match board.at(from) {
        Some(piece) => piece_moves(piece, board, from),
        None => MoveList::new(),
    }
}

/// Generates pseudo-legal moves of `piece` as if it stood on `from`. Only the
/// piece's owner and kind matter: the occupant of `from` itself is never
/// inspected.
#[must_use]
pub fn piece_moves(piece: Piece, board: &Board, from: Square) -> MoveList {
    let mut moves = MoveList::new();
    let owner = piece.owner;
    match piece.kind {
        PieceKind::King => leaper_moves(&mut moves, owner, board, from, &KING_STEPS),
        PieceKind::Knight => leaper_moves(&mut moves, owner, board, from, &KNIGHT_LEAPS),
        PieceKind::Bishop => sliding_moves(&mut moves, owner, board, from, &DIAGONALS),
        PieceKind::Rook => sliding_moves(&mut moves, owner, board, from, &ORTHOGONALS),
        PieceKind::Queen => {
            sliding_moves(&mut moves, owner, board, from, &DIAGONALS);
            sliding_moves(&mut moves, owner, board, from, &ORTHOGONALS);
        },
        PieceKind::Pawn => pawn_moves(&mut moves, owner, board, from),
    }
    moves
}

/// Fixed jumps: the target is reachable unless it is off the board or holds a
/// piece of the same side.
fn leaper_moves(
    moves: &mut MoveList,
    owner: Side,
    board: &Board,
    from: Square,
    offsets: &[Offset],
) {
    for &(d_row, d_column) in offsets {
        let Some(to) = from.offset(d_row, d_column) else {
            continue;
        };
        match board.at(to) {
            Some(occupant) if occupant.owner == owner => (),
            _ => moves.push(Move::new(from, to, None)),
        }
    }
}

/// Walks every direction until the edge of the board or the first occupied
/// square. An opponent's piece there can be captured, our own blocks.
fn sliding_moves(
    moves: &mut MoveList,
    owner: Side,
    board: &Board,
    from: Square,
    directions: &[Offset],
) {
    for &(d_row, d_column) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_column) {
            if let Some(occupant) = board.at(to) {
                if occupant.owner != owner {
                    moves.push(Move::new(from, to, None));
                }
                break;
            }
            moves.push(Move::new(from, to, None));
            current = to;
        }
    }
}

fn pawn_moves(moves: &mut MoveList, owner: Side, board: &Board, from: Square) {
    let direction = owner.pawn_direction();
    let Some(advance) = from.offset(direction, 0) else {
        return;
    };
    if board.at(advance).is_none() {
        add_pawn_move(moves, owner, from, advance);
        // Both the skipped and the destination squares have to be empty.
        if from.row() == owner.pawn_start_row() {
            if let Some(double_advance) = advance
                .offset(direction, 0)
                .filter(|&square| board.at(square).is_none())
            {
                add_pawn_move(moves, owner, from, double_advance);
            }
        }
    }
    // No en passant: the diagonal square has to hold an opponent's piece.
    for d_column in [-1, 1] {
        let Some(target) = from.offset(direction, d_column) else {
            continue;
        };
        if matches!(board.at(target), Some(occupant) if occupant.owner != owner) {
            add_pawn_move(moves, owner, from, target);
        }
    }
}

fn add_pawn_move(moves: &mut MoveList, owner: Side, from: Square, to: Square) {
    if to.row() == owner.promotion_row() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::new(from, to, Some(kind)));
        }
    } else {
        moves.push(Move::new(from, to, None));
    }
}
