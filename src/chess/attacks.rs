//! Check detection. A square is attacked by a side if any of that side's
//! pieces has a pseudo-legal move landing on it.
//!
//! There are no dedicated attack tables: attacks are the destinations
//! produced by [`crate::chess::movegen`].

use crate::chess::board::Board;
use crate::chess::core::{Side, Square};
use crate::chess::movegen;

/// Returns true if any piece owned by `attacker` can move to `target`.
#[must_use]
pub fn is_attacked(board: &Board, target: Square, attacker: Side) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.owner == attacker)
        .any(|(from, piece)| {
            movegen::piece_moves(piece, board, from)
                .iter()
                .any(|candidate| candidate.to() == target)
        })
}

/// Returns true if the king of `side` is attacked. A side without a king can
/// not be verified to be safe and is therefore considered to be in check.
#[must_use]
pub fn in_check(board: &Board, side: Side) -> bool {
    board
        .king(side)
        .map_or(true, |king| is_attacked(board, king, side.opponent()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chess::core::{Piece, PieceKind};

    fn square(name: &str) -> Square {
        Square::try_from(name).unwrap()
    }

    fn put(board: &mut Board, name: &str, owner: Side, kind: PieceKind) {
        board.place(square(name), Some(Piece::new(owner, kind)));
    }

    #[test]
    fn starting_position_is_quiet() {
        let board = Board::starting();
        assert!(!in_check(&board, Side::White));
        assert!(!in_check(&board, Side::Black));
        assert!(is_attacked(&board, square("e3"), Side::White));
        assert!(!is_attacked(&board, square("e5"), Side::White));
        assert!(is_attacked(&board, square("a6"), Side::Black));
    }

    #[test]
    fn kingless_side_is_in_check() {
        let mut board = Board::empty();
        assert!(in_check(&board, Side::White));
        put(&mut board, "a1", Side::White, PieceKind::King);
        assert!(!in_check(&board, Side::White));
        assert!(in_check(&board, Side::Black));
    }

    #[test]
    fn rook_along_rank() {
        let mut board = Board::empty();
        put(&mut board, "a1", Side::White, PieceKind::King);
        put(&mut board, "h1", Side::Black, PieceKind::Rook);
        assert!(in_check(&board, Side::White));
        // Blocked line of sight.
        put(&mut board, "d1", Side::White, PieceKind::Bishop);
        assert!(!in_check(&board, Side::White));
        assert!(is_attacked(&board, square("d1"), Side::Black));
    }

    #[test]
    fn pawn_attacks_diagonally_only() {
        let mut board = Board::empty();
        put(&mut board, "e4", Side::White, PieceKind::King);
        put(&mut board, "e5", Side::Black, PieceKind::Pawn);
        assert!(!in_check(&board, Side::White));
        put(&mut board, "d5", Side::Black, PieceKind::Pawn);
        assert!(in_check(&board, Side::White));
    }

    #[test]
    fn own_pieces_do_not_attack() {
        let mut board = Board::empty();
        put(&mut board, "e1", Side::White, PieceKind::King);
        put(&mut board, "e8", Side::White, PieceKind::Queen);
        assert!(!in_check(&board, Side::White));
    }

    #[test]
    fn adjacent_kings() {
        let mut board = Board::empty();
        put(&mut board, "e4", Side::White, PieceKind::King);
        put(&mut board, "e5", Side::Black, PieceKind::King);
        assert!(in_check(&board, Side::White));
        assert!(in_check(&board, Side::Black));
    }
}
