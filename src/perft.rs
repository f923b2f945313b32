//! [Perft] (*per*formance *t*esting) is a technique for checking correctness of
//! move generation: it counts the leaf nodes of the game tree up to a given
//! depth. The counts can be compared with reference engines.
//!
//! [Perft]: https://www.chessprogramming.org/Perft

use crate::chess::game::Game;

/// Counts the positions reachable from `game` in exactly `depth` plies.
///
/// ```
/// use chessrules::chess::game::Game;
/// use chessrules::perft::perft;
///
/// assert_eq!(perft(&Game::new(), 1), 20);
/// ```
#[must_use]
pub fn perft(game: &Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = game.moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for next_move in &moves {
        let mut child = game.clone();
        child.apply(next_move);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::perft;
    use crate::chess::board::Board;
    use crate::chess::core::{Piece, PieceKind, Side, Square};
    use crate::chess::game::Game;

    #[test]
    fn shallow() {
        let game = Game::new();
        assert_eq!(perft(&game, 0), 1);
        assert_eq!(perft(&game, 1), 20);
        assert_eq!(perft(&game, 2), 400);
    }

    #[test]
    fn children_add_up() {
        let game = Game::new();
        let mut nodes = 0;
        for next_move in game.moves() {
            let mut child = game.clone();
            child.make_move(next_move).unwrap();
            nodes += perft(&child, 2);
        }
        assert_eq!(nodes, perft(&game, 3));
        assert_eq!(nodes, 8902);
    }

    #[test]
    fn no_moves() {
        let mut board = Board::empty();
        board.place(
            Square::new(8, 8),
            Some(Piece::new(Side::Black, PieceKind::King)),
        );
        board.place(
            Square::new(6, 7),
            Some(Piece::new(Side::White, PieceKind::Queen)),
        );
        board.place(
            Square::new(1, 1),
            Some(Piece::new(Side::White, PieceKind::King)),
        );
        let game = Game::from_parts(board, Side::Black);
        assert_eq!(perft(&game, 1), 0);
        assert_eq!(perft(&game, 3), 0);
    }
}
