// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move legality and check detection.
//!
//! Legality composes the geometric candidate sets with occupancy rules:
//! blocking for sliding pieces, capture rules, the pawn special cases, and
//! the self-check simulation. Check detection runs in the reverse direction:
//! instead of enumerating enemy pieces, it probes every square a bishop,
//! rook, or knight standing on the king's square could reach and asks
//! whether a reverse move from there onto the king would be legal. Piece
//! shapes are geometrically symmetric, so an enemy piece that could capture
//! the king is exactly one whose reverse probe validates.
use crate::board::Board;
use crate::geometry::{self, CoordVec};
use crate::movegen;
use crate::types::{Color, Coord, Move, PieceKind};

lazy_static! {
    // For each square, the bounds-filtered union of diagonal, knight, and
    // line squares reachable from it: every square from which a piece could
    // possibly be delivering check to a king standing there.
    static ref PROBE_TABLE: Vec<CoordVec> = {
        let mut table = Vec::with_capacity(64);
        for rank in 0..8 {
            for file in 0..8 {
                let origin = Coord::new(rank, file);
                let mut probes = geometry::diagonals(origin);
                probes.extend(geometry::knight_steps(origin));
                probes.extend(geometry::lines(origin));
                table.push(geometry::filter_on_board(probes));
            }
        }
        table
    };
}

fn table_index(c: Coord) -> usize {
    c.rank as usize * 8 + c.file as usize
}

/// Decides whether `mov` is legal on `board` for whichever side owns the
/// origin piece.
///
/// `allow_king_capture` exists solely for the check detector: it suspends
/// the no-king-capture rule so a probe can ask "could an enemy move land on
/// the king's square", and it also stops validation before the self-check
/// simulation. Normal gameplay always passes `false`.
pub fn is_move_legal(board: &Board, mov: Move, allow_king_capture: bool) -> bool {
    if !geometry::is_on_board(mov.from) || !geometry::is_on_board(mov.to) {
        return false;
    }

    let destination = board.piece_at(mov.to);
    if let Some(target) = destination {
        // Kings are never a normal capture target.
        if target.kind == PieceKind::King && !allow_king_capture {
            return false;
        }
    }
    let mover = match board.piece_at(mov.from) {
        Some(piece) => piece,
        None => return false,
    };
    if let Some(target) = destination {
        if target.color == mover.color {
            return false;
        }
    }

    if mover.is_sliding() && is_blocked(board, mov) {
        return false;
    }

    let shape_ok = if mover.kind == PieceKind::Pawn {
        is_pawn_move_legal(board, mov, mover.color)
    } else {
        movegen::candidate_destinations_on_board(mover.kind, mov.from, mover.color)
            .contains(&mov.to)
    };
    if !shape_ok {
        return false;
    }

    if allow_king_capture {
        // Attack probes stop here. The self-check rule applies to real moves
        // only; recursing into it from the check detector would not
        // terminate, and a pinned piece still delivers check.
        return true;
    }

    // Simulate the move on a copy of the board and reject it if it leaves
    // the mover's own king attacked.
    let mut after = board.clone();
    after.apply(mov);
    let king_square = after
        .king(mover.color)
        .expect("invalid board: moving side has no king");
    !is_king_attacked(&after, king_square)
}

// A sliding move is blocked when any square strictly between its endpoints
// is occupied.
fn is_blocked(board: &Board, mov: Move) -> bool {
    geometry::points_along(mov)
        .iter()
        .any(|&point| board.piece_at(point).is_some())
}

// The pawn's legal shapes depend on occupancy, not merely blocking: a
// diagonal step must capture, a forward step must not.
fn is_pawn_move_legal(board: &Board, mov: Move, color: Color) -> bool {
    let advance = color.pawn_direction();
    let rank_diff = mov.to.rank - mov.from.rank;
    let file_diff = (mov.to.file - mov.from.file).abs();

    // Pawns never move backward.
    if rank_diff.signum() == -advance {
        return false;
    }

    match (file_diff, rank_diff.abs()) {
        (1, 1) => match board.piece_at(mov.to) {
            Some(target) => target.color != color,
            None => false,
        },
        (0, 1) => board.piece_at(mov.to).is_none(),
        (0, 2) => {
            let intermediate = Coord::new(mov.from.rank + advance, mov.from.file);
            mov.from.rank == color.pawn_start_rank()
                && board.piece_at(intermediate).is_none()
                && board.piece_at(mov.to).is_none()
        }
        _ => false,
    }
}

/// Reports whether the king standing on `king_square` is attacked.
///
/// The square must hold a king; probing any other square is a fatal
/// invariant violation, not a reportable condition.
pub fn is_king_attacked(board: &Board, king_square: Coord) -> bool {
    match board.piece_at(king_square) {
        Some(piece) if piece.kind == PieceKind::King => {}
        _ => panic!(
            "check probe on {}, which does not hold a king",
            king_square
        ),
    }

    PROBE_TABLE[table_index(king_square)]
        .iter()
        .any(|&probe| is_move_legal(board, Move::new(probe, king_square), true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::Move;

    fn legal(fen: &str, mov: &str) -> bool {
        let board = Board::from_fen(fen).unwrap();
        is_move_legal(&board, Move::from_uci(mov).unwrap(), false)
    }

    #[test]
    fn standing_still_is_never_legal() {
        assert!(!legal("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", "c2c2"));
        assert!(!legal("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", "b1b1"));
    }

    #[test]
    fn empty_origin_is_illegal() {
        assert!(!legal("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", "c4c5"));
    }

    #[test]
    fn off_board_endpoints_are_illegal() {
        let board = Board::standard();
        let mov = Move::new(Coord::new(1, 2), Coord::new(8, 2));
        assert!(!is_move_legal(&board, mov, false));
    }

    #[test]
    fn knights_jump_over_blockers() {
        assert!(legal("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", "b1c3"));
    }

    #[test]
    fn rooks_do_not_jump() {
        assert!(!legal("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", "a1a5"));
    }

    #[test]
    fn rook_shapes_are_lines_only() {
        assert!(!legal("8/8/8/8/8/1R6/8/4K2k", "b3c4"));
        assert!(legal("8/8/8/8/8/1R6/8/4K2k", "b3b7"));
    }

    #[test]
    fn cannot_capture_own_piece() {
        assert!(!legal("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", "a1a2"));
    }

    #[test]
    fn cannot_capture_a_king() {
        // The black rook has a clear line to the white king, but the king is
        // not a capture target for a normal move.
        let board = Board::from_fen("4r2k/8/8/8/8/8/8/4K3").unwrap();
        assert!(!is_move_legal(
            &board,
            Move::from_uci("e8e1").unwrap(),
            false
        ));
        // The same probe with king capture allowed is how the check detector
        // sees that the king is attacked.
        assert!(is_move_legal(&board, Move::from_uci("e8e1").unwrap(), true));
    }
}
