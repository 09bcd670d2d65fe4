// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Candidate destination generation. The destinations produced here are
//! purely geometric: they ignore board occupancy entirely, with the single
//! exception of the pawn's direction- and rank-dependent candidate set.
//! Occupancy, blocking, and check rules are applied by the `rules` module.
use crate::geometry::{self, CoordVec};
use crate::types::{Color, Coord, PieceKind};

/// Enumerates the candidate destinations for a piece of the given kind and
/// color standing at `from`. The result is unfiltered; callers must project
/// it through board bounds (or use [`candidate_destinations_on_board`])
/// before use.
pub fn candidate_destinations(kind: PieceKind, from: Coord, color: Color) -> CoordVec {
    match kind {
        PieceKind::Pawn => pawn_candidates(from, color),
        PieceKind::Knight => geometry::knight_steps(from),
        PieceKind::Bishop => geometry::diagonals(from),
        PieceKind::Rook => geometry::lines(from),
        PieceKind::Queen => {
            let mut all = geometry::diagonals(from);
            all.extend(geometry::lines(from));
            all
        }
        PieceKind::King => geometry::king_steps(from),
    }
}

/// [`candidate_destinations`], bounds-filtered. This is the form the
/// presentation layer uses to highlight reachable squares.
pub fn candidate_destinations_on_board(kind: PieceKind, from: Coord, color: Color) -> CoordVec {
    geometry::filter_on_board(candidate_destinations(kind, from, color))
}

// Pawns are the only piece whose candidate set depends on anything but the
// origin square: direction comes from the color, and the double step is
// offered from the starting rank only. The diagonal squares are offered
// unconditionally here; the capture-only rule for them lives in the pawn
// legality check.
fn pawn_candidates(from: Coord, color: Color) -> CoordVec {
    let advance = color.pawn_direction();
    let mut candidates = CoordVec::new();
    candidates.push(from.offset(advance, 0));
    if from.rank == color.pawn_start_rank() {
        candidates.push(from.offset(2 * advance, 0));
    }
    candidates.push(from.offset(advance, -1));
    candidates.push(from.offset(advance, 1));
    candidates
}
