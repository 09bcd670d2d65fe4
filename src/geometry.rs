// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Raw board geometry: offset enumeration for every piece shape, bounds
//! filtering, and the open interval of squares between two endpoints of a
//! move. Everything here is purely coordinate arithmetic; occupancy is the
//! business of the `rules` module.
use arrayvec::ArrayVec;

use crate::types::{Coord, Move};

/// A bounded vector of coordinates. 64 is the largest set any enumeration
/// here can produce: the union of diagonals (28), lines (28), and knight
/// steps (8) from one square.
pub type CoordVec = ArrayVec<[Coord; 64]>;

static KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

static KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub fn is_on_board(c: Coord) -> bool {
    0 <= c.rank && c.rank < 8 && 0 <= c.file && c.file < 8
}

/// Projects a sequence of candidate coordinates down to the ones that lie on
/// the board, preserving order.
pub fn filter_on_board<I>(coords: I) -> CoordVec
where
    I: IntoIterator<Item = Coord>,
{
    coords.into_iter().filter(|&c| is_on_board(c)).collect()
}

/// The eight knight-offset coordinates from `c`, unfiltered.
pub fn knight_steps(c: Coord) -> CoordVec {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(rank, file)| c.offset(rank, file))
        .collect()
}

/// The eight unit-offset neighbors of `c`, unfiltered.
pub fn king_steps(c: Coord) -> CoordVec {
    KING_OFFSETS
        .iter()
        .map(|&(rank, file)| c.offset(rank, file))
        .collect()
}

/// All squares on the two diagonals through `c` for step magnitudes 1..=7,
/// unfiltered, excluding `c` itself.
pub fn diagonals(c: Coord) -> CoordVec {
    let mut steps = CoordVec::new();
    // Magnitudes start at 1 so that standing still is never an option.
    for i in 1..8 {
        steps.push(c.offset(i, i));
        steps.push(c.offset(-i, i));
        steps.push(c.offset(i, -i));
        steps.push(c.offset(-i, -i));
    }
    steps
}

/// All squares on the rank and file through `c` for step magnitudes 1..=7,
/// unfiltered, excluding `c` itself.
pub fn lines(c: Coord) -> CoordVec {
    let mut steps = CoordVec::new();
    for i in 1..8 {
        steps.push(c.offset(i, 0));
        steps.push(c.offset(0, i));
        steps.push(c.offset(-i, 0));
        steps.push(c.offset(0, -i));
    }
    steps
}

/// The open interval of squares strictly between a move's endpoints, in
/// order from origin to destination. Only meaningful when the endpoints
/// share a rank, file, or diagonal; for any other move the walk is bounded
/// (it stops at the board edge) but the result is unspecified. The engine
/// only consults it for sliding pieces, whose shape check rejects
/// non-aligned moves regardless.
pub fn points_along(mov: Move) -> CoordVec {
    let rank_step = (mov.to.rank - mov.from.rank).signum();
    let file_step = (mov.to.file - mov.from.file).signum();
    let mut points = CoordVec::new();
    let mut cursor = mov.from.offset(rank_step, file_step);
    while cursor != mov.to && is_on_board(cursor) {
        points.push(cursor);
        cursor = cursor.offset(rank_step, file_step);
    }
    points
}
