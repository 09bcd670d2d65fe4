// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! caissa is a rules engine for standard chess. It maintains an 8x8 mailbox
//! board, enumerates candidate destinations per piece, validates move
//! legality (blocking, capture rules, pawn special cases, self-check
//! prevention), detects check, and answers "has any legal move" queries for
//! terminal conditions. Castling, en-passant, and promotion are deliberately
//! out of scope.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate serde_derive;

mod board;
pub mod eval;
mod game;
pub mod geometry;
pub mod movegen;
pub mod rules;
mod types;

pub use board::{Board, FenParseError};
pub use game::GameState;
pub use geometry::CoordVec;
pub use types::{Color, Coord, Move, Piece, PieceKind, TableIndex, COLORS};
