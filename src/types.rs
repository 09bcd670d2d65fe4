// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{FromPrimitive, ToPrimitive};
use std::convert::TryFrom;
use std::fmt::{self, Display, Write};

// TableIndex is a trait for all types that can serve as an index into a table.
// It is common to use these types as indices into tables, so this trait allows
// any type implementing To and FromPrimitive to be used as table indices.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_usize().unwrap()
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_usize(idx).unwrap()
    }
}

/// A board coordinate. Rank 0 is White's back rank and rank 7 is Black's;
/// rank increases "forward" for White. Both components are signed so that
/// raw geometry can wander off the board before being bounds-filtered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Coord {
    pub rank: i8,
    pub file: i8,
}

impl Coord {
    pub const fn new(rank: i8, file: i8) -> Coord {
        Coord { rank, file }
    }

    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Coord {
        Coord::new(self.rank + rank_delta, self.file + file_delta)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Off-board coordinates have no algebraic name; render them raw.
        if self.rank < 0 || self.rank >= 8 || self.file < 0 || self.file >= 8 {
            return write!(f, "({}, {})", self.rank, self.file);
        }
        f.write_char((b'a' + self.file as u8) as char)?;
        f.write_char((b'1' + self.rank as u8) as char)
    }
}

impl TryFrom<&str> for Coord {
    type Error = ();

    fn try_from(value: &str) -> Result<Coord, ()> {
        let mut chars = value.chars();
        let file = match chars.next() {
            Some(c @ 'a'..='h') => c as i8 - 'a' as i8,
            _ => return Err(()),
        };
        let rank = match chars.next() {
            Some(c @ '1'..='8') => c as i8 - '1' as i8,
            _ => return Err(()),
        };
        if chars.next().is_some() {
            return Err(());
        }
        Ok(Coord::new(rank, file))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive, Serialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The rank direction this color's pawns advance in.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The rank this color's pawns start on, from which the double step is
    /// available.
    pub fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            Color::White => 'w',
            Color::Black => 'b',
        };
        f.write_char(chr)
    }
}

pub static COLORS: [Color; 2] = [Color::White, Color::Black];

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive, Serialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        f.write_char(chr)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Sliding pieces are the ones whose path between origin and destination
    /// must be unobstructed. Pawns and knights have their own rules; kings
    /// move a single step so there is no path to obstruct.
    pub fn is_sliding(&self) -> bool {
        match self.kind {
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => true,
            _ => false,
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(()),
        };
        Ok(Piece::new(kind, color))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => f.write_char(chr.to_ascii_uppercase()),
            Color::Black => f.write_char(chr),
        }
    }
}

/// A move is a pure origin/destination descriptor. It carries no piece
/// identity; the piece is looked up from the board at validation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(from: Coord, to: Coord) -> Move {
        Move { from, to }
    }

    /// Parses a move in UCI coordinate notation, e.g. `c2c4`.
    pub fn from_uci<S: AsRef<str>>(s: S) -> Option<Move> {
        let s = s.as_ref();
        if s.len() != 4 {
            return None;
        }
        let from = Coord::try_from(s.get(..2)?).ok()?;
        let to = Coord::try_from(s.get(2..)?).ok()?;
        Some(Move::new(from, to))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
