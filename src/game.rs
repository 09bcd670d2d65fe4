// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::board::{Board, FenParseError};
use crate::movegen;
use crate::rules;
use crate::types::{Color, Coord, Move};

/// A game in progress: one board plus the append-only log of applied moves.
///
/// The state itself does not track whose turn it is; every operation takes
/// the acting color explicitly, and [`GameState::side_to_move`] derives the
/// turn from history parity for callers that want it. A `GameState` is meant
/// to be exclusively owned by one game session.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    history: Vec<Move>,
}

impl GameState {
    /// A fresh game from the standard starting position.
    pub fn new() -> GameState {
        GameState::from_board(Board::standard())
    }

    /// A game starting from an arbitrary board, with empty history.
    pub fn from_board(board: Board) -> GameState {
        GameState {
            board,
            history: Vec::new(),
        }
    }

    pub fn from_fen<S: AsRef<str>>(fen: S) -> Result<GameState, FenParseError> {
        Ok(GameState::from_board(Board::from_fen(fen)?))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// White moves first, so an even history length means White is to move.
    pub fn side_to_move(&self) -> Color {
        if self.history.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Validates and applies a move for the acting color. Returns `false`
    /// without touching the board when the move is illegal or the origin
    /// does not hold one of `color`'s pieces; on success the board is
    /// rewritten and the move appended to the history.
    pub fn attempt_move(&mut self, mov: Move, color: Color) -> bool {
        if !rules::is_move_legal(&self.board, mov, false) {
            debug!("rejected move {} for {}", mov, color);
            return false;
        }
        let mover = self
            .board
            .piece_at(mov.from)
            .expect("legal move with an empty origin");
        if mover.color != color {
            debug!("rejected move {}: piece at {} is not {}'s", mov, mov.from, color);
            return false;
        }
        self.board.apply(mov);
        self.history.push(mov);
        info!("applied move {} for {}", mov, color);
        true
    }

    /// Scans the acting color's pieces for any legal move. A `false` answer
    /// signals the checkmate-or-stalemate boundary; distinguishing the two
    /// is the caller's business (check the king's square).
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        for rank in 0..8 {
            for file in 0..8 {
                let origin = Coord::new(rank, file);
                let piece = match self.board.piece_at(origin) {
                    Some(piece) if piece.color == color => piece,
                    _ => continue,
                };
                for &destination in
                    movegen::candidate_destinations_on_board(piece.kind, origin, color).iter()
                {
                    if rules::is_move_legal(&self.board, Move::new(origin, destination), false) {
                        return true;
                    }
                }
            }
        }
        debug!("{} has no legal moves", color);
        false
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}
