// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use caissa::rules;
use caissa::{Color, GameState};

#[test]
fn both_sides_are_mobile_at_the_start() {
    let state = GameState::new();
    assert!(state.has_any_legal_move(Color::White));
    assert!(state.has_any_legal_move(Color::Black));
}

#[test]
fn lone_kings_are_mobile() {
    let state = GameState::from_fen("k7/8/8/8/8/8/8/7K").unwrap();
    assert!(state.has_any_legal_move(Color::White));
    assert!(state.has_any_legal_move(Color::Black));
}

#[test]
fn fools_mate_leaves_white_without_moves() {
    let state =
        GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR").unwrap();

    // No legal move, and the king is attacked: checkmate.
    assert!(!state.has_any_legal_move(Color::White));
    let king = state.board().king(Color::White).unwrap();
    assert!(rules::is_king_attacked(state.board(), king));

    // Black, naturally, is fine.
    assert!(state.has_any_legal_move(Color::Black));
}

#[test]
fn cornered_king_without_check_is_stalemate() {
    let state = GameState::from_fen("k7/8/1Q6/8/8/8/8/7K").unwrap();

    // No legal move, but the king is not attacked: stalemate.
    assert!(!state.has_any_legal_move(Color::Black));
    let king = state.board().king(Color::Black).unwrap();
    assert!(!rules::is_king_attacked(state.board(), king));

    assert!(state.has_any_legal_move(Color::White));
}

#[test]
fn a_block_or_capture_keeps_the_game_going() {
    // Checked king, but the queen can interpose on e2.
    let state = GameState::from_fen("3k4/8/8/8/4r3/8/3Q4/4K1N1").unwrap();
    assert!(state.has_any_legal_move(Color::White));
}
