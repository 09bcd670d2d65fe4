// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use caissa::rules;
use caissa::{Board, Color};

fn in_check(fen: &str, color: Color) -> bool {
    let board = Board::from_fen(fen).unwrap();
    let king = board.king(color).expect("fixture is missing a king");
    rules::is_king_attacked(&board, king)
}

#[test]
fn smoke_test_starting_position() {
    // white is not in check.
    assert!(!in_check(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        Color::White
    ));
}

#[test]
fn fools_mate_check() {
    // white is checkmated
    assert!(in_check(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR",
        Color::White
    ));
}

#[test]
fn sliding_piece_pin() {
    // white is not checked, the white pawn is blocking the queen
    assert!(!in_check("4k3/8/4q3/8/8/8/4P3/4K3", Color::White));
}

#[test]
fn rook_check_down_an_open_file() {
    assert!(in_check("4r1k1/8/8/8/8/8/8/4K3", Color::White));
    // A piece anywhere on the file shields the king.
    assert!(!in_check("4r1k1/8/8/4n3/8/8/8/4K3", Color::White));
}

#[test]
fn knight_check_jumps_blockers() {
    assert!(in_check("4k3/8/8/8/8/6n1/8/7K", Color::White));
}

#[test]
fn pawn_checks_diagonally() {
    assert!(in_check("4k3/8/8/8/8/8/6p1/7K", Color::White));
}

#[test]
fn pawn_ahead_of_the_king_is_not_check() {
    // A pawn straight ahead cannot capture, so it does not check.
    assert!(!in_check("4k3/8/8/8/8/8/7p/7K", Color::White));
}

#[test]
fn pawn_checks_respect_direction() {
    // A white pawn "behind" the black king attacks it; one in front does not.
    assert!(in_check("4k3/3P4/8/8/8/8/8/4K3", Color::Black));
    assert!(!in_check("4k3/4P3/8/8/8/8/8/4K3", Color::Black));
}

#[test]
fn adjacent_kings_attack_each_other() {
    let board = Board::from_fen("Kk6/8/8/8/8/8/8/8").unwrap();
    assert!(rules::is_king_attacked(
        &board,
        board.king(Color::White).unwrap()
    ));
    assert!(rules::is_king_attacked(
        &board,
        board.king(Color::Black).unwrap()
    ));
}

#[test]
fn pinned_pieces_still_deliver_check() {
    // The black knight on e5 checks the white king even though moving it
    // would expose its own king to the rook on e8.
    assert!(in_check("4k3/8/8/4n3/8/3K4/8/4R3", Color::White));
}

#[test]
#[should_panic(expected = "does not hold a king")]
fn check_probe_of_a_non_king_square_is_fatal() {
    let board = Board::standard();
    let _ = rules::is_king_attacked(&board, caissa::Coord::new(1, 2));
}
