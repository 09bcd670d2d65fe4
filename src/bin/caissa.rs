// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;

use std::convert::TryFrom;
use std::process;

use caissa::{eval, movegen, Board, Coord, GameState, Move};
use clap::{App, Arg, ArgMatches, SubCommand};

fn main() {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .subcommand(
            SubCommand::with_name("evaluate")
                .about("Evaluate the material balance of a board position")
                .arg(
                    Arg::with_name("FEN")
                        .help("FEN string for a board position")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            SubCommand::with_name("moves")
                .about("List candidate destination squares for the piece on a square")
                .arg(
                    Arg::with_name("FEN")
                        .help("FEN string for a board position")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("SQUARE")
                        .help("Square in algebraic notation, e.g. c2")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            SubCommand::with_name("play")
                .about("Play a sequence of moves from the starting position")
                .arg(
                    Arg::with_name("MOVES")
                        .help("Moves in coordinate notation, e.g. c2c4 b7b5")
                        .required(true)
                        .multiple(true),
                )
                .arg(
                    Arg::with_name("json")
                        .help("Dump the move log as JSON when done")
                        .long("--json"),
                ),
        )
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("evaluate") {
        run_evaluate(matches);
    }

    if let Some(matches) = matches.subcommand_matches("moves") {
        run_moves(matches);
    }

    if let Some(matches) = matches.subcommand_matches("play") {
        run_play(matches);
    }
}

fn parse_board(matches: &ArgMatches) -> Board {
    let fen = matches.value_of("FEN").unwrap();
    match Board::from_fen(fen) {
        Ok(board) => board,
        Err(err) => {
            println!("invalid fen: {:?}", err);
            process::exit(1);
        }
    }
}

fn run_evaluate(matches: &ArgMatches) -> ! {
    let state = GameState::from_board(parse_board(matches));
    println!("{}", state.board());
    println!();
    println!("evaluation: {}", eval::evaluate(&state));
    process::exit(0);
}

fn run_moves(matches: &ArgMatches) -> ! {
    let board = parse_board(matches);
    let square = match Coord::try_from(matches.value_of("SQUARE").unwrap()) {
        Ok(square) => square,
        Err(_) => {
            println!("invalid square!");
            process::exit(1);
        }
    };
    let piece = match board.piece_at(square) {
        Some(piece) => piece,
        None => {
            println!("no piece on {}", square);
            process::exit(1);
        }
    };

    for destination in movegen::candidate_destinations_on_board(piece.kind, square, piece.color) {
        println!("{}", destination);
    }
    process::exit(0);
}

fn run_play(matches: &ArgMatches) -> ! {
    let mut state = GameState::new();
    for text in matches.values_of("MOVES").unwrap() {
        let mov = match Move::from_uci(text) {
            Some(mov) => mov,
            None => {
                println!("malformed move: {}", text);
                process::exit(1);
            }
        };
        let color = state.side_to_move();
        if !state.attempt_move(mov, color) {
            println!("illegal move for {}: {}", color, mov);
            process::exit(1);
        }
    }

    println!("{}", state.board());
    println!();
    println!("evaluation: {}", eval::evaluate(&state));
    let to_move = state.side_to_move();
    if !state.has_any_legal_move(to_move) {
        println!("{} has no legal moves", to_move);
    }
    if matches.is_present("json") {
        println!(
            "{}",
            serde_json::to_string(state.history()).expect("move log serializes")
        );
    }
    process::exit(0);
}
