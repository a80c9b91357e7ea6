use std::io::{self, BufRead, Write};

use chrono::{DateTime, Local};
use env_logger::Env;
use log::{info, warn};

use tap_chess::game_state::game_state::{Game, GameEvent, GameSnapshot, GameState};
use tap_chess::move_generation::legal_move_generator::DestinationKind;

const HELP: &str = "commands: <row> <col> | board | restart | help | quit";

fn main() {
    let env = Env::default().filter_or("TAP_CHESS_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let show_hints = std::env::var_os("TAP_CHESS_NO_HINTS").is_none();
    let mut game = Game::new();
    let mut started_at = Local::now();
    info!("session started {}", started_at.format("%Y-%m-%d %H:%M:%S"));

    println!("{HELP}");
    print!("{}", game.board());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["help"] => println!("{HELP}"),
            ["board"] => print!("{}", game.board()),
            ["restart"] => {
                game.restart();
                started_at = Local::now();
                print!("{}", game.board());
            }
            [row, col] => match (row.parse::<i64>(), col.parse::<i64>()) {
                (Ok(row), Ok(col)) => match game.select_or_move_at(row, col) {
                    Ok(snapshot) => report(&game, &snapshot, show_hints, started_at),
                    Err(e) => println!("{e}"),
                },
                _ => println!("{HELP}"),
            },
            _ => {
                warn!("unrecognised input {line:?}");
                println!("{HELP}");
            }
        }
        stdout.flush().ok();
    }
}

fn report(game: &Game, snapshot: &GameSnapshot, show_hints: bool, started_at: DateTime<Local>) {
    for event in &snapshot.events {
        match event {
            GameEvent::Moved { from, to, captured } => {
                print!("{}", game.board());
                match captured {
                    Some(piece) => println!(
                        "{from} -> {to}, takes {}",
                        piece.kind().symbol(piece.color())
                    ),
                    None => println!("{from} -> {to}"),
                }
            }
            GameEvent::Check { color, .. } => println!("{color} is in check"),
            GameEvent::Checkmate { winner } => {
                let ended_at = Local::now();
                let minutes = (ended_at - started_at).num_minutes();
                println!(
                    "{winner} wins by checkmate at {} after {minutes} min; type `restart`",
                    ended_at.format("%H:%M:%S")
                );
            }
            GameEvent::NoLegalMoves { color } => {
                println!("{color} has no legal moves; type `restart`")
            }
            GameEvent::Rejected { target } => println!("cannot move there: {target}"),
        }
    }

    if let GameState::PieceSelected(_) = snapshot.state {
        if show_hints {
            let hints: Vec<String> = snapshot
                .highlights
                .iter()
                .map(|d| match d.kind {
                    DestinationKind::Quiet => format!("{}", d.square),
                    DestinationKind::Capture => format!("x{}", d.square),
                })
                .collect();
            println!("{} to move, options: {}", snapshot.current_player, hints.join(" "));
        }
    } else if !snapshot.is_checkmate() {
        println!("{} to move", snapshot.current_player);
    }
}
