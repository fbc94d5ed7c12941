use std::env;

use rand::prelude::*;

use chess_rules::{Color, Game};

const DEFAULT_MAX_PLIES: usize = 1000;

fn main() {
    let args: Vec<String> = env::args().collect();
    let seed = match args.get(1).map(|s| s.parse::<u64>()) {
        None => rand::random(),
        Some(Ok(seed)) => seed,
        Some(Err(_)) => {
            eprintln!("usage: random_game [seed] [max_plies]");
            return;
        }
    };
    let max_plies = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_PLIES);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    let mut plies = 0;

    while plies < max_plies && !game.result().is_terminal() {
        let moves = game.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        let mover = game.active_color();
        match game.play(mv) {
            Ok(report) => {
                plies += 1;
                let check = if report.gives_check { "+" } else { "" };
                println!("{plies:>4}. {mover}: {}{check}", report.mv);
            }
            Err(err) => {
                eprintln!("engine rejected its own move {mv}: {err}");
                return;
            }
        }
    }

    println!("{}", game.board());
    println!("seed: {seed}");
    println!("plies: {plies}");
    println!("result: {}", game.result());
    println!("captured: {}", game.roster().total());
    for color in Color::BOTH {
        println!("{color} lost: {:?}", game.captured(color));
    }
}
