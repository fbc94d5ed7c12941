use std::io::{self, BufRead, Write};

use chess_rules::{Color, Command, Game, Piece, Square};

type Input<'a> = dyn Iterator<Item = io::Result<String>> + 'a;

fn read_line(input: &mut Input<'_>, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    input.next().transpose()
}

/// Ask until one of q, r, b or n is entered. Falls back to a queen when
/// input runs out.
fn ask_promotion(input: &mut Input<'_>, color: Color, square: Square) -> Piece {
    let text = format!(
        "{color}'s pawn reached {square}! Promote to (q)ueen, (r)ook, (b)ishop or k(n)ight? "
    );
    loop {
        let Ok(Some(line)) = read_line(input, &text) else {
            return Piece::Queen;
        };
        let mut chars = line.trim().chars();
        match (chars.next().and_then(Piece::from_char), chars.next()) {
            (Some(piece), None) if piece.is_promotion_choice() => {
                println!("Your pawn has been promoted to a {piece}!");
                return piece;
            }
            _ => println!("Invalid input"),
        }
    }
}

fn ask_draw(input: &mut Input<'_>, color: Color) -> io::Result<bool> {
    loop {
        let text = format!("{color}, do you accept the draw offer (y / n)? ");
        match read_line(input, &text)? {
            None => return Ok(false),
            Some(line) => match line.trim().to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => println!("Invalid input"),
            },
        }
    }
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let input: &mut Input<'_> = &mut lines;

    let mut game = Game::new();
    println!("{}", game.board());

    while !game.result().is_terminal() {
        let text = format!(
            "{}, please enter your move (for example: \"g4 g5\"), \"draw\" or \"resign\": ",
            game.active_color()
        );
        let Some(line) = read_line(input, &text)? else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Move { from, to } => {
                let mut chooser =
                    |color: Color, square: Square| ask_promotion(&mut *input, color, square);
                match game.play_move(from, to, &mut chooser) {
                    Ok(report) => {
                        println!("{}", game.board());
                        if report.gives_check && !report.result.is_terminal() {
                            println!("Check!");
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
            Command::OfferDraw => {
                if let Err(err) = game.offer_draw() {
                    println!("{err}");
                    continue;
                }
                let accept = ask_draw(input, game.active_color().opponent())?;
                match game.respond_to_draw(accept) {
                    Ok(result) if result.is_terminal() => {}
                    Ok(_) => println!("Draw offer denied!"),
                    Err(err) => println!("{err}"),
                }
            }
            Command::Resign => {
                if let Err(err) = game.resign() {
                    println!("{err}");
                }
            }
        }
    }

    if game.result().is_terminal() {
        println!("{}", game.result());
    }
    Ok(())
}
