//! Parsing of one line of player input.

use std::str::FromStr;

use super::MoveError;
use crate::board::Square;

/// One turn's worth of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move the piece on `from` to `to`
    Move { from: Square, to: Square },
    /// Propose a draw to the opponent
    OfferDraw,
    Resign,
}

fn is_coordinate_char(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a'..='h' | '1'..='8')
}

impl FromStr for Command {
    type Err = MoveError;

    /// Accepts `"e2 e4"` (any case), `"draw"` or `"resign"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.eq_ignore_ascii_case("draw") {
            return Ok(Command::OfferDraw);
        }
        if input.eq_ignore_ascii_case("resign") {
            return Ok(Command::Resign);
        }

        let syntax_error = || MoveError::InvalidSyntax {
            input: input.to_string(),
        };
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let compact: String = tokens.concat();
        if tokens.len() != 2
            || compact.chars().count() != 4
            || !compact.chars().all(is_coordinate_char)
        {
            return Err(syntax_error());
        }

        let from: Square = tokens[0].parse()?;
        let to: Square = tokens[1].parse()?;
        Ok(Command::Move { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_any_case() {
        let expected = Command::Move {
            from: Square(1, 4),
            to: Square(3, 4),
        };
        assert_eq!("e2 e4".parse::<Command>(), Ok(expected));
        assert_eq!("E2 E4".parse::<Command>(), Ok(expected));
        assert_eq!("  e2   e4 ".parse::<Command>(), Ok(expected));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("draw".parse::<Command>(), Ok(Command::OfferDraw));
        assert_eq!("DRAW".parse::<Command>(), Ok(Command::OfferDraw));
        assert_eq!("Resign".parse::<Command>(), Ok(Command::Resign));
    }

    #[test]
    fn test_syntax_errors() {
        for input in ["", "e2", "e2 e4 e5", "e2e4", "e2 e9", "z2 e4", "e2-e4", "e22 e4", "hello"] {
            assert!(
                matches!(
                    input.parse::<Command>(),
                    Err(MoveError::InvalidSyntax { .. })
                ),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_misordered_coordinates_are_off_board() {
        assert!(matches!(
            "2e 4e".parse::<Command>(),
            Err(MoveError::OutOfBoard { .. })
        ));
        assert!(matches!(
            "ee 44".parse::<Command>(),
            Err(MoveError::OutOfBoard { .. })
        ));
    }
}
