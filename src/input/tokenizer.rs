use super::command::Command;
use crate::error::{CalcError, Result};

/// Turn a full input line into commands.
///
/// The line is accepted only if every character is a known button; otherwise
/// the first offending character is reported and nothing is returned.
pub fn tokenize(line: &str) -> Result<Vec<Command>> {
    line.chars()
        .enumerate()
        .map(|(position, character)| {
            Command::classify(character).ok_or(CalcError::InvalidInput {
                character,
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CommandKind;
    use crate::memory::Operator;

    #[test]
    fn test_valid_line() {
        let commands = tokenize("12+3=").unwrap();
        let kinds: Vec<_> = commands.iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            [
                CommandKind::Digit,
                CommandKind::Digit,
                CommandKind::Operator(Operator::Add),
                CommandKind::Digit,
                CommandKind::Equals,
            ]
        );
        assert_eq!(commands[1].token(), '2');
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(tokenize(""), Ok(vec![]));
    }

    #[test]
    fn test_first_invalid_character_is_reported() {
        assert_eq!(
            tokenize("5&3#"),
            Err(CalcError::InvalidInput {
                character: '&',
                position: 1,
            })
        );
    }

    #[test]
    fn test_whitespace_is_rejected() {
        assert!(tokenize("1 + 2").is_err());
        assert!(tokenize("3\t").is_err());
    }

    #[test]
    fn test_position_counts_characters() {
        assert_eq!(
            tokenize("µ"),
            Err(CalcError::InvalidInput {
                character: 'µ',
                position: 0,
            })
        );
        assert_eq!(
            tokenize("12µ"),
            Err(CalcError::InvalidInput {
                character: 'µ',
                position: 2,
            })
        );
    }
}
