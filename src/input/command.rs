//! Calculator buttons and the commands they produce.

use crate::memory::Operator;
use std::fmt;

/// What a button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Digit,
    DecimalPoint,
    Operator(Operator),
    Equals,
    Negate,
    Percent,
    Clear,
}

impl CommandKind {
    /// Get the button kind for a character, if one exists.
    ///
    /// The character classes are disjoint, so order does not matter.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit),
            '.' => Some(Self::DecimalPoint),
            '=' => Some(Self::Equals),
            '!' => Some(Self::Negate),
            '%' => Some(Self::Percent),
            'c' => Some(Self::Clear),
            _ => Operator::from_symbol(c).map(Self::Operator),
        }
    }

    /// Name used in debug output; operators report their own name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Digit => "Digit",
            Self::DecimalPoint => "DecimalPoint",
            Self::Operator(operator) => operator.name(),
            Self::Equals => "Equals",
            Self::Negate => "Negate",
            Self::Percent => "Percent",
            Self::Clear => "Clear",
        }
    }
}

/// A single button press: its kind plus the character that produced it.
///
/// The character only matters for digits and the decimal point, which are
/// appended to the display verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    kind: CommandKind,
    token: char,
}

impl Command {
    /// Classify a character, returning `None` for unknown buttons.
    pub fn classify(token: char) -> Option<Self> {
        CommandKind::from_char(token).map(|kind| Self { kind, token })
    }

    /// What the button does.
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// The character that was typed.
    pub fn token(&self) -> char {
        self.token
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.name(), self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(c: char) -> Option<CommandKind> {
        Command::classify(c).map(|cmd| cmd.kind())
    }

    #[test]
    fn test_digits() {
        for c in '0'..='9' {
            let cmd = Command::classify(c).unwrap();
            assert_eq!(cmd.kind(), CommandKind::Digit);
            assert_eq!(cmd.token(), c);
        }
    }

    #[test]
    fn test_buttons() {
        assert_eq!(kind('.'), Some(CommandKind::DecimalPoint));
        assert_eq!(kind('+'), Some(CommandKind::Operator(Operator::Add)));
        assert_eq!(kind('-'), Some(CommandKind::Operator(Operator::Subtract)));
        assert_eq!(kind('*'), Some(CommandKind::Operator(Operator::Multiply)));
        assert_eq!(kind('/'), Some(CommandKind::Operator(Operator::Divide)));
        assert_eq!(kind('='), Some(CommandKind::Equals));
        assert_eq!(kind('!'), Some(CommandKind::Negate));
        assert_eq!(kind('%'), Some(CommandKind::Percent));
        assert_eq!(kind('c'), Some(CommandKind::Clear));
    }

    #[test]
    fn test_unknown_characters() {
        for c in ['&', 'C', 'x', ' ', '(', '^', '٣', 'µ'] {
            assert_eq!(Command::classify(c), None, "{c:?} should be rejected");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::classify('7').unwrap().to_string(), "Digit(7)");
        assert_eq!(Command::classify('/').unwrap().to_string(), "Divide(/)");
        assert_eq!(Command::classify('c').unwrap().to_string(), "Clear(c)");
    }
}
