//! Error type shared by the tokenizer, the memory and the session.

use crate::memory::Operator;
use thiserror::Error;

/// Result alias used throughout the calculator core.
pub type Result<T, E = CalcError> = std::result::Result<T, E>;

/// Everything that can go wrong while turning keypresses into a display value.
///
/// Errors caused by user input are recoverable: the session reports them and
/// keeps going. The remaining variants mean the precedence protocol itself was
/// broken and end the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The line contained a character with no matching button.
    #[error("invalid button {character:?} at position {position}")]
    InvalidInput { character: char, position: usize },

    /// A pending division had a zero right-hand operand.
    #[error("division by zero")]
    DivisionByZero,

    /// A third operator was deferred while two were already outstanding.
    #[error("cannot defer another operator: {0} is already buffered")]
    BufferOccupied(Operator),

    /// Resolve was requested with nothing pending.
    #[error("no pending operator to resolve")]
    NoPendingOperator,

    /// The display text no longer parses as a decimal number.
    #[error("display text {0:?} is not a valid number")]
    MalformedDisplay(String),
}

impl CalcError {
    /// Check if this error signals a defect rather than bad input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::BufferOccupied(_) | Self::NoPendingOperator | Self::MalformedDisplay(_)
        )
    }
}
