//! The calculator memory: on-screen number plus up to two deferred operations.
//!
//! Only three numbers ever live in memory at once: the number on screen, the
//! operand waiting on the most recent operator, and a running total waiting on
//! an older operator of lower precedence.

use super::number::{parse_display, to_plain_string};
use super::operator::{Operator, Precedence};
use crate::error::{CalcError, Result};
use crate::input::{Command, CommandKind};
use bigdecimal::BigDecimal;
use std::fmt;

/// An operator waiting for its right-hand operand, with the left one captured.
#[derive(Clone, Debug, PartialEq)]
pub struct Deferred {
    pub operator: Operator,
    pub operand: BigDecimal,
}

impl fmt::Display for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", to_plain_string(&self.operand), self.operator)
    }
}

/// Calculator memory in the style of a simple desktop calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct Memory {
    /// Absolute value of the on-screen number, as typed.
    display_text: String,
    display_negated: bool,
    /// Next digit or point starts a new number instead of appending.
    reset_on_next_digit: bool,
    /// Most recent deferred operation.
    pending: Option<Deferred>,
    /// Older deferred operation, of lower precedence than `pending`.
    buffered: Option<Deferred>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Create memory in the all-clear state.
    pub fn new() -> Self {
        Self {
            display_text: "0".to_string(),
            display_negated: false,
            reset_on_next_digit: false,
            pending: None,
            buffered: None,
        }
    }

    /// Reset to the all-clear state.
    pub fn all_clear(&mut self) {
        *self = Self::new();
    }

    /// Get the absolute on-screen text, including a trailing point.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Check if the on-screen number is negative.
    pub fn is_negated(&self) -> bool {
        self.display_negated
    }

    /// Check if the next digit or point starts a new number.
    pub fn resets_on_next_digit(&self) -> bool {
        self.reset_on_next_digit
    }

    /// Get the most recent deferred operation.
    pub fn pending(&self) -> Option<&Deferred> {
        self.pending.as_ref()
    }

    /// Get the older deferred operation, if two are outstanding.
    pub fn buffered(&self) -> Option<&Deferred> {
        self.buffered.as_ref()
    }

    /// The on-screen number as a decimal value.
    pub fn current_number(&self) -> Result<BigDecimal> {
        parse_display(&self.display_text, self.display_negated)
    }

    /// The on-screen number rendered as plain decimal text.
    pub fn display_value(&self) -> Result<String> {
        Ok(to_plain_string(&self.current_number()?))
    }

    /// Execute a single command against memory.
    pub fn apply(&mut self, command: &Command) -> Result<()> {
        match command.kind() {
            CommandKind::Digit => self.append_digit(command.token()),
            CommandKind::DecimalPoint => self.append_decimal_point(),
            CommandKind::Negate => self.negate(),
            CommandKind::Percent => self.percent()?,
            CommandKind::Operator(operator) => self.enter_operator(operator)?,
            CommandKind::Equals => self.resolve_all()?,
            CommandKind::Clear => self.all_clear(),
        }
        Ok(())
    }

    fn prime_for_entry(&mut self) {
        if self.reset_on_next_digit {
            self.reset_on_next_digit = false;
            self.display_text = "0".to_string();
            self.display_negated = false;
        }
    }

    fn append_digit(&mut self, digit: char) {
        self.prime_for_entry();

        if self.display_text == "0" {
            if digit != '0' {
                self.display_text = digit.to_string();
            }
        } else {
            self.display_text.push(digit);
        }
    }

    fn append_decimal_point(&mut self) {
        // Checked against the text on screen, even when the next entry
        // would start a fresh number.
        if self.display_text.contains('.') {
            return;
        }
        self.prime_for_entry();
        self.display_text.push('.');
    }

    fn negate(&mut self) {
        // Right after an operator the negation belongs to the next operand,
        // so 1+!5 is 1 + (-5).
        if self.reset_on_next_digit {
            self.display_text = "0".to_string();
            self.display_negated = true;
            self.reset_on_next_digit = false;
        } else {
            self.display_negated = !self.display_negated;
        }
    }

    fn percent(&mut self) -> Result<()> {
        let value = Operator::Divide.apply(&self.current_number()?, &BigDecimal::from(100))?;
        self.set_display(&value);
        Ok(())
    }

    fn enter_operator(&mut self, operator: Operator) -> Result<()> {
        match operator.precedence() {
            Precedence::High => {
                if self.pending_precedence() == Some(Precedence::High) {
                    self.resolve_pending()?;
                }
            }
            Precedence::Low => self.resolve_all()?,
        }
        self.defer(operator)
    }

    fn pending_precedence(&self) -> Option<Precedence> {
        self.pending.as_ref().map(|d| d.operator.precedence())
    }

    /// Push `operator` and the on-screen number into the pending slot.
    fn defer(&mut self, operator: Operator) -> Result<()> {
        if let Some(buffered) = &self.buffered {
            return Err(CalcError::BufferOccupied(buffered.operator));
        }

        let operand = self.current_number()?;
        tracing::trace!(%operator, operand = %to_plain_string(&operand), "deferring operator");

        self.buffered = self.pending.take();
        self.pending = Some(Deferred { operator, operand });
        self.reset_on_next_digit = true;
        Ok(())
    }

    fn resolve_all(&mut self) -> Result<()> {
        while self.pending.is_some() {
            self.resolve_pending()?;
        }
        Ok(())
    }

    /// Apply the pending operator to its operand and the on-screen number.
    ///
    /// On error memory is left untouched.
    fn resolve_pending(&mut self) -> Result<()> {
        let Some(pending) = &self.pending else {
            return Err(CalcError::NoPendingOperator);
        };

        let second = self.current_number()?;
        let result = pending.operator.apply(&pending.operand, &second)?;
        tracing::debug!(
            first = %to_plain_string(&pending.operand),
            operator = %pending.operator,
            second = %to_plain_string(&second),
            result = %to_plain_string(&result),
            "resolved pending operator"
        );

        self.set_display(&result);
        self.pending = self.buffered.take();
        Ok(())
    }

    /// Write a computed value back onto the display.
    fn set_display(&mut self, value: &BigDecimal) {
        let text = to_plain_string(value);
        match text.strip_prefix('-') {
            Some(abs) => {
                self.display_text = abs.to_string();
                self.display_negated = true;
            }
            None => {
                self.display_text = text;
                self.display_negated = false;
            }
        }
    }
}

impl fmt::Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.display_negated { "-" } else { "" };
        write!(
            f,
            "[display: {}{} | reset: {} | pending: ",
            sign, self.display_text, self.reset_on_next_digit
        )?;
        match &self.pending {
            Some(deferred) => write!(f, "{}", deferred)?,
            None => write!(f, "none")?,
        }
        write!(f, " | buffered: ")?;
        match &self.buffered {
            Some(deferred) => write!(f, "{}", deferred)?,
            None => write!(f, "none")?,
        }
        write!(f, "]")
    }
}
