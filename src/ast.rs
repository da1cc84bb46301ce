use crate::error::InputError;

/// Represents one of the four supported arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Every character recognized as an operator, in dispatch order.
pub const OPERATOR_SYMBOLS: [char; 4] = ['+', '-', '*', '/'];

impl Operator {
    /// Returns the character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = InputError;

    /// Maps an operator character onto its variant.
    ///
    /// # Example
    /// ```
    /// use columna::{ast::Operator, error::InputError};
    ///
    /// assert_eq!(Operator::try_from('*').unwrap(), Operator::Mul);
    /// assert!(matches!(Operator::try_from('&'),
    ///                  Err(InputError::UnsupportedOperator { operator: '&' })));
    /// ```
    fn try_from(operator: char) -> Result<Self, Self::Error> {
        match operator {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            _ => Err(InputError::UnsupportedOperator { operator }),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A validated two-operand expression.
///
/// Both operands have had their spaces and tabs removed and start with a
/// decimal digit. The operator is kept as the raw character found in the
/// line; it is only resolved to an [`Operator`] at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// Left operand text.
    pub left:     String,
    /// Operator character.
    pub operator: char,
    /// Right operand text.
    pub right:    String,
}

/// The bottom line of a worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A computed result, already rendered as text.
    Value(String),
    /// The result of a division by zero.
    Undefined,
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(text) => f.pad(text),
            Self::Undefined => f.pad("UNDEFINED"),
        }
    }
}

/// Everything needed to draw the column diagram of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    /// The operation that was computed.
    pub expression: Expression,
    /// Its result.
    pub answer:     Answer,
}

impl Worksheet {
    /// Whether the worksheet carries a computed value, as opposed to
    /// `UNDEFINED`.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        matches!(self.answer, Answer::Value(_))
    }
}
