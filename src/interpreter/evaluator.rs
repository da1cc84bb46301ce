use crate::{
    ast::{Expression, Operator},
    error::{Error, RuntimeError},
    util::num::parse_prefix,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, Error>;

/// Adds two numbers.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtracts `b` from `a`.
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiplies two numbers.
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// A zero divisor yields `0.0` instead of an infinity or NaN. [`evaluate`]
/// never reaches this case since it reports division by zero first.
///
/// # Example
/// ```
/// use columna::interpreter::evaluator::divide;
///
/// assert_eq!(divide(7.0, 2.0), 3.5);
/// assert_eq!(divide(7.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 { 0.0 } else { a / b }
}

impl Operator {
    /// Returns the arithmetic function this operator dispatches to.
    ///
    /// # Example
    /// ```
    /// use columna::ast::Operator;
    ///
    /// let multiply = Operator::Mul.function();
    /// assert_eq!(multiply(6.0, 7.0), 42.0);
    /// ```
    #[must_use]
    pub fn function(self) -> fn(f64, f64) -> f64 {
        match self {
            Self::Add => add,
            Self::Sub => subtract,
            Self::Mul => multiply,
            Self::Div => divide,
        }
    }
}

/// Computes the value of an expression.
///
/// The operator character is resolved first, then both operands are parsed
/// leniently: only their leading numeric prefix counts, so `12x` is `12`.
///
/// # Errors
/// - [`InputError::UnsupportedOperator`] if the operator is not `+ - * /`.
/// - [`RuntimeError::DivisionByZero`] for a division whose divisor parses to
///   zero.
///
/// # Example
/// ```
/// use columna::{ast::Expression, interpreter::evaluator::evaluate};
///
/// let expression = Expression { left:     "7".to_string(),
///                               operator: '/',
///                               right:    "2".to_string(), };
/// assert_eq!(evaluate(&expression).unwrap(), 3.5);
/// ```
///
/// [`InputError::UnsupportedOperator`]: crate::error::InputError::UnsupportedOperator
pub fn evaluate(expression: &Expression) -> EvalResult<f64> {
    let operator = match Operator::try_from(expression.operator) {
        Ok(operator) => operator,
        Err(e) => {
            log::info!("unsupported operator {:?}", expression.operator);
            return Err(e.into());
        },
    };

    let left = parse_prefix(&expression.left);
    let right = parse_prefix(&expression.right);
    log::debug!("operands parsed as {left} {operator} {right}");

    if operator == Operator::Div && right == 0.0 {
        log::info!("division of {left} by zero");
        return Err(RuntimeError::DivisionByZero.into());
    }

    Ok(operator.function()(left, right))
}
