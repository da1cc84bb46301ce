use crate::{
    ast::{Answer, Worksheet},
    error::RuntimeError,
};

/// Significant digits used by [`NumberStyle::Decimal`].
pub const DECIMAL_PRECISION: usize = 10;

/// How a numeric result is turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberStyle {
    /// Truncate toward zero and print an integer: `3.9` becomes `3`.
    #[default]
    Truncated,
    /// Print up to ten significant digits, switching to exponent notation
    /// for very large or very small magnitudes.
    Decimal,
}

/// Converts a numeric result to its decimal string.
///
/// # Errors
/// Returns [`RuntimeError::FormatFailure`] if `value` is infinite or NaN.
///
/// # Example
/// ```
/// use columna::interpreter::formatter::{NumberStyle, to_decimal_string};
///
/// assert_eq!(to_decimal_string(3.5, NumberStyle::Truncated).unwrap(), "3");
/// assert_eq!(to_decimal_string(-3.5, NumberStyle::Truncated).unwrap(), "-3");
/// assert_eq!(to_decimal_string(3.5, NumberStyle::Decimal).unwrap(), "3.5");
/// assert_eq!(to_decimal_string(1.0 / 3.0, NumberStyle::Decimal).unwrap(), "0.3333333333");
/// assert!(to_decimal_string(f64::INFINITY, NumberStyle::Truncated).is_err());
/// ```
pub fn to_decimal_string(value: f64, style: NumberStyle) -> Result<String, RuntimeError> {
    if !value.is_finite() {
        return Err(RuntimeError::FormatFailure { value });
    }

    Ok(match style {
           NumberStyle::Truncated => {
               let truncated = value.trunc();
               if truncated == 0.0 {
                   // Avoids printing `-0` for results in (-1, 0).
                   "0".to_string()
               } else {
                   format!("{truncated:.0}")
               }
           },
           NumberStyle::Decimal => general(value, DECIMAL_PRECISION),
       })
}

/// Formats `value` with `precision` significant digits the way `%g` does.
///
/// Exponent notation (`1.5e+20`) is used when the decimal exponent is below
/// -4 or at least `precision`; trailing zeros are removed in both notations.
fn general(value: f64, precision: usize) -> String {
    if value == 0.0 {
        let zero = if value.is_sign_negative() { "-0" } else { "0" };
        return zero.to_string();
    }

    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let limit = i32::try_from(precision).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Returns the width of the diagram columns.
///
/// The width fits the first operand, the second operand preceded by the
/// operator and a space, and the result. Lengths are counted in characters.
///
/// # Example
/// ```
/// use columna::interpreter::formatter::column_width;
///
/// assert_eq!(column_width("1", "2", "3"), 3);
/// assert_eq!(column_width("12345", "2", "12347"), 5);
/// assert_eq!(column_width("10", "0", "UNDEFINED"), 9);
/// ```
#[must_use]
pub fn column_width(left: &str, right: &str, result: &str) -> usize {
    let left = left.chars().count();
    let right = right.chars().count() + 2;
    let result = result.chars().count();

    left.max(right).max(result)
}

/// Draws a worksheet as four right-aligned lines, each ending in a newline.
///
/// ```text
///  12
/// + 7
/// ---
///  19
/// ```
///
/// # Example
/// ```
/// use columna::{
///     ast::{Answer, Expression, Worksheet},
///     interpreter::formatter::render,
/// };
///
/// let worksheet = Worksheet { expression: Expression { left:     "12".to_string(),
///                                                      operator: '+',
///                                                      right:    "7".to_string(), },
///                             answer:     Answer::Value("19".to_string()), };
///
/// assert_eq!(render(&worksheet), " 12\n+ 7\n---\n 19\n");
/// ```
#[must_use]
pub fn render(worksheet: &Worksheet) -> String {
    let expression = &worksheet.expression;
    let result = worksheet.answer.to_string();
    let width = column_width(&expression.left, &expression.right, &result);

    format!("{:>width$}\n{}{:>inner$}\n{}\n{:>width$}\n",
            expression.left,
            expression.operator,
            expression.right,
            "-".repeat(width),
            worksheet.answer,
            inner = width - 1)
}

impl Answer {
    /// Builds the answer for a computed value, rendered in `style`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::FormatFailure`] if the value cannot be
    /// rendered.
    pub fn from_value(value: f64, style: NumberStyle) -> Result<Self, RuntimeError> {
        to_decimal_string(value, style).map(Self::Value)
    }
}
