use crate::{
    ast::Expression,
    error::InputError,
    interpreter::lexer::{Token, tokenize},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, InputError>;

/// The raw pieces of an input line, before normalization and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// Everything before the operator (or the whole line if there is none).
    pub left:     &'a str,
    /// The operator character, if one was found.
    pub operator: Option<char>,
    /// The text run following the operator, if any.
    pub right:    Option<&'a str>,
}

/// Splits a line at its first operator.
///
/// The left operand is everything before the first `+`, `-`, `*` or `/`. The
/// right operand is the next run of non-operator text after it: operator
/// characters directly following the first one are skipped, and anything
/// after the right operand is ignored.
///
/// A line without any of the four operators is split at its first ASCII
/// punctuation character other than `.`, so that `5&2` is reported as an
/// unsupported operator rather than a missing one. A line with neither has
/// no operator and no right operand.
///
/// # Example
/// ```
/// use columna::interpreter::parser::{Split, split};
///
/// assert_eq!(split("12 + 7"),
///            Split { left: "12 ", operator: Some('+'), right: Some(" 7") });
/// assert_eq!(split("8*-2/4"),
///            Split { left: "8", operator: Some('*'), right: Some("2") });
/// assert_eq!(split("5&2"),
///            Split { left: "5", operator: Some('&'), right: Some("2") });
/// assert_eq!(split("5"),
///            Split { left: "5", operator: None, right: None });
/// ```
#[must_use]
pub fn split(line: &str) -> Split<'_> {
    let tokens = tokenize(line);

    let first_operator = tokens.iter()
                               .enumerate()
                               .find_map(|(i, (token, span))| {
                                   token.operator().map(|op| (i, op, span.start))
                               });

    if let Some((index, operator, start)) = first_operator {
        let right = tokens[index + 1..].iter()
                                       .find(|(token, _)| *token == Token::Text)
                                       .map(|(_, span)| &line[span.clone()]);

        return Split { left: &line[..start],
                       operator: Some(operator),
                       right };
    }

    match line.char_indices()
              .find(|&(_, c)| c.is_ascii_punctuation() && c != '.')
    {
        Some((start, operator)) => Split { left:     &line[..start],
                                           operator: Some(operator),
                                           right:    Some(&line[start + operator.len_utf8()..]), },
        None => Split { left:     line,
                        operator: None,
                        right:    None, },
    }
}

/// Removes every space and horizontal tab from `operand`.
///
/// All other characters are kept in their original order. Applying it twice
/// gives the same result as applying it once.
///
/// # Example
/// ```
/// use columna::interpreter::parser::remove_spaces;
///
/// assert_eq!(remove_spaces(" 1 2\t3 "), "123");
/// assert_eq!(remove_spaces(&remove_spaces("4 5")), "45");
/// ```
#[must_use]
pub fn remove_spaces(operand: &str) -> String {
    operand.chars().filter(|&c| c != ' ' && c != '\t').collect()
}

/// Whether a normalized operand is acceptable: non-empty and starting with an
/// ASCII decimal digit.
///
/// Only the first character is checked. `12x` is valid here; its numeric
/// value is whatever prefix parses.
#[must_use]
pub fn is_valid_operand(operand: &str) -> bool {
    operand.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Parses an input line into a validated [`Expression`].
///
/// Checks are made in this order:
/// 1. an operator must be present;
/// 2. both operands, once spaces and tabs are removed, must be digit-led.
///
/// Whether the operator is supported is left to the evaluator.
///
/// # Errors
/// - [`InputError::MissingOperator`] if the line contains no operator.
/// - [`InputError::InvalidOperand`] if an operand is missing, empty, or does
///   not start with a digit.
///
/// # Example
/// ```
/// use columna::{error::InputError, interpreter::parser::parse_expression};
///
/// let expression = parse_expression(" 1 0 / 3").unwrap();
/// assert_eq!(expression.left, "10");
/// assert_eq!(expression.operator, '/');
/// assert_eq!(expression.right, "3");
///
/// assert!(matches!(parse_expression("5"), Err(InputError::MissingOperator)));
/// assert!(matches!(parse_expression("abc+2"), Err(InputError::InvalidOperand { .. })));
/// ```
pub fn parse_expression(line: &str) -> ParseResult<Expression> {
    let pieces = split(line);
    log::debug!("split {line:?} into {pieces:?}");

    let Some(operator) = pieces.operator else {
        log::info!("no operator found in {line:?}");
        return Err(InputError::MissingOperator);
    };

    let left = validate_operand(Some(pieces.left))?;
    let right = validate_operand(pieces.right)?;

    Ok(Expression { left,
                    operator,
                    right })
}

fn validate_operand(operand: Option<&str>) -> ParseResult<String> {
    let normalized = operand.map(remove_spaces);

    match normalized {
        Some(text) if is_valid_operand(&text) => Ok(text),
        operand => {
            log::info!("rejected operand {operand:?}");
            Err(InputError::InvalidOperand { operand })
        },
    }
}
