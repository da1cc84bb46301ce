//! # columna
//!
//! columna reads a single two-operand arithmetic expression such as `12+7`,
//! computes it, and prints the operation as a right-aligned column worksheet:
//!
//! ```text
//!  12
//! + 7
//! ---
//!  19
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use crate::{
    ast::{Answer, Worksheet},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::evaluate,
        formatter::{NumberStyle, render},
        parser::parse_expression,
        reader::read_line,
    },
};

/// Defines the values passed between pipeline stages.
///
/// This module declares the operator enum, the validated expression and the
/// worksheet handed to the formatter.
pub mod ast;
/// Provides unified error types for reading, parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Renders each error as the message shown to the user.
pub mod error;
/// Runs an input line through every stage of the pipeline.
///
/// # Responsibilities
/// - Reads and tokenizes the line.
/// - Splits, normalizes and validates the operands.
/// - Dispatches the operator and renders the result.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

/// The prompt written before the input line is read.
pub const PROMPT: &str = "Ingresa una operación (ej: 1+2): ";

/// Outcome of a [`run`], mapped onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The operation was computed and displayed. Exit code `0`.
    Success,
    /// Reading, validation or formatting failed, or the result is undefined.
    /// Exit code `1`.
    Failure,
}

impl ExitStatus {
    /// Returns the numeric process exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// Settings of a single [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// How the result is rendered.
    pub style: NumberStyle,
}

/// Computes the worksheet for one input line.
///
/// A division by zero is not an error here: it produces a worksheet whose
/// answer is [`Answer::Undefined`].
///
/// # Errors
/// Returns an error if the line has no operator, an operand is not a number,
/// the operator is unsupported, or the result cannot be rendered.
///
/// # Examples
/// ```
/// use columna::{ast::Answer, interpreter::formatter::NumberStyle, solve};
///
/// let worksheet = solve("7/2", NumberStyle::Truncated).unwrap();
/// assert_eq!(worksheet.answer, Answer::Value("3".to_string()));
///
/// let worksheet = solve("10/0", NumberStyle::Truncated).unwrap();
/// assert_eq!(worksheet.answer, Answer::Undefined);
///
/// assert!(solve("abc+2", NumberStyle::Truncated).is_err());
/// ```
pub fn solve(line: &str, style: NumberStyle) -> Result<Worksheet, Error> {
    let expression = parse_expression(line)?;

    let answer = match evaluate(&expression) {
        Ok(value) => {
            log::debug!("result is {value}");
            Answer::from_value(value, style)?
        },
        Err(Error::Runtime(RuntimeError::DivisionByZero)) => Answer::Undefined,
        Err(e) => return Err(e),
    };

    Ok(Worksheet { expression, answer })
}

/// Prompts on `output`, reads one line from `input` and writes either the
/// worksheet or the error message to `output`.
///
/// # Errors
/// Returns an error only if writing to `output` fails. Failures of the
/// computation itself are reported on `output` and as
/// [`ExitStatus::Failure`].
///
/// # Examples
/// ```
/// use columna::{ExitStatus, Options, run};
///
/// let mut output = Vec::new();
/// let status = run(&mut "1+2\n".as_bytes(), &mut output, Options::default()).unwrap();
///
/// assert_eq!(status, ExitStatus::Success);
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "Ingresa una operación (ej: 1+2):   1\n+ 2\n---\n  3\n");
/// ```
pub fn run<R: BufRead, W: Write>(input: &mut R,
                                 output: &mut W,
                                 options: Options)
                                 -> io::Result<ExitStatus> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let outcome = read_line(input).map_err(Error::from)
                                  .and_then(|line| solve(&line, options.style));

    match outcome {
        Ok(worksheet) => {
            write!(output, "{}", render(&worksheet))?;
            Ok(if worksheet.is_defined() { ExitStatus::Success } else { ExitStatus::Failure })
        },
        Err(e) => {
            writeln!(output, "{e}")?;
            Ok(ExitStatus::Failure)
        },
    }
}
