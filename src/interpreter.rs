/// The reader module acquires the raw input line.
///
/// Reads a single line from any buffered source, growing its buffer as
/// needed, and hands the text to the parser without its line terminator.
pub mod reader;
/// The lexer module tokenizes the input line.
///
/// The lexer classifies the raw line into operator tokens and runs of
/// operand text, each carrying its byte span in the original line.
pub mod lexer;
/// The parser module turns the input line into an [`Expression`].
///
/// # Responsibilities
/// - Splits the line at its first operator into two operand substrings.
/// - Removes spaces and tabs from each operand.
/// - Validates that an operator exists and that both operands are digit-led.
///
/// [`Expression`]: crate::ast::Expression
pub mod parser;
/// The evaluator module computes the value of an expression.
///
/// Maps the operator to its arithmetic function, parses the operands and
/// detects division by zero.
pub mod evaluator;
/// The formatter module renders results and worksheets as text.
///
/// # Responsibilities
/// - Converts a numeric result to a truncated or decimal string.
/// - Draws the right-aligned column diagram.
pub mod formatter;
