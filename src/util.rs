/// Numeric parsing helpers.
///
/// This module provides the lenient prefix parser used to read operands: it
/// takes as much of a string as forms a decimal number and ignores the rest.
pub mod num;
