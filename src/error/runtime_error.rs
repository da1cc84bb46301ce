#[derive(Debug, PartialEq)]
/// Represents all errors that can occur while computing or rendering a result.
pub enum RuntimeError {
    /// The divisor of a division parsed to exactly zero.
    ///
    /// This is reported to the user as an `UNDEFINED` worksheet rather than
    /// as a message.
    DivisionByZero,
    /// The result could not be converted to a decimal string.
    FormatFailure {
        /// The value that could not be rendered.
        value: f64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "UNDEFINED"),
            Self::FormatFailure { .. } => write!(f, "Error al convertir el resultado a string"),
        }
    }
}

impl std::error::Error for RuntimeError {}
