#[derive(Debug)]
/// Represents all errors that can occur while reading or splitting the input.
///
/// The `Display` output is the exact message shown to the user.
pub enum InputError {
    /// Standard input could not be read.
    ReadFailure {
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// An operand was missing or did not start with a decimal digit.
    InvalidOperand {
        /// The offending operand after whitespace removal, if one was found.
        operand: Option<String>,
    },
    /// The line contained no operator character at all.
    MissingOperator,
    /// The operator character is not one of `+ - * /`.
    UnsupportedOperator {
        /// The character found in operator position.
        operator: char,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadFailure { .. } => write!(f, "Error al leer la entrada"),
            Self::InvalidOperand { .. } => write!(f, "Solo se permiten números"),
            Self::MissingOperator => write!(f, "No se encontró operador"),
            Self::UnsupportedOperator { .. } => write!(f, "Operador no válido"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFailure { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(source: std::io::Error) -> Self {
        Self::ReadFailure { source }
    }
}
