/// Input errors.
///
/// Defines all error types that can occur while reading and splitting the
/// input line. Input errors include read failures, operands that are not
/// numbers, and missing or unsupported operators.
pub mod input_error;
/// Runtime errors.
///
/// Contains the error types raised while computing and rendering a result:
/// division by zero and failed numeric-to-string conversions.
pub mod runtime_error;

pub use input_error::InputError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any failure of the read → split → validate → compute → format pipeline.
pub enum Error {
    /// The line could not be read or did not describe a valid operation.
    Input(InputError),
    /// The operation could not be computed or rendered.
    Runtime(RuntimeError),
}

impl From<InputError> for Error {
    fn from(error: InputError) -> Self {
        Self::Input(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
