use calctools_core::math::MathError;
use calctools_core::validation::ValidationError;

#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    /// A supplied operand token failed numeric validation.
    #[error("{0}")]
    InvalidInput(String),

    /// The requested operation is undefined at its operands.
    #[error("{0}")]
    UnsupportedOperation(String),
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

impl From<MathError> for Error {
    fn from(err: MathError) -> Self {
        Error::UnsupportedOperation(err.to_string())
    }
}
