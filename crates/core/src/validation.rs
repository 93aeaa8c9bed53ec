//! Numeric token validation functions
//!
//! Pure functions deciding whether a raw operand token is acceptable for
//! computation, and converting accepted tokens into `f64` operands.
//! This module is the input boundary of the functional core: every token
//! passes through [`is_numeric`] before any arithmetic is attempted.

use regex::Regex;

/// Error type for token validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The supplied token is not a valid numeric value.
    /// Carries the rejected token for diagnostics.
    InvalidInput(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Client-facing message, forwarded verbatim by the shell.
            ValidationError::InvalidInput(_) => write!(f, "Please set a numeric value!"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// The token that failed validation
    pub fn token(&self) -> &str {
        match self {
            ValidationError::InvalidInput(token) => token,
        }
    }
}

/// Check whether a token represents a valid numeric value
///
/// Accepts an optional leading `+`/`-` sign, optional integer digits, at most
/// one decimal point, and mandatory trailing digits. Everything else is
/// rejected: the empty string, lone signs, multiple dots, letters or symbols,
/// scientific notation, and trailing-dot forms like "5.".
///
/// # Arguments
/// * `token` - Raw operand token as supplied by the caller
///
/// # Returns
/// `true` if the token is acceptable as a numeric operand
pub fn is_numeric(token: &str) -> bool {
    let re = Regex::new(r"^[+-]?[0-9]*\.?[0-9]+$").unwrap();
    re.is_match(token)
}

/// Convert a raw token into an `f64` operand
///
/// Applies [`is_numeric`] as a precondition gate and then parses the token.
/// Parsing cannot fail for a token the gate accepted; if it ever does, the
/// failure is surfaced as the same rejection rather than a panic.
///
/// # Arguments
/// * `token` - Raw operand token as supplied by the caller
///
/// # Returns
/// The numeric operand, or `ValidationError::InvalidInput` for rejected tokens
pub fn parse_operand(token: &str) -> Result<f64, ValidationError> {
    if !is_numeric(token) {
        return Err(ValidationError::InvalidInput(token.to_string()));
    }

    token
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidInput(token.to_string()))
}
