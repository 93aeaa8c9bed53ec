//! Arithmetic evaluation functions
//!
//! Pure evaluation entry points over already-validated `f64` operands, plus
//! the [`Operation`] selector and the serializable [`ComputationOutput`]
//! shape consumed by the shell. Operands reaching this module have passed
//! the gate in [`crate::validation`]; the functions here only reject inputs
//! for which the operation itself is mathematically undefined.

use serde::Serialize;

/// Error type for operations that are undefined at their operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Division with a zero divisor.
    DivisionByZero,
    /// Square root of a negative operand.
    NegativeSquareRoot,
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::DivisionByZero => write!(f, "Cannot divide by zero!"),
            MathError::NegativeSquareRoot => {
                write!(f, "Cannot take the square root of a negative number!")
            }
        }
    }
}

impl std::error::Error for MathError {}

/// Add two operands
pub fn sum(lhs: f64, rhs: f64) -> f64 {
    lhs + rhs
}

/// Subtract the right operand from the left
pub fn subtract(lhs: f64, rhs: f64) -> f64 {
    lhs - rhs
}

/// Multiply two operands
pub fn multiply(lhs: f64, rhs: f64) -> f64 {
    lhs * rhs
}

/// Divide the left operand by the right
///
/// # Returns
/// The quotient, or `MathError::DivisionByZero` when the divisor is zero
pub fn divide(lhs: f64, rhs: f64) -> Result<f64, MathError> {
    if rhs == 0.0 {
        return Err(MathError::DivisionByZero);
    }

    Ok(lhs / rhs)
}

/// Average two operands
pub fn average(lhs: f64, rhs: f64) -> f64 {
    (lhs + rhs) / 2.0
}

/// Take the square root of an operand
///
/// # Returns
/// The non-negative root, or `MathError::NegativeSquareRoot` for negative input
pub fn square_root(operand: f64) -> Result<f64, MathError> {
    if operand < 0.0 {
        return Err(MathError::NegativeSquareRoot);
    }

    Ok(operand.sqrt())
}

/// A requested arithmetic operation together with its validated operands
///
/// Variants carry their operands directly (two for the binary operations,
/// one for the square root), so a request with the wrong operand count is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Sum(f64, f64),
    Subtract(f64, f64),
    Multiply(f64, f64),
    Divide(f64, f64),
    Average(f64, f64),
    SquareRoot(f64),
}

impl Operation {
    /// Stable name of the operation, used in output shapes
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Sum(..) => "sum",
            Operation::Subtract(..) => "subtract",
            Operation::Multiply(..) => "multiply",
            Operation::Divide(..) => "divide",
            Operation::Average(..) => "average",
            Operation::SquareRoot(..) => "square_root",
        }
    }

    /// The operands carried by this operation, in order
    pub fn operands(&self) -> Vec<f64> {
        match *self {
            Operation::Sum(lhs, rhs)
            | Operation::Subtract(lhs, rhs)
            | Operation::Multiply(lhs, rhs)
            | Operation::Divide(lhs, rhs)
            | Operation::Average(lhs, rhs) => vec![lhs, rhs],
            Operation::SquareRoot(operand) => vec![operand],
        }
    }

    /// Evaluate the operation
    ///
    /// Dispatches to the per-operation entry points. Stateless: each call is
    /// a single-step computation with no shared state between invocations.
    ///
    /// # Returns
    /// The result, or `MathError` when the operation is undefined at its operands
    pub fn evaluate(&self) -> Result<f64, MathError> {
        match *self {
            Operation::Sum(lhs, rhs) => Ok(sum(lhs, rhs)),
            Operation::Subtract(lhs, rhs) => Ok(subtract(lhs, rhs)),
            Operation::Multiply(lhs, rhs) => Ok(multiply(lhs, rhs)),
            Operation::Divide(lhs, rhs) => divide(lhs, rhs),
            Operation::Average(lhs, rhs) => Ok(average(lhs, rhs)),
            Operation::SquareRoot(operand) => square_root(operand),
        }
    }
}

/// Complete computation output
#[derive(Debug, Serialize, Clone)]
pub struct ComputationOutput {
    pub operation: String,
    pub operands: Vec<f64>,
    pub result: f64,
}

/// Transform an evaluated operation into the output shape
///
/// Takes the operation and its computed result and constructs a complete
/// `ComputationOutput` for rendering. No rounding or formatting is applied;
/// presentation belongs to the shell.
pub fn transform_computation(operation: &Operation, result: f64) -> ComputationOutput {
    ComputationOutput {
        operation: operation.name().to_string(),
        operands: operation.operands(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    // ============================================================================
    // sum tests
    // ============================================================================

    #[test]
    fn test_sum_basic() {
        assert_eq!(sum(5.0, 3.0), 8.0);
    }

    #[test]
    fn test_sum_commutative() {
        let pairs = [(1.5, 2.5), (-4.0, 9.0), (0.0, 7.25), (-3.5, -6.5)];
        for (a, b) in pairs {
            assert_eq!(sum(a, b), sum(b, a));
        }
    }

    // ============================================================================
    // subtract tests
    // ============================================================================

    #[test]
    fn test_subtract_basic() {
        assert_eq!(subtract(10.0, 4.0), 6.0);
    }

    #[test]
    fn test_subtract_antisymmetric() {
        let pairs = [(1.5, 2.5), (-4.0, 9.0), (8.0, 8.0), (-3.5, -6.5)];
        for (a, b) in pairs {
            assert_eq!(subtract(a, b), -subtract(b, a));
        }
    }

    // ============================================================================
    // multiply tests
    // ============================================================================

    #[test]
    fn test_multiply_basic() {
        assert_eq!(multiply(6.0, 7.0), 42.0);
    }

    #[test]
    fn test_multiply_by_zero() {
        assert_eq!(multiply(123.45, 0.0), 0.0);
    }

    // ============================================================================
    // divide tests
    // ============================================================================

    #[test]
    fn test_divide_basic() {
        assert_eq!(divide(10.0, 4.0).unwrap(), 2.5);
    }

    #[test]
    fn test_divide_by_zero() {
        let err = divide(10.0, 0.0).unwrap_err();
        assert_eq!(err, MathError::DivisionByZero);
        assert!(err.to_string().contains("zero"));
    }

    #[test]
    fn test_divide_by_zero_any_dividend() {
        for lhs in [0.0, -1.0, 2.5, 1e12] {
            assert!(divide(lhs, 0.0).is_err());
        }
    }

    #[test]
    fn test_divide_by_negative_zero() {
        // -0.0 compares equal to 0.0 and is rejected the same way
        assert!(divide(1.0, -0.0).is_err());
    }

    #[test]
    fn test_divide_negative_operands() {
        assert_eq!(divide(-9.0, 3.0).unwrap(), -3.0);
        assert_eq!(divide(9.0, -3.0).unwrap(), -3.0);
    }

    // ============================================================================
    // average tests
    // ============================================================================

    #[test]
    fn test_average_basic() {
        assert_eq!(average(3.0, 7.0), 5.0);
    }

    #[test]
    fn test_average_exact() {
        let pairs = [(1.0, 2.0), (-4.0, 9.0), (0.5, 0.25)];
        for (a, b) in pairs {
            assert_eq!(average(a, b), (a + b) / 2.0);
        }
    }

    // ============================================================================
    // square_root tests
    // ============================================================================

    #[test]
    fn test_square_root_basic() {
        assert_eq!(square_root(16.0).unwrap(), 4.0);
    }

    #[test]
    fn test_square_root_zero() {
        assert_eq!(square_root(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_square_root_negative() {
        let err = square_root(-4.0).unwrap_err();
        assert_eq!(err, MathError::NegativeSquareRoot);
    }

    #[test]
    fn test_square_root_round_trip() {
        for operand in [0.25, 2.0, 9.0, 144.0, 1e6] {
            let root = square_root(operand).unwrap();
            assert!(root >= 0.0);
            assert!((root * root - operand).abs() < TOLERANCE * operand.max(1.0));
        }
    }

    // ============================================================================
    // Operation tests
    // ============================================================================

    #[test]
    fn test_operation_evaluate_sum() {
        assert_eq!(Operation::Sum(5.0, 3.0).evaluate().unwrap(), 8.0);
    }

    #[test]
    fn test_operation_evaluate_divide_by_zero() {
        let err = Operation::Divide(10.0, 0.0).evaluate().unwrap_err();
        assert_eq!(err, MathError::DivisionByZero);
    }

    #[test]
    fn test_operation_evaluate_square_root() {
        assert_eq!(Operation::SquareRoot(16.0).evaluate().unwrap(), 4.0);
        assert!(Operation::SquareRoot(-4.0).evaluate().is_err());
    }

    #[test]
    fn test_operation_name() {
        assert_eq!(Operation::Sum(1.0, 2.0).name(), "sum");
        assert_eq!(Operation::SquareRoot(1.0).name(), "square_root");
    }

    #[test]
    fn test_operation_operands() {
        assert_eq!(Operation::Subtract(4.0, 1.0).operands(), vec![4.0, 1.0]);
        assert_eq!(Operation::SquareRoot(9.0).operands(), vec![9.0]);
    }

    // ============================================================================
    // transform_computation tests
    // ============================================================================

    #[test]
    fn test_transform_computation_binary() {
        let operation = Operation::Average(3.0, 7.0);
        let result = operation.evaluate().unwrap();
        let output = transform_computation(&operation, result);

        assert_eq!(output.operation, "average");
        assert_eq!(output.operands, vec![3.0, 7.0]);
        assert_eq!(output.result, 5.0);
    }

    #[test]
    fn test_transform_computation_unary() {
        let operation = Operation::SquareRoot(16.0);
        let result = operation.evaluate().unwrap();
        let output = transform_computation(&operation, result);

        assert_eq!(output.operation, "square_root");
        assert_eq!(output.operands, vec![16.0]);
        assert_eq!(output.result, 4.0);
    }

    // ============================================================================
    // error message tests
    // ============================================================================

    #[test]
    fn test_math_error_messages() {
        assert_eq!(MathError::DivisionByZero.to_string(), "Cannot divide by zero!");
        assert_eq!(
            MathError::NegativeSquareRoot.to_string(),
            "Cannot take the square root of a negative number!"
        );
    }
}
