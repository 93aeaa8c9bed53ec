//! Core library for calctools
//!
//! This crate implements the **Functional Core** of the calctools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The calctools project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`calctools_core`** (this crate): Pure validation and evaluation functions with zero I/O
//! - **`calctools`**: Argument handling, orchestration, and output (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by responsibility:
//!
//! - [`validation`]: Numeric token validation and token-to-operand conversion
//! - [`math`]: Arithmetic evaluation over validated operands
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing operations and outputs
//! - **Pure functions**: Validation gates and evaluation entry points
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust
//! use calctools_core::math::{transform_computation, Operation};
//! use calctools_core::validation::parse_operand;
//!
//! // Gate raw tokens before any computation is attempted
//! let lhs = parse_operand("10").unwrap();
//! let rhs = parse_operand("4").unwrap();
//!
//! // Evaluate using pure functions
//! let operation = Operation::Divide(lhs, rhs);
//! let result = operation.evaluate().unwrap();
//!
//! // Assert on results (no mocking needed)
//! let output = transform_computation(&operation, result);
//! assert_eq!(output.result, 2.5);
//! ```
//!
//! The key invariant: **the evaluator is never invoked with an operand that
//! failed validation**. The validator is a precondition gate, never bypassed.

pub mod math;
pub mod validation;
