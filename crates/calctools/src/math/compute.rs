use crate::prelude::{println, *};
use calctools_core::math::{transform_computation, ComputationOutput, Operation};
use calctools_core::validation::parse_operand;
use colored::Colorize;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct BinaryOptions {
    /// Left operand token
    #[arg(value_name = "LHS", allow_hyphen_values = true)]
    pub lhs: String,

    /// Right operand token
    #[arg(value_name = "RHS", allow_hyphen_values = true)]
    pub rhs: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct UnaryOptions {
    /// Operand token
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_binary(
    options: BinaryOptions,
    operation: fn(f64, f64) -> Operation,
    global: crate::Global,
) -> Result<()> {
    if global.verbose {
        println!("Validating tokens '{}' and '{}'...", options.lhs, options.rhs);
    }

    let output = compute_binary_data(&options.lhs, &options.rhs, operation)?;

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output);
    }

    Ok(())
}

pub fn run_unary(
    options: UnaryOptions,
    operation: fn(f64) -> Operation,
    global: crate::Global,
) -> Result<()> {
    if global.verbose {
        println!("Validating token '{}'...", options.value);
    }

    let output = compute_unary_data(&options.value, operation)?;

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output);
    }

    Ok(())
}

/// Gates both tokens, evaluates the operation, and returns a structured output
///
/// Both tokens are validated before any computation is attempted; if either
/// fails, the whole request is rejected and the evaluator never runs.
pub fn compute_binary_data(
    lhs: &str,
    rhs: &str,
    operation: fn(f64, f64) -> Operation,
) -> Result<ComputationOutput> {
    let lhs = parse_operand(lhs).map_err(Error::from)?;
    let rhs = parse_operand(rhs).map_err(Error::from)?;

    let operation = operation(lhs, rhs);
    let result = operation.evaluate().map_err(Error::from)?;

    Ok(transform_computation(&operation, result))
}

/// Gates the token, evaluates the operation, and returns a structured output
pub fn compute_unary_data(
    value: &str,
    operation: fn(f64) -> Operation,
) -> Result<ComputationOutput> {
    let operand = parse_operand(value).map_err(Error::from)?;

    let operation = operation(operand);
    let result = operation.evaluate().map_err(Error::from)?;

    Ok(transform_computation(&operation, result))
}

/// Convert computation output to JSON string
fn format_computation_json(output: &ComputationOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert computation output to formatted text
fn format_computation_text(output: &ComputationOutput) -> String {
    let mut result = String::new();

    let mut table = new_table();
    table.add_row(prettytable::row!["Operation", "Operands", "Result"]);
    table.add_row(prettytable::row![
        output.operation,
        format_operands(&output.operands),
        output.result.to_string().bright_yellow().bold()
    ]);

    result.push_str(&table.to_string());
    result
}

/// Join operands for display
fn format_operands(operands: &[f64]) -> String {
    operands
        .iter()
        .map(|operand| operand.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn output_json(output: &ComputationOutput) -> Result<()> {
    let json = format_computation_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &ComputationOutput) {
    let formatted = format_computation_text(output);
    print!("{}", formatted);
}
