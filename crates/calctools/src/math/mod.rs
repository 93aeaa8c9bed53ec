use crate::prelude::*;
use calctools_core::math::Operation;

pub mod compute;

// Re-export public data functions
pub use compute::{compute_binary_data, compute_unary_data};

#[derive(Debug, clap::Parser)]
#[command(name = "math")]
#[command(about = "Arithmetic operations over numeric tokens")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Add two numeric tokens
    #[clap(name = "sum")]
    Sum(compute::BinaryOptions),

    /// Subtract the second token from the first
    #[clap(name = "subtract")]
    Subtract(compute::BinaryOptions),

    /// Multiply two numeric tokens
    #[clap(name = "multiply")]
    Multiply(compute::BinaryOptions),

    /// Divide the first token by the second
    #[clap(name = "divide")]
    Divide(compute::BinaryOptions),

    /// Average two numeric tokens
    #[clap(name = "average")]
    Average(compute::BinaryOptions),

    /// Take the square root of a numeric token
    #[clap(name = "sqrt")]
    Sqrt(compute::UnaryOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Sum(options) => compute::run_binary(options, Operation::Sum, global),
        Commands::Subtract(options) => compute::run_binary(options, Operation::Subtract, global),
        Commands::Multiply(options) => compute::run_binary(options, Operation::Multiply, global),
        Commands::Divide(options) => compute::run_binary(options, Operation::Divide, global),
        Commands::Average(options) => compute::run_binary(options, Operation::Average, global),
        Commands::Sqrt(options) => compute::run_unary(options, Operation::SquareRoot, global),
    }
}
