use crate::prelude::*;
use clap::Parser;

mod error;
mod math;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Calculator operations over raw string operands"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(
        long,
        env = "CALCTOOLS_VERBOSE",
        global = true,
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Arithmetic operations over numeric tokens
    Math(crate::math::App),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Math(sub_app) => crate::math::run(sub_app, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
