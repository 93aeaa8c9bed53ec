use clap::Parser;
use color_eyre::eyre::Result;

mod cli;
mod scripts;

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = cli::App::parse();

    match app.command {
        Some(cli::Commands::Install(args)) => scripts::install(&args),
        None => {
            println!("No task provided. Run with --help for usage.");
            Ok(())
        }
    }
}
