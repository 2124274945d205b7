use clap::Parser;
use launchgen::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions(args)) => launchgen::cli::completions::run(args)?,
        None => launchgen::cli::generate::run(cli.generate)?,
    }

    Ok(())
}
