pub mod completions;
pub mod generate;

use clap::{Parser, Subcommand};

/// launchgen - Launch screen background and logo generator
///
/// Without a subcommand, generates every launch image into the asset catalog.
#[derive(Parser, Debug)]
#[command(name = "launchgen")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub generate: generate::GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
