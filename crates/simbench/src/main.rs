use std::error::Error;

use clap::{Parser, Subcommand};

use commands::{
    check::{self, CheckArgs},
    encode::{self, EncodeArgs},
    run::{self, RunArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "simbench", about = "Parameter-sweep measurement driver for the simulation binary")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute every sweep declared in a plan and persist result tables.
    Run(RunArgs),
    /// Validate a plan without building or executing anything.
    Check(CheckArgs),
    /// Print the encoded argument tokens for one run-time assignment.
    Encode(EncodeArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run::run(&args),
        Command::Check(args) => check::run(&args),
        Command::Encode(args) => encode::run(&args),
    }
}
