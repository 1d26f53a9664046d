
mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{rebalance, redistrict};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    match &cli.command {
        Commands::Redistrict(args) => redistrict::run(&cli, args),
        Commands::Rebalance(args) => rebalance::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
