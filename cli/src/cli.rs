use std::path::PathBuf;

use greedymander::{Affiliation, ReceiverPolicy};

/// Greedy packing/cracking districting CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "greedymander", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v summary, -vv every decision)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Rank blocks, assign them greedily, then rebalance (forbids stdout)
    Redistrict(RedistrictArgs),

    /// Rebalance an existing plan (forbids stdout)
    Rebalance(RebalanceArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum AffiliationArg { Primary, Complement }

impl From<AffiliationArg> for Affiliation {
    fn from(arg: AffiliationArg) -> Self {
        match arg {
            AffiliationArg::Primary => Affiliation::Primary,
            AffiliationArg::Complement => Affiliation::Complement,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum ReceiverPolicyArg { Contiguous, Unchecked }

impl From<ReceiverPolicyArg> for ReceiverPolicy {
    fn from(arg: ReceiverPolicyArg) -> Self {
        match arg {
            ReceiverPolicyArg::Contiguous => ReceiverPolicy::Contiguous,
            ReceiverPolicyArg::Unchecked => ReceiverPolicy::Unchecked,
        }
    }
}

/// Inputs and tuning shared by every command.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Adjacency table (blockA,blockB)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub adjacency: PathBuf,

    /// Demographics table (block,population,num_positive)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub demographics: PathBuf,

    /// Number of districts (overrides the params file)
    #[arg(short, long)]
    pub districts: Option<usize>,

    /// JSON file with run parameters; flags take precedence
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub params: Option<PathBuf>,

    /// Maximum number of rebalancing sweeps
    #[arg(long)]
    pub max_sweeps: Option<usize>,

    /// Whether rebalancing moves must border the receiving district
    #[arg(long, value_enum)]
    pub receiver_policy: Option<ReceiverPolicyArg>,

    /// Output plan file (must be a file path; "-" is rejected), defaults to "./plan.csv"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Write every decision as JSON to this file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub events: Option<PathBuf>,

    /// Overwrite output files if they exist
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct RedistrictArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Affiliation whose share orders the blocks
    #[arg(short, long, value_enum)]
    pub affiliation: Option<AffiliationArg>,

    /// Hierarchy table (blockA,blockB); loaded and reported, not used for districting
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub hierarchy: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct RebalanceArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Existing plan to rebalance (block,district)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub plan: PathBuf,
}
