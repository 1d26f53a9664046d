pub mod rebalance;
pub mod redistrict;

use std::{fs::File, io::BufWriter, path::{Path, PathBuf}};

use anyhow::{bail, Context, Result};
use greedymander::{format_summaries, write_plan, Affiliation, Outcome, Params, RebalanceStatus};

use crate::cli::{Cli, InputArgs};

/// Resolve run parameters: params file first, then explicit flags.
pub(crate) fn resolve_params(args: &InputArgs, affiliation: Option<Affiliation>) -> Result<Params> {
    let mut params = match &args.params {
        Some(path) => Params::from_json_file(path)?,
        None => Params::default(),
    };

    if let Some(districts) = args.districts { params.num_districts = districts }
    else if args.params.is_none() { bail!("--districts is required without --params") }

    if let Some(affiliation) = affiliation { params.affiliation = affiliation }
    if let Some(max_sweeps) = args.max_sweeps { params.max_sweeps = max_sweeps }
    if let Some(policy) = args.receiver_policy { params.receiver_policy = policy.into() }

    params.validate()?;
    Ok(params)
}

/// Check an output path before any work is done.
pub(crate) fn check_output(path: &Path, force: bool) -> Result<()> {
    if path == Path::new("-") { bail!("stdout is not supported.") }
    if path.exists() && !force { bail!("{} already exists (use --force to overwrite)", path.display()) }
    Ok(())
}

/// Plan output path, defaulting to "./plan.csv".
pub(crate) fn plan_path(args: &InputArgs) -> PathBuf {
    args.output.clone().unwrap_or("./plan.csv".into())
}

/// Narrate the outcome on stderr according to verbosity.
pub(crate) fn report(cli: &Cli, command: &str, outcome: &Outcome) {
    if cli.verbose > 1 {
        outcome.events().iter().for_each(|event| eprintln!("[{command}] {event}"));
    }

    // Unplaced blocks and an unbalanced result are always reported.
    let unassigned = outcome.unassigned();
    if !unassigned.is_empty() {
        let ids = unassigned.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ");
        eprintln!("[{command}] {} blocks could not be assigned: {ids}", unassigned.len());
    }

    let rebalance = outcome.rebalance();
    match rebalance.status {
        RebalanceStatus::Balanced => {}
        RebalanceStatus::Stalled =>
            eprintln!("[{command}] rebalancing stalled after {} sweeps; some districts exceed the target", rebalance.sweeps),
        RebalanceStatus::NonConvergent =>
            eprintln!("[{command}] rebalancing did not converge within {} sweeps", rebalance.sweeps),
    }

    if cli.verbose > 0 {
        eprintln!("[{command}] target population {:.1}, {} rebalancing moves",
            outcome.target_population(), outcome.events().moves());
        eprint!("{}", format_summaries(&outcome.summaries()));
    }
}

/// Write the plan and, if requested, the event stream.
pub(crate) fn write_outputs(cli: &Cli, command: &str, args: &InputArgs, outcome: &Outcome) -> Result<()> {
    let out_path = plan_path(args);
    if cli.verbose > 0 { eprintln!("[{command}] writing plan to {}", out_path.display()) }
    write_plan(&outcome.assignments(), &out_path)?;

    if let Some(path) = &args.events {
        if cli.verbose > 0 { eprintln!("[{command}] writing {} events to {}", outcome.events().len(), path.display()) }
        let file = File::create(path)
            .with_context(|| format!("[{command}] Failed to create events file: {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), outcome.events())
            .with_context(|| format!("[{command}] Failed to write events to {:?}", path))?;
    }

    Ok(())
}
