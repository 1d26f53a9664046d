use anyhow::Result;
use greedymander::{load_inputs, read_plan, rebalance_plan};

use crate::commands::{check_output, plan_path, report, resolve_params, write_outputs};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RebalanceArgs) -> Result<()> {
    let inputs = &args.inputs;
    let params = resolve_params(inputs, None)?;

    check_output(&plan_path(inputs), inputs.force)?;
    if let Some(path) = &inputs.events { check_output(path, inputs.force)? }

    if cli.verbose > 0 {
        eprintln!("[rebalance] plan={} districts={} policy={:?}",
            args.plan.display(), params.num_districts, params.receiver_policy);
    }

    let (graph, table) = load_inputs(&inputs.adjacency, &inputs.demographics)?;
    let assignments = read_plan(&args.plan)?;

    let outcome = rebalance_plan(graph, table, &assignments, &params)?;
    report(cli, "rebalance", &outcome);
    write_outputs(cli, "rebalance", inputs, &outcome)
}
