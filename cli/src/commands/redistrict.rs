use anyhow::Result;
use greedymander::{gerrymander, load_hierarchy, load_inputs};

use crate::commands::{check_output, plan_path, report, resolve_params, write_outputs};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RedistrictArgs) -> Result<()> {
    let inputs = &args.inputs;
    let params = resolve_params(inputs, args.affiliation.map(Into::into))?;

    check_output(&plan_path(inputs), inputs.force)?;
    if let Some(path) = &inputs.events { check_output(path, inputs.force)? }

    if cli.verbose > 0 {
        eprintln!(
            "[redistrict] adjacency={} demographics={} districts={} affiliation={:?}",
            inputs.adjacency.display(),
            inputs.demographics.display(),
            params.num_districts,
            params.affiliation,
        );
    }

    let (graph, table) = load_inputs(&inputs.adjacency, &inputs.demographics)?;
    if cli.verbose > 0 {
        eprintln!("[redistrict] loaded {} blocks, {} edges, total population {}",
            table.len(), graph.edge_count(), table.total_population());
    }

    if let Some(path) = &args.hierarchy {
        let hierarchy = load_hierarchy(path)?;
        if cli.verbose > 0 {
            eprintln!("[redistrict] loaded hierarchy with {} blocks, {} edges (not used for districting)",
                hierarchy.node_count(), hierarchy.edge_count());
        }
    }

    let outcome = gerrymander(graph, table, &params)?;
    report(cli, "redistrict", &outcome);
    write_outputs(cli, "redistrict", inputs, &outcome)
}
