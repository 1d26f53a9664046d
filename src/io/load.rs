use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    data::DemographicTable,
    graph::{BlockGraph, HierarchyGraph},
    io::csv::{assignments_frame, read_assignments, read_blocks, read_csv, read_edges, write_csv},
    types::BlockId,
};

/// Load the adjacency and demographics tables.
///
/// Fails on malformed rows, and on edges that reference blocks without demographics.
pub fn load_inputs(adjacency: &Path, demographics: &Path) -> Result<(BlockGraph, DemographicTable)> {
    let blocks = read_blocks(&read_csv(demographics, "demographics")?)
        .with_context(|| format!("[io::load] Invalid demographics in {}", demographics.display()))?;
    let table = DemographicTable::new(blocks)
        .with_context(|| format!("[io::load] Invalid demographics in {}", demographics.display()))?;

    let edges = read_edges(&read_csv(adjacency, "adjacency")?, "adjacency")
        .with_context(|| format!("[io::load] Invalid adjacency in {}", adjacency.display()))?;
    let graph = BlockGraph::from_edges(&table, edges)
        .with_context(|| format!("[io::load] Adjacency in {} does not match demographics", adjacency.display()))?;

    Ok((graph, table))
}

/// Load the directed block hierarchy table.
pub fn load_hierarchy(path: &Path) -> Result<HierarchyGraph> {
    let edges = read_edges(&read_csv(path, "hierarchy")?, "hierarchy")
        .with_context(|| format!("[io::load] Invalid hierarchy in {}", path.display()))?;
    Ok(HierarchyGraph::from_edges(edges))
}

/// Read `(block, district)` assignments from a plan CSV.
pub fn read_plan(path: &Path) -> Result<Vec<(BlockId, usize)>> {
    read_assignments(&read_csv(path, "plan")?)
        .with_context(|| format!("[io::load] Invalid plan in {}", path.display()))
}

/// Write `(block, district)` assignments to a plan CSV.
pub fn write_plan(assignments: &[(BlockId, usize)], path: &Path) -> Result<()> {
    write_csv(&mut assignments_frame(assignments)?, path)
}
