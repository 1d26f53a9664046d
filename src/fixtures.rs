//! Shared inputs for unit tests.

use std::sync::Arc;

use crate::{
    data::{Block, DemographicTable},
    graph::BlockGraph,
    partition::DistrictSet,
    types::BlockId,
};

/// Build a graph and table from `(id, population, favorable)` rows and edge pairs.
pub(crate) fn build(blocks: &[(i64, f64, f64)], edges: &[(i64, i64)]) -> (Arc<BlockGraph>, Arc<DemographicTable>) {
    let table = DemographicTable::new(
        blocks.iter().map(|&(id, population, favorable)| Block::new(id, population, favorable).unwrap()).collect()
    ).unwrap();
    let graph = BlockGraph::from_edges(&table, edges.iter().map(|&(a, b)| (BlockId(a), BlockId(b)))).unwrap();
    (Arc::new(graph), Arc::new(table))
}

/// A path `1 - 2 - ... - n` with the given populations and half of each favorable.
pub(crate) fn path_set(populations: &[f64], num_districts: usize) -> DistrictSet {
    let blocks = populations.iter().enumerate()
        .map(|(i, &p)| (i as i64 + 1, p, p / 2.0))
        .collect::<Vec<_>>();
    let edges = (1..populations.len() as i64).map(|i| (i, i + 1)).collect::<Vec<_>>();
    let (graph, table) = build(&blocks, &edges);
    DistrictSet::new(num_districts, graph, table)
}

/// The four-block path used throughout the documentation.
pub(crate) fn scenario() -> (Arc<BlockGraph>, Arc<DemographicTable>) {
    build(
        &[(1, 10.0, 8.0), (2, 10.0, 2.0), (3, 10.0, 9.0), (4, 10.0, 1.0)],
        &[(1, 2), (2, 3), (3, 4)],
    )
}
