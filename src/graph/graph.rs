use anyhow::Result;

use crate::{data::DemographicTable, error::InputError, types::BlockId};

/// An unweighted, undirected block adjacency graph in compressed sparse row format.
///
/// Nodes are the row indices of the [`DemographicTable`] the graph was built against.
#[derive(Debug, Clone)]
pub struct BlockGraph {
    offsets: Vec<u32>,
    edges: Vec<u32>,
}

impl BlockGraph {
    /// Construct a graph from per-node adjacency lists, each sorted ascending.
    pub(crate) fn new(adjacency: &[Vec<u32>]) -> Self {
        adjacency.iter().enumerate().for_each(|(u, neighbors)| {
            neighbors.iter().for_each(|&v| {
                assert!((v as usize) < adjacency.len(), "edge {u}-{v} references a node out of range");
            });
        });

        Self {
            offsets: std::iter::once(0u32).chain(
                adjacency.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            edges: adjacency.iter().flatten().copied().collect(),
        }
    }

    /// Build the graph from undirected `(a, b)` edge rows.
    ///
    /// Every endpoint must have a demographics row. Blocks in the table with no edge
    /// become isolated nodes; duplicate edges collapse and self loops are dropped.
    pub fn from_edges(table: &DemographicTable, edges: impl IntoIterator<Item = (BlockId, BlockId)>) -> Result<Self> {
        let mut adjacency = vec![Vec::new(); table.len()];
        for (a, b) in edges {
            let u = table.node_of(a).ok_or(InputError::MissingDemographics { block: a })?;
            let v = table.node_of(b).ok_or(InputError::MissingDemographics { block: b })?;
            if u == v { continue }
            adjacency[u].push(v as u32);
            adjacency[v].push(u as u32);
        }

        adjacency.iter_mut().for_each(|neighbors| {
            neighbors.sort_unstable();
            neighbors.dedup();
        });

        Ok(Self::new(&adjacency))
    }

    /// Get the number of nodes in the graph.
    #[inline] pub fn node_count(&self) -> usize { self.offsets.len() - 1 }

    /// Get the number of undirected edges in the graph.
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() / 2 }

    /// Get the range of edges for a given node.
    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Get the degree (number of neighbors) of a given node.
    #[inline] pub fn degree(&self, node: usize) -> usize { self.range(node).len() }

    /// Get an iterator over the neighbors of a given node.
    #[inline]
    pub fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |v| self.edges[v] as usize)
    }

    /// Check if two nodes share an edge.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.edges[self.range(u)].binary_search(&(v as u32)).is_ok()
    }
}
