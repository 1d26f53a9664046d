use std::collections::BTreeMap;

use crate::types::BlockId;

/// Directed parent -> child relation between blocks.
///
/// Loaded alongside the adjacency table but not used when districting.
#[derive(Debug, Clone, Default)]
pub struct HierarchyGraph {
    children: BTreeMap<BlockId, Vec<BlockId>>,
    edge_count: usize,
}

impl HierarchyGraph {
    /// Build from directed `(parent, child)` rows; repeated rows are kept once.
    pub fn from_edges(edges: impl IntoIterator<Item = (BlockId, BlockId)>) -> Self {
        let mut children: BTreeMap<BlockId, Vec<BlockId>> = BTreeMap::new();
        for (parent, child) in edges {
            children.entry(parent).or_default().push(child);
            children.entry(child).or_default();
        }

        let mut edge_count = 0;
        for list in children.values_mut() {
            list.sort_unstable();
            list.dedup();
            edge_count += list.len();
        }

        Self { children, edge_count }
    }

    /// Number of distinct blocks mentioned by any row.
    #[inline] pub fn node_count(&self) -> usize { self.children.len() }

    /// Number of distinct directed edges.
    #[inline] pub fn edge_count(&self) -> usize { self.edge_count }

    /// Children of a block, in ascending order.
    pub fn children(&self, parent: BlockId) -> &[BlockId] {
        self.children.get(&parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Blocks with no parent.
    pub fn roots(&self) -> Vec<BlockId> {
        let mut has_parent = self.children.values().flatten().copied().collect::<Vec<_>>();
        has_parent.sort_unstable();
        has_parent.dedup();
        self.children.keys().copied().filter(|id| has_parent.binary_search(id).is_err()).collect()
    }
}
