use std::sync::Arc;

use crate::{
    data::{Block, DemographicTable},
    graph::BlockGraph,
    partition::{District, Membership},
    types::{BlockId, Population},
};

/// A fixed number of districts over a block graph.
///
/// Blocks are either unassigned or members of exactly one district. District
/// aggregates only change through [`assign`](Self::assign) and [`remove`](Self::remove),
/// so they always match membership.
#[derive(Debug, Clone)]
pub struct DistrictSet {
    membership: Membership,
    districts: Vec<District>,
    graph: Arc<BlockGraph>,
    table: Arc<DemographicTable>,
}

impl DistrictSet {
    /// Construct `num_districts` empty districts over a graph and its demographics.
    pub fn new(num_districts: usize, graph: impl Into<Arc<BlockGraph>>, table: impl Into<Arc<DemographicTable>>) -> Self {
        assert!(num_districts > 0, "num_districts must be at least 1");
        let graph: Arc<BlockGraph> = graph.into();
        let table: Arc<DemographicTable> = table.into();
        assert!(graph.node_count() == table.len(), "graph and demographics must cover the same blocks");

        Self {
            membership: Membership::new(num_districts, table.len()),
            districts: (0..num_districts).map(District::new).collect(),
            graph,
            table,
        }
    }

    /// Get the number of districts.
    #[inline] pub fn num_districts(&self) -> usize { self.membership.num_districts() }

    /// Get the number of blocks in the underlying graph.
    #[inline] pub fn num_nodes(&self) -> usize { self.membership.num_nodes() }

    /// Get a reference to the underlying graph.
    #[inline] pub fn graph(&self) -> &BlockGraph { &self.graph }

    /// Get a reference to the demographics table.
    #[inline] pub fn table(&self) -> &DemographicTable { &self.table }

    /// Get the block stored at a node index.
    #[inline] pub fn block(&self, node: usize) -> &Block { self.table.block(node) }

    /// Get the aggregates of a district.
    #[inline] pub fn district(&self, district: usize) -> &District { &self.districts[district] }

    /// Get the aggregates of every district, in id order.
    #[inline] pub fn districts(&self) -> &[District] { &self.districts }

    /// Get the district a node belongs to, if any.
    #[inline] pub fn assignment(&self, node: usize) -> Option<usize> { self.membership.find(node) }

    /// Get the member nodes of a district (unordered).
    #[inline] pub fn members(&self, district: usize) -> &[usize] { self.membership.get(district) }

    /// Get the member block identifiers of a district, ascending.
    pub fn member_ids(&self, district: usize) -> Vec<BlockId> {
        let mut ids = self.members(district).iter()
            .map(|&node| self.table.block(node).id())
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    /// Get the member block identifiers of every district, ascending within each.
    pub fn partition(&self) -> Vec<Vec<BlockId>> {
        (0..self.num_districts()).map(|district| self.member_ids(district)).collect()
    }

    /// Get the nodes that belong to no district, in node order.
    pub fn unassigned(&self) -> Vec<usize> {
        (0..self.num_nodes()).filter(|&node| self.assignment(node).is_none()).collect()
    }

    /// Sum of population over all districts.
    pub fn assigned_population(&self) -> Population {
        self.districts.iter().map(District::population).sum()
    }

    /// Sum of population over unassigned blocks.
    ///
    /// Together with [`assigned_population`](Self::assigned_population) this is
    /// exactly the table's total population.
    pub fn unassigned_population(&self) -> Population {
        self.unassigned().into_iter().map(|node| self.block(node).population()).sum()
    }

    /// Place an unassigned node into a district, updating its aggregates.
    pub fn assign(&mut self, node: usize, district: usize) {
        assert!(node < self.num_nodes(), "node {node} out of range");
        assert!(district < self.num_districts(), "district {district} out of range [0, {})", self.num_districts());

        self.membership.insert(node, district);
        self.districts[district].add(self.table.block(node));
    }

    /// Remove a node from its district, returning the district it left.
    pub fn remove(&mut self, node: usize) -> Option<usize> {
        assert!(node < self.num_nodes(), "node {node} out of range");

        let district = self.membership.remove(node)?;
        self.districts[district].subtract(self.table.block(node));
        Some(district)
    }

    /// Move a node to a different district, returning the district it left.
    pub fn move_node(&mut self, node: usize, district: usize) -> Option<usize> {
        let prev = self.remove(node);
        self.assign(node, district);
        prev
    }
}
