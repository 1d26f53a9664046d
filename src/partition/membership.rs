/// Membership tracks which district (if any) each block belongs to,
/// with O(1) insert/remove/find.
#[derive(Debug, Clone)]
pub(super) struct Membership {
    members: Vec<Vec<usize>>,
    index: Vec<Option<(usize, usize)>>, // index[node] = Some((district, pos)) if node is members[district][pos]
}

impl Membership {
    /// Create an empty membership over `num_districts` districts and `num_nodes` blocks.
    pub(super) fn new(num_districts: usize, num_nodes: usize) -> Self {
        let capacity = (num_nodes / num_districts.max(1)).saturating_add(1);
        Self {
            members: (0..num_districts).map(|_| Vec::with_capacity(capacity)).collect(),
            index: vec![None; num_nodes],
        }
    }

    /// Number of districts.
    #[inline] pub(super) fn num_districts(&self) -> usize { self.members.len() }

    /// Number of blocks addressable by node index.
    #[inline] pub(super) fn num_nodes(&self) -> usize { self.index.len() }

    /// Return the district `node` is in, or `None` if unassigned.
    #[inline]
    pub(super) fn find(&self, node: usize) -> Option<usize> {
        debug_assert!(node < self.index.len(), "node out of range");
        self.index[node].map(|(district, _)| district)
    }

    /// Read-only view of the nodes in a district (unordered).
    #[inline]
    pub(super) fn get(&self, district: usize) -> &[usize] {
        debug_assert!(district < self.members.len(), "district out of range");
        &self.members[district]
    }

    /// Place an unassigned node into a district.
    pub(super) fn insert(&mut self, node: usize, district: usize) {
        assert!(district < self.members.len(), "district {district} out of range");
        assert!(self.index[node].is_none(), "node {node} is already assigned");
        let list = &mut self.members[district];
        self.index[node] = Some((district, list.len()));
        list.push(node);
    }

    /// Remove a node from its district, returning the district it left.
    pub(super) fn remove(&mut self, node: usize) -> Option<usize> {
        let (district, pos) = self.index[node]?;
        let list = &mut self.members[district];
        let last = list.pop()?;
        if pos < list.len() {
            list[pos] = last;
            self.index[last] = Some((district, pos));
        }
        self.index[node] = None;
        Some(district)
    }
}
