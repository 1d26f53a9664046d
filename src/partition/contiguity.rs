use std::collections::VecDeque;

use crate::partition::DistrictSet;

impl DistrictSet {
    /// Check if a node shares an edge with any current member of a district.
    ///
    /// Costs O(degree) rather than O(district size). When `node` is itself a member,
    /// this asks whether it touches the rest of its district.
    pub fn is_contiguous(&self, district: usize, node: usize) -> bool {
        assert!(node < self.num_nodes(), "node {} out of range", node);
        assert!(district < self.num_districts(), "district must be in range [0, {})", self.num_districts());

        self.graph().edges(node).any(|v| self.assignment(v) == Some(district))
    }

    /// Check if a node may join a district: the district is empty or the node borders it.
    #[inline]
    pub fn can_join(&self, district: usize, node: usize) -> bool {
        self.district(district).is_empty() || self.is_contiguous(district, node)
    }

    /// Check if removing `node` from its district leaves the remaining members connected
    /// wherever they were connected through `node`.
    pub fn removal_keeps_connected(&self, node: usize) -> bool {
        assert!(node < self.num_nodes(), "node {} out of range", node);

        // Unassigned: removing it cannot break contiguity of a district.
        let Some(prev) = self.assignment(node) else { return true };

        // Collect neighbors that are in the same district.
        let neighbors = self.graph().edges(node)
            .filter(|&v| self.assignment(v) == Some(prev))
            .collect::<Vec<_>>();

        // If fewer than 2 same-district neighbors, removing `node` cannot disconnect them.
        if neighbors.len() <= 1 { return true }

        // Track which same-district neighbors have been reached.
        let mut targets = vec![false; self.num_nodes()];
        neighbors.iter().for_each(|&v| targets[v] = true);

        // BFS from one neighbor within `prev`, forbidding `node`.
        let mut visited = vec![false; self.num_nodes()];
        visited[node] = true;
        visited[neighbors[0]] = true;

        let mut remaining = neighbors.len() - 1;
        let mut queue = VecDeque::from([neighbors[0]]);
        while let Some(u) = queue.pop_front() {
            for v in self.graph().edges(u) {
                if !visited[v] && self.assignment(v) == Some(prev) {
                    visited[v] = true;
                    queue.push_back(v);

                    // Early exit once every same-district neighbor is reached.
                    if targets[v] { remaining -= 1; if remaining == 0 { return true } }
                }
            }
        }

        false
    }

    /// Check if the members of a district form a single connected piece.
    /// Empty and single-member districts are connected.
    pub fn is_connected(&self, district: usize) -> bool {
        let members = self.members(district);
        let Some(&start) = members.first() else { return true };

        let mut visited = vec![false; self.num_nodes()];
        visited[start] = true;

        let mut seen = 1;
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for v in self.graph().edges(u) {
                if !visited[v] && self.assignment(v) == Some(district) {
                    visited[v] = true;
                    seen += 1;
                    queue.push_back(v);
                }
            }
        }

        seen == members.len()
    }
}
