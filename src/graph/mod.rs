mod graph;
mod hierarchy;

pub use graph::BlockGraph;
pub use hierarchy::HierarchyGraph;
