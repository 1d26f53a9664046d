#![doc = "Greedy packing/cracking districting over a block adjacency graph"]
mod data;
mod error;
mod graph;
mod io;
mod partition;
mod plan;
mod redistrict;
mod types;

#[cfg(test)]
mod fixtures;

#[doc(inline)]
pub use data::{Block, DemographicTable};

#[doc(inline)]
pub use error::InputError;

#[doc(inline)]
pub use graph::{BlockGraph, HierarchyGraph};

#[doc(inline)]
pub use io::{load_hierarchy, load_inputs, read_plan, write_plan};

#[doc(inline)]
pub use partition::{District, DistrictSet};

#[doc(inline)]
pub use plan::{format_summaries, summarize, DistrictSummary};

#[doc(inline)]
pub use redistrict::{
    assign_greedy, favorability_score, gerrymander, rank_blocks, rebalance, rebalance_plan, target_population,
    Affiliation, Event, EventLog, Outcome, Params, RankedBlock, RebalanceReport, RebalanceStatus, ReceiverPolicy,
    RejectReason,
};

#[doc(inline)]
pub use types::{BlockId, Population};
