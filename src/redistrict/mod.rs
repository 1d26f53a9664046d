mod districting;
mod events;
mod greedy;
mod params;
mod ranker;
mod rebalance;

pub use districting::{gerrymander, rebalance_plan, target_population, Outcome};
pub use events::{Event, EventLog, RejectReason};
pub use greedy::assign_greedy;
pub use params::{Affiliation, Params, ReceiverPolicy};
pub use ranker::{favorability_score, rank_blocks, RankedBlock};
pub use rebalance::{rebalance, RebalanceReport, RebalanceStatus};
