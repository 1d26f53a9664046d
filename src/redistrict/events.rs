use std::fmt;

use serde::Serialize;

use crate::types::BlockId;

/// Why the rebalancer left a block in its donor district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The block is the donor's only member.
    LastMember,
    /// The block does not touch the donor's remaining members.
    Detached,
    /// Removing the block would split the donor's remaining members.
    WouldSplit,
    /// No other district has headroom (and, if required, adjacency) for the block.
    NoReceiver,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RejectReason::LastMember => "it is the district's last member",
            RejectReason::Detached => "it does not touch the rest of the district",
            RejectReason::WouldSplit => "removing it would split the district",
            RejectReason::NoReceiver => "no other district can take it",
        })
    }
}

/// A single decision made while districting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A block founded an empty district.
    Seeded { block: BlockId, district: usize, population: f64 },
    /// A block joined a district it borders; `population` is the district's new total.
    Assigned { block: BlockId, district: usize, population: f64 },
    /// No district could take the block during greedy assignment.
    Unassigned { block: BlockId, population: f64 },
    /// The rebalancer moved a block between districts.
    Moved { block: BlockId, from: usize, to: usize },
    /// The rebalancer considered a block and kept it in place.
    MoveRejected { block: BlockId, district: usize, reason: RejectReason },
    /// A rebalancing sweep over all districts completed.
    SweepFinished { sweep: usize, moves: usize },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Seeded { block, district, population } =>
                write!(f, "block {block} seeds district {district} (population {population})"),
            Event::Assigned { block, district, population } =>
                write!(f, "block {block} -> district {district} (population {population})"),
            Event::Unassigned { block, population } =>
                write!(f, "block {block} (population {population}) could not be assigned"),
            Event::Moved { block, from, to } =>
                write!(f, "moved block {block} from district {from} to district {to}"),
            Event::MoveRejected { block, district, reason } =>
                write!(f, "kept block {block} in district {district}: {reason}"),
            Event::SweepFinished { sweep, moves } =>
                write!(f, "sweep {sweep} finished with {moves} moves"),
        }
    }
}

/// Ordered record of every decision in a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn push(&mut self, event: Event) { self.events.push(event) }

    #[inline] pub fn len(&self) -> usize { self.events.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.events.is_empty() }

    #[inline] pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ { self.events.iter() }

    /// Number of successful rebalancing moves.
    pub fn moves(&self) -> usize {
        self.iter().filter(|event| matches!(event, Event::Moved { .. })).count()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter { self.events.iter() }
}
