use serde::Serialize;

use crate::{
    partition::DistrictSet,
    redistrict::{Event, EventLog, ReceiverPolicy, RejectReason},
    types::Population,
};

/// How a rebalancing run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RebalanceStatus {
    /// No district exceeds the target population.
    Balanced,
    /// A sweep moved nothing while some district still exceeds the target.
    Stalled,
    /// The sweep cap was reached while some district still exceeds the target.
    NonConvergent,
}

/// Summary of a rebalancing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RebalanceReport {
    pub status: RebalanceStatus,
    pub sweeps: usize,
    pub moves: usize,
}

impl RebalanceReport {
    /// Check if the run reached a population-balanced fixed point.
    #[inline] pub fn is_balanced(&self) -> bool { self.status == RebalanceStatus::Balanced }
}

/// Migrate blocks out of over-populated districts until no district exceeds
/// `target`, a sweep makes no move, or `max_sweeps` sweeps have run.
pub fn rebalance(districts: &mut DistrictSet, target: Population, max_sweeps: usize, policy: ReceiverPolicy, events: &mut EventLog) -> RebalanceReport {
    let mut sweeps = 0;
    let mut moves = 0;

    let status = loop {
        if !has_overpopulated(districts, target) { break RebalanceStatus::Balanced }
        if sweeps == max_sweeps { break RebalanceStatus::NonConvergent }

        sweeps += 1;
        let moved = sweep(districts, target, policy, events);
        events.push(Event::SweepFinished { sweep: sweeps, moves: moved });
        moves += moved;

        if moved == 0 { break RebalanceStatus::Stalled }
    };

    RebalanceReport { status, sweeps, moves }
}

fn has_overpopulated(districts: &DistrictSet, target: Population) -> bool {
    districts.districts().iter().any(|district| district.population() > target)
}

/// One pass over all districts in id order. Returns the number of moves made.
fn sweep(districts: &mut DistrictSet, target: Population, policy: ReceiverPolicy, events: &mut EventLog) -> usize {
    let mut moves = 0;

    for donor in 0..districts.num_districts() {
        if districts.district(donor).population() <= target { continue }

        let mut candidates = districts.members(donor).to_vec();
        candidates.sort_unstable_by_key(|&node| districts.block(node).id());

        for node in candidates {
            if districts.district(donor).population() <= target { break }

            // Moving an empty block cannot reduce the excess.
            if districts.block(node).population().is_zero() { continue }

            let id = districts.block(node).id();
            match try_move(districts, node, donor, target, policy) {
                Ok(to) => {
                    events.push(Event::Moved { block: id, from: donor, to });
                    moves += 1;
                }
                Err(reason) => events.push(Event::MoveRejected { block: id, district: donor, reason }),
            }
        }
    }

    moves
}

/// Move `node` out of `donor` into the first district that can take it.
fn try_move(districts: &mut DistrictSet, node: usize, donor: usize, target: Population, policy: ReceiverPolicy) -> Result<usize, RejectReason> {
    if districts.district(donor).len() == 1 { return Err(RejectReason::LastMember) }
    if !districts.is_contiguous(donor, node) { return Err(RejectReason::Detached) }
    if !districts.removal_keeps_connected(node) { return Err(RejectReason::WouldSplit) }

    let population = districts.block(node).population();
    let receiver = (0..districts.num_districts())
        .filter(|&district| district != donor)
        .find(|&district| {
            districts.district(district).population() + population <= target
                && (policy == ReceiverPolicy::Unchecked || districts.can_join(district, node))
        })
        .ok_or(RejectReason::NoReceiver)?;

    districts.move_node(node, receiver);
    Ok(receiver)
}
