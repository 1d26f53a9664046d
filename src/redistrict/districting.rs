use std::sync::Arc;

use anyhow::Result;

use crate::{
    data::DemographicTable,
    error::InputError,
    graph::BlockGraph,
    partition::DistrictSet,
    plan::{summarize, DistrictSummary},
    redistrict::{assign_greedy, rank_blocks, rebalance, EventLog, Params, RebalanceReport},
    types::{BlockId, Population},
};

/// Final partition of a districting run, with everything it could not resolve.
#[derive(Debug, Clone)]
pub struct Outcome {
    districts: DistrictSet,
    target: Population,
    rebalance: RebalanceReport,
    events: EventLog,
}

impl Outcome {
    /// Get the final districts.
    #[inline] pub fn districts(&self) -> &DistrictSet { &self.districts }

    /// Get the member block identifiers of every district, ascending within each.
    #[inline] pub fn partition(&self) -> Vec<Vec<BlockId>> { self.districts.partition() }

    /// Get the blocks left outside every district, ascending.
    pub fn unassigned(&self) -> Vec<BlockId> {
        let mut ids = self.districts.unassigned().into_iter()
            .map(|node| self.districts.block(node).id())
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    /// Get the per-district population ceiling used by the run.
    #[inline] pub fn target_population(&self) -> Population { self.target }

    /// Get the result of the rebalancing pass.
    #[inline] pub fn rebalance(&self) -> &RebalanceReport { &self.rebalance }

    /// Get every decision made during the run, in order.
    #[inline] pub fn events(&self) -> &EventLog { &self.events }

    /// Get population and affiliation totals for each district.
    #[inline] pub fn summaries(&self) -> Vec<DistrictSummary> { summarize(&self.districts, self.target) }

    /// Get `(block, district)` pairs for every assigned block, ascending by block.
    pub fn assignments(&self) -> Vec<(BlockId, usize)> {
        let mut pairs = (0..self.districts.num_nodes())
            .filter_map(|node| self.districts.assignment(node).map(|district| (self.districts.block(node).id(), district)))
            .collect::<Vec<_>>();
        pairs.sort_unstable();
        pairs
    }
}

/// Total population divided evenly across `num_districts`.
///
/// A district is within the target exactly when its population times
/// `num_districts` does not exceed the total.
pub fn target_population(table: &DemographicTable, num_districts: usize) -> Population {
    table.total_population().share(num_districts)
}

/// Validate a run's inputs and set up empty districts over them.
fn empty_districts(graph: Arc<BlockGraph>, table: Arc<DemographicTable>, params: &Params) -> Result<DistrictSet> {
    params.validate()?;
    if graph.node_count() != table.len() {
        return Err(InputError::invalid(format!(
            "graph has {} blocks but the demographics table has {}", graph.node_count(), table.len())).into())
    }
    Ok(DistrictSet::new(params.num_districts, graph, table))
}

/// Rank blocks by favorability, place them greedily, then rebalance populations.
pub fn gerrymander(graph: impl Into<Arc<BlockGraph>>, table: impl Into<Arc<DemographicTable>>, params: &Params) -> Result<Outcome> {
    let table: Arc<DemographicTable> = table.into();
    let mut districts = empty_districts(graph.into(), table.clone(), params)?;
    let target = target_population(&table, params.num_districts);

    let ranking = rank_blocks(&table, params.affiliation);
    let mut events = EventLog::new();

    assign_greedy(&mut districts, &ranking, target, &mut events);
    let rebalance = rebalance(&mut districts, target, params.max_sweeps, params.receiver_policy, &mut events);

    Ok(Outcome { districts, target, rebalance, events })
}

/// Rebalance an existing plan of `(block, district)` pairs. Blocks not listed stay unassigned.
pub fn rebalance_plan(
    graph: impl Into<Arc<BlockGraph>>,
    table: impl Into<Arc<DemographicTable>>,
    assignments: &[(BlockId, usize)],
    params: &Params,
) -> Result<Outcome> {
    let table: Arc<DemographicTable> = table.into();
    let mut districts = empty_districts(graph.into(), table.clone(), params)?;
    let target = target_population(&table, params.num_districts);

    for &(block, district) in assignments {
        let node = table.node_of(block).ok_or(InputError::MissingDemographics { block })?;
        if district >= params.num_districts {
            return Err(InputError::malformed("plan",
                format!("block {block} is assigned to district {district}, expected < {}", params.num_districts)).into())
        }
        if districts.assignment(node).is_some() {
            return Err(InputError::malformed("plan", format!("block {block} appears more than once")).into())
        }
        districts.assign(node, district);
    }

    let mut events = EventLog::new();
    let rebalance = rebalance(&mut districts, target, params.max_sweeps, params.receiver_policy, &mut events);

    Ok(Outcome { districts, target, rebalance, events })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixtures::{build, scenario},
        redistrict::{Affiliation, RebalanceStatus, ReceiverPolicy},
    };

    #[test]
    fn scenario_outcome() {
        let (graph, table) = scenario();
        let outcome = gerrymander(graph, table, &Params::new(2)).unwrap();

        assert_eq!(outcome.target_population().to_f64(), 20.0);
        assert_eq!(outcome.partition(), vec![vec![BlockId(2), BlockId(3)], vec![BlockId(1)]]);
        assert_eq!(outcome.unassigned(), vec![BlockId(4)]);
        assert_eq!(outcome.rebalance().status, RebalanceStatus::Balanced);
        assert_eq!(outcome.rebalance().sweeps, 0);
        assert_eq!(outcome.assignments(), vec![(BlockId(1), 1), (BlockId(2), 0), (BlockId(3), 0)]);
    }

    #[test]
    fn complement_affiliation_reverses_order() {
        let (graph, table) = scenario();
        let params = Params { affiliation: Affiliation::Complement, ..Params::new(2) };
        let outcome = gerrymander(graph, table, &params).unwrap();

        // Ranking 4, 2, 1, 3: block 4 seeds 0, block 2 seeds 1, block 1 joins 1, block 3 joins 0.
        assert_eq!(outcome.partition(), vec![vec![BlockId(3), BlockId(4)], vec![BlockId(1), BlockId(2)]]);
        assert!(outcome.unassigned().is_empty());
    }

    #[test]
    fn invalid_params_fail_before_running() {
        let (graph, table) = scenario();
        let err = gerrymander(graph, table, &Params::new(0)).unwrap_err();
        assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::InvalidParameter { .. })));
    }

    #[test]
    fn rebalances_existing_plan() {
        let (graph, table) = scenario();
        let plan = [(BlockId(1), 0), (BlockId(2), 0), (BlockId(3), 0), (BlockId(4), 1)];
        let outcome = rebalance_plan(graph, table, &plan, &Params::new(2)).unwrap();

        assert!(outcome.rebalance().is_balanced());
        assert_eq!(outcome.partition(), vec![vec![BlockId(1), BlockId(2)], vec![BlockId(3), BlockId(4)]]);
        assert_eq!(outcome.events().moves(), 1);
    }

    #[test]
    fn rejects_bad_plans() {
        let (graph, table) = scenario();
        let err = rebalance_plan(graph.clone(), table.clone(), &[(BlockId(9), 0)], &Params::new(2)).unwrap_err();
        assert_eq!(err.downcast_ref::<InputError>(), Some(&InputError::MissingDemographics { block: BlockId(9) }));

        let err = rebalance_plan(graph.clone(), table.clone(), &[(BlockId(1), 2)], &Params::new(2)).unwrap_err();
        assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::Malformed { table: "plan", .. })));

        let err = rebalance_plan(graph, table, &[(BlockId(1), 0), (BlockId(1), 1)], &Params::new(2)).unwrap_err();
        assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::Malformed { table: "plan", .. })));
    }

    #[test]
    fn mismatched_graph_is_rejected() {
        let (graph, _) = scenario();
        let (_, table) = build(&[(1, 10.0, 8.0), (2, 10.0, 2.0)], &[(1, 2)]);

        let err = gerrymander(graph.clone(), table.clone(), &Params::new(2)).unwrap_err();
        assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::InvalidParameter { .. })));

        let err = rebalance_plan(graph, table, &[], &Params::new(2)).unwrap_err();
        assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::InvalidParameter { .. })));
    }

    #[test]
    fn fractional_plan_is_balanced_without_drift() {
        let (graph, table) = build(&[(1, 0.1, 0.0), (2, 0.2, 0.0), (3, 0.1, 0.0)], &[(1, 2), (2, 3)]);
        let plan = [(BlockId(1), 0), (BlockId(2), 0), (BlockId(3), 0)];
        let params = Params { receiver_policy: ReceiverPolicy::Unchecked, ..Params::new(2) };
        let outcome = rebalance_plan(graph, table, &plan, &params).unwrap();

        assert_eq!(outcome.target_population().to_f64(), 0.2);
        assert_eq!(outcome.rebalance().status, RebalanceStatus::Balanced);
        assert_eq!(outcome.rebalance().moves, 2);
        assert_eq!(outcome.partition(), vec![vec![BlockId(2)], vec![BlockId(1), BlockId(3)]]);
    }
}
