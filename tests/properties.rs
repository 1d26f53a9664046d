// Invariants checked over seeded random grid instances.

use std::collections::{HashMap, HashSet};

use rand::{rngs::StdRng, Rng, SeedableRng};

use greedymander::{
    gerrymander, rank_blocks, rebalance_plan, Affiliation, Block, BlockGraph, BlockId, DemographicTable, Event,
    Params, Population, RebalanceStatus, ReceiverPolicy,
};

struct Instance {
    blocks: Vec<Block>,
    edges: Vec<(BlockId, BlockId)>,
}

impl Instance {
    /// A `width` x `height` grid with some edges dropped and integer populations.
    fn random(seed: u64, width: i64, height: i64) -> Self {
        Self::generate(seed, width, height, |rng| rng.random_range(0..=20) as f64)
    }

    /// Like [`random`](Self::random), with populations given to one decimal place.
    fn fractional(seed: u64, width: i64, height: i64) -> Self {
        Self::generate(seed, width, height, |rng| rng.random_range(0..=200) as f64 / 10.0)
    }

    fn generate(seed: u64, width: i64, height: i64, mut draw_population: impl FnMut(&mut StdRng) -> f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let id = |x: i64, y: i64| BlockId(y * width + x + 1);

        let mut blocks = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let population = draw_population(&mut rng);
                let favorable = (population * rng.random::<f64>() * 10.0).floor() / 10.0;
                blocks.push(Block::new(id(x, y), population, favorable.min(population)).unwrap());
            }
        }

        let mut edges = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if x + 1 < width && rng.random::<f64>() < 0.85 { edges.push((id(x, y), id(x + 1, y))) }
                if y + 1 < height && rng.random::<f64>() < 0.85 { edges.push((id(x, y), id(x, y + 1))) }
            }
        }

        Self { blocks, edges }
    }

    fn build(&self) -> (BlockGraph, DemographicTable) {
        let table = DemographicTable::new(self.blocks.clone()).unwrap();
        let graph = BlockGraph::from_edges(&table, self.edges.iter().copied()).unwrap();
        (graph, table)
    }

    fn adjacency(&self) -> HashSet<(BlockId, BlockId)> {
        self.edges.iter().flat_map(|&(a, b)| [(a, b), (b, a)]).collect()
    }

    fn population(&self, id: BlockId) -> Population {
        self.blocks.iter().find(|block| block.id() == id).unwrap().population()
    }

    fn instances(seed: u64, width: i64, height: i64) -> [Self; 2] {
        [Self::random(seed, width, height), Self::fractional(seed, width, height)]
    }
}

fn param_grid() -> Vec<Params> {
    let mut grid = Vec::new();
    for num_districts in [1, 2, 3, 5] {
        for affiliation in [Affiliation::Primary, Affiliation::Complement] {
            for receiver_policy in [ReceiverPolicy::Contiguous, ReceiverPolicy::Unchecked] {
                grid.push(Params { num_districts, affiliation, receiver_policy, max_sweeps: 20 });
            }
        }
    }
    grid
}

#[test]
fn population_is_conserved() {
    for seed in 0..10 {
        for instance in Instance::instances(seed, 6, 5) {
            for params in param_grid() {
                let (graph, table) = instance.build();
                let total = table.total_population();
                let outcome = gerrymander(graph, table, &params).unwrap();

                let assigned = outcome.partition().iter().flatten().map(|&id| instance.population(id)).sum::<Population>();
                let unassigned = outcome.unassigned().iter().map(|&id| instance.population(id)).sum::<Population>();
                assert_eq!(assigned + unassigned, total, "seed {seed}, {params:?}");

                for (district, members) in outcome.partition().iter().enumerate() {
                    let members = members.iter().map(|&id| instance.population(id)).sum::<Population>();
                    assert_eq!(outcome.districts().district(district).population(), members, "seed {seed}, {params:?}");
                }
                assert_eq!(outcome.districts().assigned_population() + outcome.districts().unassigned_population(), total);
            }
        }
    }
}

#[test]
fn every_placement_touches_the_district() {
    for seed in 0..10 {
        let instance = Instance::random(seed, 6, 5);
        let adjacency = instance.adjacency();

        for params in param_grid() {
            let (graph, table) = instance.build();
            let outcome = gerrymander(graph, table, &params).unwrap();

            // Replay the greedy decisions and check each against the members present before it.
            let mut members: HashMap<usize, Vec<BlockId>> = HashMap::new();
            for event in outcome.events() {
                match *event {
                    Event::Seeded { block, district, .. } => {
                        assert!(members.get(&district).is_none_or(Vec::is_empty));
                        members.entry(district).or_default().push(block);
                    }
                    Event::Assigned { block, district, .. } => {
                        let current = members.entry(district).or_default();
                        assert!(current.iter().any(|&m| adjacency.contains(&(m, block))),
                            "seed {seed}: block {block} placed without touching district {district}");
                        current.push(block);
                    }
                    _ => {}
                }
            }

            // Greedy districts stay connected; contiguous rebalancing keeps them so.
            if params.receiver_policy == ReceiverPolicy::Contiguous {
                for district in 0..params.num_districts {
                    assert!(outcome.districts().is_connected(district), "seed {seed}, district {district}");
                }
            }
        }
    }
}

#[test]
fn no_district_exceeds_target() {
    for seed in 0..10 {
        for instance in Instance::instances(seed, 5, 5) {
            for params in param_grid() {
                let (graph, table) = instance.build();
                let outcome = gerrymander(graph, table, &params).unwrap();
                let target = outcome.target_population();
                assert!(outcome.districts().districts().iter().all(|d| d.population() <= target));
                assert_eq!(outcome.rebalance().status, RebalanceStatus::Balanced, "seed {seed}, {params:?}");
                assert_eq!(outcome.rebalance().sweeps, 0);
            }
        }
    }
}

#[test]
fn ranking_is_non_increasing_with_ascending_ties() {
    for seed in 0..10 {
        let instance = Instance::random(seed, 8, 8);
        let (_, table) = instance.build();
        for affiliation in [Affiliation::Primary, Affiliation::Complement] {
            let ranked = rank_blocks(&table, affiliation);
            assert_eq!(ranked.len(), table.len());
            for pair in ranked.windows(2) {
                assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score { assert!(pair[0].id < pair[1].id) }
            }
        }
    }
}

#[test]
fn runs_are_deterministic() {
    for seed in 0..5 {
        let instance = Instance::random(seed, 7, 6);
        for params in param_grid() {
            let (graph, table) = instance.build();
            let first = gerrymander(graph, table, &params).unwrap();
            let (graph, table) = instance.build();
            let second = gerrymander(graph, table, &params).unwrap();

            assert_eq!(first.partition(), second.partition());
            assert_eq!(first.unassigned(), second.unassigned());
            assert_eq!(first.events(), second.events());
        }
    }
}

#[test]
fn rebalancing_random_plans_terminates_and_conserves() {
    for seed in 0..20 {
        let instance = if seed % 2 == 0 { Instance::random(seed, 6, 6) } else { Instance::fractional(seed, 6, 6) };
        let mut rng = StdRng::seed_from_u64(seed + 1000);

        for (num_districts, max_sweeps) in [(2, 1), (3, 2), (4, 50)] {
            // Random plans are neither balanced nor contiguous.
            let mut plan = Vec::new();
            for block in &instance.blocks {
                if rng.random::<f64>() < 0.9 { plan.push((block.id(), rng.random_range(0..num_districts))) }
            }

            for receiver_policy in [ReceiverPolicy::Contiguous, ReceiverPolicy::Unchecked] {
                let (graph, table) = instance.build();
                let total = table.total_population();
                let params = Params { num_districts, max_sweeps, receiver_policy, ..Params::default() };
                let outcome = rebalance_plan(graph, table, &plan, &params).unwrap();

                let report = outcome.rebalance();
                assert!(report.sweeps <= max_sweeps);
                assert_eq!(report.moves, outcome.events().moves());

                let over = outcome.districts().districts().iter().any(|d| d.population() > outcome.target_population());
                assert_eq!(report.status == RebalanceStatus::Balanced, !over);

                // Rebalancing never unassigns: the same blocks stay placed.
                assert_eq!(outcome.assignments().len(), plan.len());
                let assigned = outcome.districts().assigned_population();
                let unassigned = outcome.districts().unassigned_population();
                assert_eq!(assigned + unassigned, total);
                for (district, members) in outcome.partition().iter().enumerate() {
                    let members = members.iter().map(|&id| instance.population(id)).sum::<Population>();
                    assert_eq!(outcome.districts().district(district).population(), members, "seed {seed}, {params:?}");
                }
            }
        }
    }
}
