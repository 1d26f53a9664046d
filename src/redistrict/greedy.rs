use crate::{
    partition::DistrictSet,
    redistrict::{Event, EventLog, RankedBlock},
    types::Population,
};

/// Place blocks in ranked order into the first district (by id) that has room
/// for them and is either empty or adjacent.
///
/// This is a single forward pass with no backtracking. Blocks already assigned
/// are skipped. Returns the nodes that could not be placed.
pub fn assign_greedy(districts: &mut DistrictSet, ranking: &[RankedBlock], target: Population, events: &mut EventLog) -> Vec<usize> {
    let mut unassigned = Vec::new();

    for ranked in ranking {
        let node = ranked.node;
        if districts.assignment(node).is_some() { continue }

        let block = *districts.block(node);
        let choice = (0..districts.num_districts()).find(|&district| {
            districts.district(district).population() + block.population() <= target
                && districts.can_join(district, node)
        });

        match choice {
            Some(district) => {
                let seeded = districts.district(district).is_empty();
                districts.assign(node, district);
                let population = districts.district(district).population().to_f64();
                events.push(if seeded {
                    Event::Seeded { block: block.id(), district, population }
                } else {
                    Event::Assigned { block: block.id(), district, population }
                });
            }
            None => {
                events.push(Event::Unassigned { block: block.id(), population: block.population().to_f64() });
                unassigned.push(node);
            }
        }
    }

    unassigned
}
