use rayon::prelude::*;
use serde::Serialize;

use crate::{
    data::{Block, DemographicTable},
    redistrict::Affiliation,
    types::BlockId,
};

/// A block together with its favorability score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedBlock {
    pub node: usize,
    pub id: BlockId,
    pub score: f64,
}

/// Share of a block's population favoring `affiliation`; zero for empty blocks.
pub fn favorability_score(block: &Block, affiliation: Affiliation) -> f64 {
    if block.population().is_zero() { return 0.0 }
    let share = match affiliation {
        Affiliation::Primary => block.favorable(),
        Affiliation::Complement => block.complement(),
    };
    share.to_f64() / block.population().to_f64()
}

/// Order every block by descending score, breaking ties by ascending identifier.
pub fn rank_blocks(table: &DemographicTable, affiliation: Affiliation) -> Vec<RankedBlock> {
    // Scores depend only on static per-block data, so compute them in parallel
    // and sort the materialized result sequentially.
    let mut ranked = table.blocks().par_iter()
        .enumerate()
        .map(|(node, block)| RankedBlock { node, id: block.id(), score: favorability_score(block, affiliation) })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.id.cmp(&b.id)));
    ranked
}
