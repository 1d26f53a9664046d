use serde::Serialize;

use crate::{data::Block, types::Population};

/// Cached aggregates of a single district.
///
/// Only [`DistrictSet`](super::DistrictSet) mutates these, in lockstep with membership.
/// Counts are fixed point, so the cache always equals the sum over current members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct District {
    id: usize,
    len: usize,
    population: Population,
    favorable: Population,
}

impl District {
    pub(super) fn new(id: usize) -> Self {
        Self { id, len: 0, population: Population::ZERO, favorable: Population::ZERO }
    }

    /// Position of this district in its set.
    #[inline] pub fn id(&self) -> usize { self.id }

    /// Number of member blocks.
    #[inline] pub fn len(&self) -> usize { self.len }

    /// Check if the district has no members.
    #[inline] pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Sum of member populations.
    #[inline] pub fn population(&self) -> Population { self.population }

    /// Sum of member favorable counts.
    #[inline] pub fn favorable(&self) -> Population { self.favorable }

    /// Population not counted as favorable.
    #[inline] pub fn complement(&self) -> Population { self.population - self.favorable }

    pub(super) fn add(&mut self, block: &Block) {
        self.len += 1;
        self.population += block.population();
        self.favorable += block.favorable();
    }

    pub(super) fn subtract(&mut self, block: &Block) {
        debug_assert!(self.len > 0, "cannot subtract from empty district {}", self.id);
        self.len -= 1;
        self.population -= block.population();
        self.favorable -= block.favorable();
    }
}
