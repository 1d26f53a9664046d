use ahash::AHashMap;
use anyhow::Result;
use serde::Serialize;

use crate::{error::InputError, types::{BlockId, Population}};

/// Population and favorable-affiliation counts for a single block.
///
/// Counts are only reachable through [`Block::new`], so `favorable <= population` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Block {
    id: BlockId,
    population: Population,
    favorable: Population,
}

impl Block {
    /// Construct a block, rejecting counts that cannot describe a real population.
    pub fn new(id: impl Into<BlockId>, population: f64, favorable: f64) -> Result<Self> {
        let id = id.into();
        let Some(counted) = Population::from_f64(population) else {
            return Err(InputError::malformed("demographics",
                format!("block {id} has invalid population {population}")).into())
        };
        let Some(favorable_count) = Population::from_f64(favorable).filter(|&count| favorable <= population && count <= counted) else {
            return Err(InputError::malformed("demographics",
                format!("block {id} has favorable count {favorable} outside [0, {population}]")).into())
        };
        Ok(Self { id, population: counted, favorable: favorable_count })
    }

    #[inline] pub fn id(&self) -> BlockId { self.id }

    #[inline] pub fn population(&self) -> Population { self.population }

    #[inline] pub fn favorable(&self) -> Population { self.favorable }

    /// Population not counted as favorable.
    #[inline] pub fn complement(&self) -> Population { self.population - self.favorable }
}

/// Demographics for every block, stored densely by node index.
///
/// The node index of a block is its row position in this table; the block graph
/// shares the same indexing.
#[derive(Debug, Clone, Default)]
pub struct DemographicTable {
    blocks: Vec<Block>,
    index: AHashMap<BlockId, usize>,
    total_population: Population,
}

impl DemographicTable {
    /// Build a table from blocks. Duplicate identifiers, counts that break
    /// `favorable <= population`, and totals beyond [`Population::LIMIT`] are rejected.
    pub fn new(blocks: Vec<Block>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(blocks.len());
        let mut total_population = Population::ZERO;
        for (node, block) in blocks.iter().enumerate() {
            if block.favorable > block.population {
                return Err(InputError::malformed("demographics",
                    format!("block {} has favorable count {} above its population {}", block.id, block.favorable, block.population)).into())
            }
            if index.insert(block.id, node).is_some() {
                return Err(InputError::malformed("demographics",
                    format!("block {} appears more than once", block.id)).into())
            }
            total_population = total_population.checked_add(block.population)
                .ok_or_else(|| InputError::malformed("demographics",
                    format!("total population exceeds {}", Population::LIMIT)))?;
        }

        Ok(Self { blocks, index, total_population })
    }

    /// Number of blocks in the table.
    #[inline] pub fn len(&self) -> usize { self.blocks.len() }

    /// Check if the table has no blocks.
    #[inline] pub fn is_empty(&self) -> bool { self.blocks.is_empty() }

    /// Get the block stored at a node index.
    #[inline] pub fn block(&self, node: usize) -> &Block { &self.blocks[node] }

    /// Get all blocks in node order.
    #[inline] pub fn blocks(&self) -> &[Block] { &self.blocks }

    /// Look up the node index of a block identifier.
    #[inline] pub fn node_of(&self, id: BlockId) -> Option<usize> { self.index.get(&id).copied() }

    /// Look up a block by identifier.
    #[inline] pub fn get(&self, id: BlockId) -> Option<&Block> { self.node_of(id).map(|node| &self.blocks[node]) }

    /// Sum of the population of every block.
    #[inline] pub fn total_population(&self) -> Population { self.total_population }

    /// Sum of the favorable count of every block.
    pub fn total_favorable(&self) -> Population { self.blocks.iter().map(Block::favorable).sum() }
}
