use thiserror::Error;

use crate::types::BlockId;

/// Hard failures raised while loading inputs or validating parameters.
///
/// These surface before the algorithm starts; infeasibilities discovered while
/// districting are reported in the [`Outcome`](crate::Outcome) instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A table row is missing a field or holds a value that cannot be used.
    #[error("malformed {table} table: {reason}")]
    Malformed { table: &'static str, reason: String },

    /// A block referenced by an edge (or a plan) has no demographics row.
    #[error("block {block} has no demographics row")]
    MissingDemographics { block: BlockId },

    /// A run parameter is out of range.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
}

impl InputError {
    pub(crate) fn malformed(table: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed { table, reason: reason.into() }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter { reason: reason.into() }
    }
}
