use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer identifier of a block, as it appears in the input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub i64);

impl BlockId {
    /// Get the raw integer identifier.
    #[inline] pub fn get(self) -> i64 { self.0 }
}

impl From<i64> for BlockId {
    #[inline] fn from(id: i64) -> Self { Self(id) }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}
