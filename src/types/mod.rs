mod block_id;
mod population;

pub use block_id::BlockId;
pub use population::Population;
