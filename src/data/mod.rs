mod demographics;

pub use demographics::{Block, DemographicTable};
