mod csv;
mod load;

pub use load::{load_hierarchy, load_inputs, read_plan, write_plan};
