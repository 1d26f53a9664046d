mod summary;

pub use summary::{format_summaries, summarize, DistrictSummary};
