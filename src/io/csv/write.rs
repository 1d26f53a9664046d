//! CSV writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::types::BlockId;

/// Write a DataFrame to a CSV file.
pub(crate) fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
}

/// Build a `block,district` DataFrame from plan assignments.
pub(crate) fn assignments_frame(assignments: &[(BlockId, usize)]) -> Result<DataFrame> {
    let (blocks, districts) = assignments.iter()
        .map(|&(block, district)| (block.get(), district as u32))
        .unzip::<_, _, Vec<_>, Vec<_>>();

    Ok(DataFrame::new(vec![
        Series::new("block".into(), blocks).into(),
        Series::new("district".into(), districts).into(),
    ])?)
}
