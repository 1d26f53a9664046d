//! CSV reading operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{Column, CsvReader, DataType}};

use crate::{data::Block, error::InputError, types::BlockId};

/// Reads a CSV file from `path` into a Polars DataFrame.
/// Unparseable content is reported as a malformed `table`.
pub(crate) fn read_csv(path: &Path, table: &'static str) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReader::new(file)
        .finish()
        .map_err(|e| InputError::malformed(table, e.to_string()))
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads CSV text into a Polars DataFrame.
#[cfg(test)]
pub(crate) fn read_csv_str(csv: &str, table: &'static str) -> Result<DataFrame> {
    CsvReader::new(std::io::Cursor::new(csv.as_bytes()))
        .finish()
        .map_err(|e| InputError::malformed(table, e.to_string()))
        .context("[io::csv::read] Failed to read CSV from string")
}

/// Look up a column, rejecting tables that lack it or leave cells empty.
fn column<'a>(df: &'a DataFrame, table: &'static str, name: &str) -> Result<&'a Column> {
    let column = df.column(name)
        .map_err(|_| InputError::malformed(table, format!("missing column '{name}'")))?;
    if column.null_count() > 0 {
        return Err(InputError::malformed(table, format!("column '{name}' has {} empty cells", column.null_count())).into())
    }
    Ok(column)
}

/// Read a column of integers, rejecting non-numeric values.
fn int_column(df: &DataFrame, table: &'static str, name: &str) -> Result<Vec<i64>> {
    let column = column(df, table, name)?;
    if !(column.dtype().is_integer() || column.dtype() == &DataType::String) {
        return Err(InputError::malformed(table, format!("column '{name}' must hold integers, found {}", column.dtype())).into())
    }
    let values = column.strict_cast(&DataType::Int64)
        .map_err(|_| InputError::malformed(table, format!("column '{name}' has non-integer values")))?;
    Ok(values.i64()?.into_no_null_iter().collect())
}

/// Read a column of real numbers, rejecting non-numeric values.
fn float_column(df: &DataFrame, table: &'static str, name: &str) -> Result<Vec<f64>> {
    let column = column(df, table, name)?;
    let values = column.strict_cast(&DataType::Float64)
        .map_err(|_| InputError::malformed(table, format!("column '{name}' has non-numeric values")))?;
    Ok(values.f64()?.into_no_null_iter().collect())
}

/// Read `(blockA, blockB)` edge rows.
pub(crate) fn read_edges(df: &DataFrame, table: &'static str) -> Result<Vec<(BlockId, BlockId)>> {
    let a = int_column(df, table, "blockA")?;
    let b = int_column(df, table, "blockB")?;
    Ok(a.into_iter().zip(b).map(|(a, b)| (BlockId(a), BlockId(b))).collect())
}

/// Read `(block, population, favorable)` rows. The favorable column may be named
/// `num_positive` or `favorable_count`.
pub(crate) fn read_blocks(df: &DataFrame) -> Result<Vec<Block>> {
    const TABLE: &str = "demographics";

    let favorable_name = ["num_positive", "favorable_count"].into_iter()
        .find(|&name| df.column(name).is_ok())
        .ok_or_else(|| InputError::malformed(TABLE, "missing column 'num_positive' (or 'favorable_count')"))?;

    let ids = int_column(df, TABLE, "block")?;
    let populations = float_column(df, TABLE, "population")?;
    let favorables = float_column(df, TABLE, favorable_name)?;

    ids.into_iter().zip(populations).zip(favorables)
        .map(|((id, population), favorable)| Block::new(id, population, favorable))
        .collect()
}

/// Read `(block, district)` plan rows.
pub(crate) fn read_assignments(df: &DataFrame) -> Result<Vec<(BlockId, usize)>> {
    const TABLE: &str = "plan";

    let ids = int_column(df, TABLE, "block")?;
    let districts = int_column(df, TABLE, "district")?;

    ids.into_iter().zip(districts)
        .map(|(id, district)| -> Result<(BlockId, usize)> {
            let district = usize::try_from(district)
                .map_err(|_| InputError::malformed(TABLE, format!("block {id} has negative district {district}")))?;
            Ok((BlockId(id), district))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<InputError>(), Some(InputError::Malformed { .. }))
    }

    #[test]
    fn reads_edge_rows() {
        let df = read_csv_str("blockA,blockB\n1,2\n2,3\n", "adjacency").unwrap();
        assert_eq!(read_edges(&df, "adjacency").unwrap(), vec![(BlockId(1), BlockId(2)), (BlockId(2), BlockId(3))]);
    }

    #[test]
    fn reads_demographics_with_either_column_name() {
        let legacy = read_csv_str("block,population,num_positive\n1,10,8\n2,10.5,2\n", "demographics").unwrap();
        let blocks = read_blocks(&legacy).unwrap();
        assert_eq!(blocks, vec![Block::new(1, 10.0, 8.0).unwrap(), Block::new(2, 10.5, 2.0).unwrap()]);

        let renamed = read_csv_str("block,population,favorable_count\n7,3,1\n", "demographics").unwrap();
        assert_eq!(read_blocks(&renamed).unwrap(), vec![Block::new(7, 3.0, 1.0).unwrap()]);
    }

    #[test]
    fn missing_column_is_malformed() {
        let df = read_csv_str("blockA,other\n1,2\n", "adjacency").unwrap();
        assert!(malformed(&read_edges(&df, "adjacency").unwrap_err()));

        let df = read_csv_str("block,population\n1,2\n", "demographics").unwrap();
        assert!(malformed(&read_blocks(&df).unwrap_err()));
    }

    #[test]
    fn non_numeric_values_are_malformed() {
        let df = read_csv_str("block,population,num_positive\n1,ten,8\n", "demographics").unwrap();
        assert!(malformed(&read_blocks(&df).unwrap_err()));

        let df = read_csv_str("blockA,blockB\n1,x\n", "adjacency").unwrap();
        assert!(malformed(&read_edges(&df, "adjacency").unwrap_err()));
    }

    #[test]
    fn empty_cells_are_malformed() {
        let df = read_csv_str("block,population,num_positive\n1,10,\n2,10,3\n", "demographics").unwrap();
        assert!(malformed(&read_blocks(&df).unwrap_err()));
    }

    #[test]
    fn out_of_range_counts_are_malformed() {
        let df = read_csv_str("block,population,num_positive\n1,10,11\n", "demographics").unwrap();
        assert!(malformed(&read_blocks(&df).unwrap_err()));
    }

    #[test]
    fn reads_plan_rows() {
        let df = read_csv_str("block,district\n3,0\n1,1\n", "plan").unwrap();
        assert_eq!(read_assignments(&df).unwrap(), vec![(BlockId(3), 0), (BlockId(1), 1)]);

        let df = read_csv_str("block,district\n3,-1\n", "plan").unwrap();
        assert!(malformed(&read_assignments(&df).unwrap_err()));
    }
}
