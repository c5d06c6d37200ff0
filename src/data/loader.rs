//! Dataset loading utilities
//!
//! Reads a sample table from Parquet or delimited text, pulls the binary
//! treatment-indicator column and the numeric feature columns, and splits
//! the rows into a control and a treatment matrix. The dataset path is
//! always passed explicitly by the caller; nothing is discovered from the
//! environment.

use crate::data::SampleMatrix;
use crate::error::{MatchError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};
use arrow::array::{Array, ArrayRef, Float64Array};
use arrow::compute;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Configuration for reading and splitting a sample table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Column whose non-zero values mark treatment rows
    pub indicator_column: String,

    /// Feature columns used for matching; `None` takes every numeric
    /// column except the indicator, in schema order
    pub feature_columns: Option<Vec<String>>,

    /// Whether delimited-text files carry a header row
    pub has_header: bool,

    /// Field delimiter for delimited-text files
    pub delimiter: char,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            indicator_column: "treatment".to_string(),
            feature_columns: None,
            has_header: true,
            delimiter: ',',
        }
    }
}

/// Load a sample table and split it on the treatment indicator
///
/// Files ending in `.parquet`/`.pq` are read as Parquet; anything else is
/// read as delimited text with an inferred schema. Rows with a missing
/// indicator or missing feature values are skipped with a logged warning.
///
/// # Returns
///
/// The `(control, treatment)` matrix pair, in dataset row order.
pub fn load_dataset(path: &Path, config: &DatasetConfig) -> Result<(SampleMatrix, SampleMatrix)> {
    log_operation_start("Loading sample data from", path);
    let start = Instant::now();

    let batches = match path.extension().and_then(|ext| ext.to_str()) {
        Some("parquet" | "pq") => read_parquet_batches(path)?,
        _ => read_delimited_batches(path, config)?,
    };

    let (control, treatment) = split_batches(&batches, config)?;

    log_operation_complete(
        "loaded",
        path,
        control.nrows() + treatment.nrows(),
        Some(start.elapsed()),
    );

    Ok((control, treatment))
}

/// Read a Parquet file into Arrow record batches
fn read_parquet_batches(path: &Path) -> Result<Vec<RecordBatch>> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(batches)
}

/// Read a delimited-text file into Arrow record batches
fn read_delimited_batches(path: &Path, config: &DatasetConfig) -> Result<Vec<RecordBatch>> {
    if !config.delimiter.is_ascii() {
        return Err(MatchError::Config(format!(
            "delimiter {:?} is not an ASCII character",
            config.delimiter
        )));
    }

    let format = arrow::csv::reader::Format::default()
        .with_header(config.has_header)
        .with_delimiter(config.delimiter as u8);

    let mut file = File::open(path)?;
    let (schema, _) = format.infer_schema(&mut file, Some(1000))?;

    // Inference consumed the handle; reopen for the actual read
    let file = File::open(path)?;
    let reader = arrow::csv::ReaderBuilder::new(Arc::new(schema))
        .with_format(format)
        .build(file)?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(batches)
}

/// Split record batches into control and treatment matrices
fn split_batches(
    batches: &[RecordBatch],
    config: &DatasetConfig,
) -> Result<(SampleMatrix, SampleMatrix)> {
    let Some(first) = batches.first() else {
        return Err(MatchError::malformed("dataset holds no rows"));
    };

    let schema = first.schema();
    let indicator_idx = schema.index_of(&config.indicator_column).map_err(|_| {
        MatchError::malformed(format!(
            "indicator column {:?} not found in dataset",
            config.indicator_column
        ))
    })?;

    let feature_indices: Vec<usize> = match &config.feature_columns {
        Some(names) => names
            .iter()
            .map(|name| {
                schema.index_of(name).map_err(|_| {
                    MatchError::malformed(format!("feature column {name:?} not found in dataset"))
                })
            })
            .collect::<Result<_>>()?,
        None => schema
            .fields()
            .iter()
            .enumerate()
            .filter(|(idx, field)| *idx != indicator_idx && field.data_type().is_numeric())
            .map(|(idx, _)| idx)
            .collect(),
    };

    if feature_indices.is_empty() {
        return Err(MatchError::malformed(
            "dataset holds no numeric feature columns",
        ));
    }

    let mut control_rows = Vec::new();
    let mut treatment_rows = Vec::new();
    let mut skipped = 0usize;

    for batch in batches {
        let indicator = cast_to_f64(batch.column(indicator_idx))?;
        let features: Vec<Float64Array> = feature_indices
            .iter()
            .map(|&idx| cast_to_f64(batch.column(idx)))
            .collect::<Result<_>>()?;

        for row in 0..batch.num_rows() {
            if indicator.is_null(row) || features.iter().any(|column| column.is_null(row)) {
                skipped += 1;
                continue;
            }

            let values: Vec<f64> = features.iter().map(|column| column.value(row)).collect();
            if indicator.value(row) == 0.0 {
                control_rows.push(values);
            } else {
                treatment_rows.push(values);
            }
        }
    }

    if skipped > 0 {
        log_warning(&format!("Skipped {skipped} rows with missing values"), None);
    }

    Ok((
        SampleMatrix::from_rows(control_rows)?,
        SampleMatrix::from_rows(treatment_rows)?,
    ))
}

/// Cast any numeric-compatible Arrow column to `Float64`
fn cast_to_f64(array: &ArrayRef) -> Result<Float64Array> {
    let casted = compute::cast(array, &DataType::Float64)?;
    casted
        .as_any()
        .downcast_ref::<Float64Array>()
        .cloned()
        .ok_or_else(|| MatchError::malformed("column cannot be read as numeric values"))
}
