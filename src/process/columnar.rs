// src/process/columnar.rs

use anyhow::{Context, Result};
use arrow::record_batch::RecordBatch;
use parquet::arrow::{arrow_reader::ParquetRecordBatchReaderBuilder, ArrowWriter};
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::{fs::File, path::Path};

use super::Shape;

/// Write `batch` as a single Parquet file, replacing whatever is at `path`.
pub fn write_parquet(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))
        .with_context(|| format!("creating Arrow writer for {:?}", path))?;
    writer
        .write(batch)
        .with_context(|| format!("writing {:?}", path))?;
    writer
        .close()
        .with_context(|| format!("closing {:?}", path))?;
    Ok(())
}

/// Read a Parquet file back in full and report its shape.
pub fn read_shape(path: &Path) -> Result<Shape> {
    let file = File::open(path).with_context(|| format!("opening {:?}", path))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| format!("reading Parquet metadata from {:?}", path))?;
    let columns = builder.schema().fields().len();
    let reader = builder.build()?;

    let mut rows = 0;
    for batch in reader {
        rows += batch
            .with_context(|| format!("decoding {:?}", path))?
            .num_rows();
    }
    Ok(Shape { rows, columns })
}
