// src/process/mod.rs

use arrow::record_batch::RecordBatch;
use std::fmt;

pub mod columnar;
pub mod columns;
pub mod csv;
pub mod decompress;
pub mod sheet;

pub use columnar::{read_shape, write_parquet};
pub use columns::{coerce_text_columns, normalize_column_name, normalize_columns};
pub use csv::parse_csv;
pub use decompress::gunzip;
pub use sheet::read_sheet;

/// Row and column counts of a frame or a written file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub fn of(batch: &RecordBatch) -> Self {
        Self {
            rows: batch.num_rows(),
            columns: batch.num_columns(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}
