// src/process/csv.rs

use anyhow::{bail, Context, Result};
use arrow::{
    compute::concat_batches,
    csv::{reader::Format, ReaderBuilder},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use regex::Regex;
use std::{io::Cursor, sync::Arc};
use tracing::debug;

use super::columns::unique_headers;

const BATCH_ROWS: usize = 64 * 1024;

/// Field values read as missing, both while inferring types and while reading.
const MISSING_VALUES: &str = r"^(|#N/A|#N/A N/A|#NA|-1\.#IND|-1\.#QNAN|-NaN|-nan|1\.#IND|1\.#QNAN|<NA>|N/A|NA|NULL|NaN|None|n/a|nan|null)$";

/// Parse a CSV payload with a header row into a single frame.
///
/// Empty fields and the usual missing-value markers (`NA`, `NaN`, `nan`,
/// `None`, `NULL`, `#N/A`, ...) are nulls, so a numeric column holding a few
/// of them stays numeric. Int64, Float64 and Boolean columns keep their
/// inferred type. A column with no values at all is read as Float64 nulls.
/// Everything else is read as Utf8. Short rows are padded with nulls. Long
/// rows are an error.
pub fn parse_csv(data: &[u8]) -> Result<RecordBatch> {
    let text = std::str::from_utf8(data).context("payload is not valid UTF-8")?;

    let format = Format::default()
        .with_header(true)
        .with_truncated_rows(true)
        .with_null_regex(Regex::new(MISSING_VALUES).context("compiling missing-value pattern")?);
    let (inferred, records) = format
        .infer_schema(Cursor::new(text.as_bytes()), None)
        .context("inferring CSV schema")?;
    if inferred.fields().is_empty() {
        bail!("no columns to parse from file");
    }

    let names = unique_headers(inferred.fields().iter().map(|f| f.name().as_str()));
    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .zip(names)
        .map(|(f, name)| Field::new(name, read_type(f.data_type()), true))
        .collect();
    let schema = Arc::new(Schema::new(fields));
    debug!(columns = schema.fields().len(), records, "inferred CSV schema");

    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .with_batch_size(BATCH_ROWS)
        .build(Cursor::new(text.as_bytes()))
        .context("creating CSV reader")?;
    let batches = reader
        .collect::<Result<Vec<_>, _>>()
        .context("reading CSV records")?;

    concat_batches(&schema, &batches).context("concatenating CSV batches")
}

fn read_type(inferred: &DataType) -> DataType {
    match inferred {
        DataType::Int64 | DataType::Float64 | DataType::Boolean => inferred.clone(),
        DataType::Null => DataType::Float64,
        _ => DataType::Utf8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, Float64Array, Int64Array, StringArray};

    #[test]
    fn test_parse_csv_types() -> Result<()> {
        let data = b"Drug Name,dose,active,approved,empty\n\
                     aspirin,1.5,true,2001-02-03,\n\
                     ibuprofen,2,false,2002-03-04,\n";
        let batch = parse_csv(data)?;
        assert_eq!(batch.num_rows(), 2);

        let types: Vec<_> = batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.data_type().clone())
            .collect();
        assert_eq!(
            types,
            vec![
                DataType::Utf8,
                DataType::Float64,
                DataType::Boolean,
                DataType::Utf8,
                DataType::Float64,
            ]
        );
        assert_eq!(batch.column(4).null_count(), 2);
        Ok(())
    }

    #[test]
    fn test_parse_csv_literal_nan_is_missing() -> Result<()> {
        let batch = parse_csv(b"name,flag\nabc,nan\ndef,yes\n")?;
        assert_eq!(batch.schema().field(1).data_type(), &DataType::Utf8);
        let flag = batch
            .column(1)
            .as_any()
            .downcast_ref::<StringArray>()
            .expect("flag should be text");
        assert!(flag.is_null(0));
        assert_eq!(flag.value(1), "yes");
        Ok(())
    }

    #[test]
    fn test_parse_csv_missing_markers() -> Result<()> {
        let data = b"note,dose,rank\n\
                     NA,1.5,1\n\
                     NaN,NaN,2\n\
                     None,N/A,3\n\
                     kept,#N/A,NULL\n\
                     null,2.5,4\n";
        let batch = parse_csv(data)?;
        let schema = batch.schema();
        assert_eq!(schema.field(0).data_type(), &DataType::Utf8);
        assert_eq!(schema.field(1).data_type(), &DataType::Float64);
        assert_eq!(schema.field(2).data_type(), &DataType::Int64);

        let note = batch
            .column(0)
            .as_any()
            .downcast_ref::<StringArray>()
            .expect("note should be text");
        assert_eq!(note.null_count(), 4);
        assert_eq!(note.value(3), "kept");

        let dose = batch
            .column(1)
            .as_any()
            .downcast_ref::<Float64Array>()
            .expect("dose should be float");
        assert_eq!(dose.null_count(), 3);
        assert_eq!(dose.value(0), 1.5);
        assert_eq!(dose.value(4), 2.5);

        let rank = batch
            .column(2)
            .as_any()
            .downcast_ref::<Int64Array>()
            .expect("rank should be integer");
        assert!(rank.is_null(3));
        assert_eq!(rank.value(4), 4);
        Ok(())
    }

    #[test]
    fn test_parse_csv_all_missing_column_is_float() -> Result<()> {
        let batch = parse_csv(b"id,gone\n1,NaN\n2,NA\n")?;
        assert_eq!(batch.schema().field(1).data_type(), &DataType::Float64);
        assert_eq!(batch.column(1).null_count(), 2);
        Ok(())
    }

    #[test]
    fn test_parse_csv_header_only_is_empty() -> Result<()> {
        let batch = parse_csv(b"a,b,c\n")?;
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 3);
        Ok(())
    }

    #[test]
    fn test_parse_csv_failures() {
        assert!(parse_csv(b"").is_err(), "no columns");
        assert!(parse_csv(&[0xff, 0xfe, b'a', b'\n']).is_err(), "invalid UTF-8");
        assert!(parse_csv(b"a,b\n1,2,3\n").is_err(), "too many fields");
    }

    #[test]
    fn test_parse_csv_renames_duplicate_headers() -> Result<()> {
        let batch = parse_csv(b"id,id,\n1,2,3\n")?;
        let schema = batch.schema();
        let names: Vec<_> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, vec!["id", "id.1", "Unnamed: 2"]);
        Ok(())
    }
}
