// src/process/sheet.rs

use anyhow::{bail, Context, Result};
use arrow::{
    array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray, TimestampMillisecondArray},
    datatypes::{DataType, Field, Schema, TimeUnit},
    record_batch::{RecordBatch, RecordBatchOptions},
};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use std::{path::Path, sync::Arc};
use tracing::debug;

use super::columns::unique_headers;
use crate::error::ConvertError;

/// Open `path`, require that its only sheet is `sheet`, and load it as a frame.
pub fn read_sheet(path: &Path, sheet: &str) -> Result<RecordBatch> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).with_context(|| format!("opening workbook {:?}", path))?;

    let found = workbook.sheet_names();
    if found != [sheet] {
        return Err(ConvertError::SheetMismatch {
            expected: vec![sheet.to_string()],
            found,
        }
        .into());
    }

    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("reading sheet {:?}", sheet))?;
    frame_from_range(&range)
}

/// First row is the header; every later row is data.
fn frame_from_range(range: &Range<Data>) -> Result<RecordBatch> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        bail!("sheet is empty");
    };
    let names = unique_headers(header.iter().map(header_text));
    let body: Vec<&[Data]> = rows.collect();

    let mut fields = Vec::with_capacity(names.len());
    let mut arrays = Vec::with_capacity(names.len());
    for (idx, name) in names.into_iter().enumerate() {
        let cells: Vec<Option<&Data>> = body
            .iter()
            .map(|row| row.get(idx).filter(|c| !is_blank(c)))
            .collect();
        let (dt, arr) = build_column(&cells);
        debug!(column = %name, ty = ?dt, "typed sheet column");
        fields.push(Field::new(name, dt, true));
        arrays.push(arr);
    }

    let options = RecordBatchOptions::new().with_row_count(Some(body.len()));
    RecordBatch::try_new_with_options(Arc::new(Schema::new(fields)), arrays, &options)
        .context("building sheet frame")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Bool,
    Int,
    Float,
    Date,
    Text,
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

fn kind_of(cell: &Data) -> Kind {
    match cell {
        Data::Bool(_) => Kind::Bool,
        Data::Int(_) => Kind::Int,
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => Kind::Int,
        Data::Float(_) => Kind::Float,
        Data::DateTime(dt) if dt.is_datetime() => Kind::Date,
        Data::DateTimeIso(s) if parse_iso(s).is_some() => Kind::Date,
        _ => Kind::Text,
    }
}

fn merge(a: Kind, b: Kind) -> Kind {
    match (a, b) {
        (x, y) if x == y => x,
        (Kind::Int, Kind::Float) | (Kind::Float, Kind::Int) => Kind::Float,
        _ => Kind::Text,
    }
}

fn column_kind(cells: &[Option<&Data>]) -> Kind {
    let kind = cells
        .iter()
        .flatten()
        .map(|c| kind_of(c))
        .reduce(merge)
        .unwrap_or(Kind::Float);
    // integers cannot hold a gap
    if kind == Kind::Int && cells.iter().any(Option::is_none) {
        Kind::Float
    } else {
        kind
    }
}

fn build_column(cells: &[Option<&Data>]) -> (DataType, ArrayRef) {
    match column_kind(cells) {
        Kind::Bool => {
            let arr: BooleanArray = cells
                .iter()
                .map(|c| match c {
                    Some(Data::Bool(b)) => Some(*b),
                    _ => None,
                })
                .collect();
            (DataType::Boolean, Arc::new(arr))
        }
        Kind::Int => {
            let arr: Int64Array = cells.iter().map(|c| c.and_then(as_f64).map(|f| f as i64)).collect();
            (DataType::Int64, Arc::new(arr))
        }
        Kind::Float => {
            let arr: Float64Array = cells.iter().map(|c| c.and_then(as_f64)).collect();
            (DataType::Float64, Arc::new(arr))
        }
        Kind::Date => {
            let arr: TimestampMillisecondArray =
                cells.iter().map(|c| c.and_then(as_millis)).collect();
            (DataType::Timestamp(TimeUnit::Millisecond, None), Arc::new(arr))
        }
        Kind::Text => {
            let arr: StringArray = cells.iter().map(|c| c.map(|c| c.to_string())).collect();
            (DataType::Utf8, Arc::new(arr))
        }
    }
}

fn as_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        _ => None,
    }
}

fn as_millis(cell: &Data) -> Option<i64> {
    let naive = match cell {
        // as_datetime honours the workbook's 1900 or 1904 date system
        Data::DateTime(dt) => dt.as_datetime(),
        Data::DateTimeIso(s) => parse_iso(s),
        _ => None,
    };
    naive.map(|dt| dt.and_utc().timestamp_millis())
}

fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()?
                .and_hms_opt(0, 0, 0)
        })
}
