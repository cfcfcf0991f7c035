// src/decode/spreadsheet.rs

use anyhow::{anyhow, bail, Context, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

use crate::table::{Cell, Table};

/// Parse spreadsheet bytes (`.xls`/`.xlsx`) into a [`Table`]: first
/// sheet, first row as header.
pub(crate) fn parse_workbook(bytes: &[u8]) -> Result<Table> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor).context("opening workbook")?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("workbook has no sheets"))?
        .context("reading first sheet")?;

    let mut rows_iter = range.rows();
    let header = match rows_iter.next() {
        Some(row) => row,
        None => bail!("first sheet is empty"),
    };

    let labels: Vec<String> = header.iter().map(header_label).collect();
    if labels.iter().all(|l| l.trim().is_empty()) {
        bail!("header row is empty");
    }

    let rows: Vec<Vec<Cell>> = rows_iter
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(Table::new(labels, rows))
}

fn header_label(data: &Data) -> String {
    match data {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Map one spreadsheet cell onto the table's scalar model. Typed numbers
/// come through directly; strings are re-sniffed the same way CSV fields
/// are, so a numeric-looking text cell still counts as a reading.
fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Number(if *b { 1.0 } else { 0.0 }),
        Data::String(s) => Cell::parse(s),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ts) => Cell::Timestamp(ts),
            None => Cell::Empty,
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::parse(s),
    }
}
