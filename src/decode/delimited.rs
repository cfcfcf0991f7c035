// src/decode/delimited.rs

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::io::Cursor;
use tracing::warn;

use crate::table::{Cell, Table};

/// Parse comma-delimited UTF-8 bytes into a [`Table`], first row as
/// header.
///
/// The reader runs flexible so ragged rows don't abort the whole upload:
/// short rows are padded with [`Cell::Empty`], long rows truncated to the
/// header width (with a warning), matching the header-defines-the-table
/// rule.
pub(crate) fn parse_csv(bytes: &[u8]) -> Result<Table> {
    let text = std::str::from_utf8(bytes).context("file is not valid UTF-8")?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(text.as_bytes()));

    let mut records = rdr.records();

    let header = match records.next() {
        Some(record) => record.context("reading header row")?,
        None => bail!("file contains no header row"),
    };
    let labels: Vec<String> = header.iter().map(|s| s.to_string()).collect();
    if labels.iter().all(|l| l.trim().is_empty()) {
        bail!("header row is empty");
    }

    let width = labels.len();
    let mut rows = Vec::new();
    for (idx, record) in records.enumerate() {
        let record = record.with_context(|| format!("parse error at data row {}", idx + 1))?;
        if record.len() > width {
            warn!(
                row = idx + 1,
                fields = record.len(),
                width,
                "row has more fields than the header, truncating"
            );
        }
        let mut cells: Vec<Cell> = record.iter().take(width).map(Cell::parse).collect();
        cells.resize(width, Cell::Empty);
        rows.push(cells);
    }

    Ok(Table::new(labels, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_typed_cells() {
        let table = parse_csv(b"Time,Temp,Note\n2024-01-05 08:00:00,36.6,ok\n").unwrap();
        assert_eq!(table.labels, vec!["Time", "Temp", "Note"]);
        assert_eq!(table.rows[0][1], Cell::Number(36.6));
        assert_eq!(table.rows[0][2], Cell::Text("ok".into()));
        assert!(matches!(table.rows[0][0], Cell::Timestamp(_)));
    }

    #[test]
    fn ragged_rows_are_padded_and_truncated() {
        let table = parse_csv(b"a,b,c\n1\n1,2,3,4\n").unwrap();
        assert_eq!(table.rows[0], vec![Cell::Number(1.0), Cell::Empty, Cell::Empty]);
        assert_eq!(
            table.rows[1],
            vec![Cell::Number(1.0), Cell::Number(2.0), Cell::Number(3.0)]
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(parse_csv(b"").is_err());
    }

    #[test]
    fn header_only_yields_an_empty_table() {
        let table = parse_csv(b"time,hr\n").unwrap();
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.num_columns(), 2);
    }
}
