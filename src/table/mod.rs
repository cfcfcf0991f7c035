// src/table/mod.rs

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A single scalar value of a decoded table.
///
/// Values are parsed once at decode time; everything downstream (role
/// inference, means, classification) works on the typed form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Timestamp(NaiveDateTime),
    Empty,
}

/// Datetime layouts accepted when sniffing a cell, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Date-only layouts, promoted to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

impl Cell {
    /// Parse a raw text field: trim, then try number, then the known
    /// timestamp layouts, else keep as text. Empty after trimming is
    /// [`Cell::Empty`].
    pub fn parse(raw: &str) -> Self {
        let v = raw.trim();
        if v.is_empty() {
            return Cell::Empty;
        }
        if let Ok(n) = v.parse::<f64>() {
            return Cell::Number(n);
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(ts) = NaiveDateTime::parse_from_str(v, fmt) {
                return Cell::Timestamp(ts);
            }
        }
        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(v, fmt) {
                return Cell::Timestamp(d.and_hms_opt(0, 0, 0).expect("midnight is valid"));
            }
        }
        Cell::Text(v.to_string())
    }

    /// Numeric view of the cell; only [`Cell::Number`] qualifies.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// An in-memory table decoded from one upload: ordered column labels plus
/// row-major cells. Every row has exactly `labels.len()` cells; the
/// decoders pad or truncate to guarantee it.
///
/// A table lives for one request cycle and is dropped once the dashboard
/// payload has been assembled from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub labels: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(labels: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { labels, rows }
    }

    pub fn num_columns(&self) -> usize {
        self.labels.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Lower-case and trim every column label in place. Order and cell
    /// values are untouched. Idempotent; the pipeline applies it exactly
    /// once, right after decode.
    pub fn normalize_labels(&mut self) {
        for label in &mut self.labels {
            *label = label.trim().to_lowercase();
        }
    }

    /// Index of the column with exactly this label.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Cells of column `idx`, top to bottom.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |row| &row[idx])
    }

    /// The first `n` rows, for table previews.
    pub fn head(&self, n: usize) -> &[Vec<Cell>] {
        &self.rows[..self.rows.len().min(n)]
    }
}
