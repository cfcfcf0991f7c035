// src/dashboard/cards.rs

use serde::Serialize;
use tracing::warn;

use crate::classify::{classify, SeverityTier};
use crate::infer::ColumnRoles;
use crate::keywords::Keywords;
use crate::table::{Cell, Table};

/// One summary card: a parameter column's mean reading classified into a
/// severity tier.
///
/// A column with no numeric cells keeps its card but reports "No data"
/// with no mean and no tier; an undefined mean must never classify and
/// must never show up as a silent zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub label: String,
    pub mean: Option<f64>,
    pub tier: Option<SeverityTier>,
    pub status: String,
    pub color: String,
}

/// Arithmetic mean over the numeric cells only; non-numeric and missing
/// cells stay out of the denominator. `None` when nothing numeric exists.
pub(crate) fn column_mean<'a>(cells: impl Iterator<Item = &'a Cell>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count: u32 = 0;
    for cell in cells {
        if let Some(v) = cell.as_f64() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}

/// Build one card per parameter column, in original column order.
pub fn summary_cards(table: &Table, roles: &ColumnRoles, keywords: &Keywords) -> Vec<SummaryCard> {
    roles
        .parameters
        .iter()
        .filter_map(|label| {
            let idx = table.column_index(label)?;
            let mean = column_mean(table.column(idx));
            Some(match mean {
                Some(mean) => {
                    let c = classify(label, mean, keywords);
                    SummaryCard {
                        label: label.clone(),
                        mean: Some(mean),
                        tier: Some(c.tier),
                        color: c.tier.color().to_string(),
                        status: c.status,
                    }
                }
                None => {
                    warn!(column = %label, "parameter column has no numeric values");
                    SummaryCard {
                        label: label.clone(),
                        mean: None,
                        tier: None,
                        status: "No data".to_string(),
                        color: SeverityTier::Unknown.color().to_string(),
                    }
                }
            })
        })
        .collect()
}
