// src/dashboard/series.rs

use serde::Serialize;
use tracing::warn;

use crate::classify::{classify, Classification, SeverityTier};
use crate::infer::ColumnRoles;
use crate::keywords::Keywords;
use crate::table::{Cell, Table};

/// Chart payload when no geographic trail can be drawn: the time column
/// (if one was inferred) as x axis, one series per remaining column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPayload {
    pub time_column: Option<String>,
    /// X-axis values; empty when no time column exists.
    pub timestamps: Vec<Cell>,
    pub series: Vec<Series>,
}

/// One plotted line: numeric cells only, gaps where a value is missing
/// or non-numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

/// Animated map payload: the trail of per-row points, each colored by
/// classifying that row's raw primary-parameter value (never the column
/// mean).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoTrailPayload {
    pub latitude_column: String,
    pub longitude_column: String,
    pub time_column: String,
    pub parameter_column: String,
    pub points: Vec<TrailPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub time: Cell,
    pub value: Option<f64>,
    pub tier: SeverityTier,
    pub status: String,
    pub color: String,
}

/// Build the fallback time-series payload.
pub fn time_series(table: &Table, roles: &ColumnRoles) -> TimeSeriesPayload {
    let time_idx = roles
        .time
        .as_deref()
        .and_then(|label| table.column_index(label));

    let timestamps = match time_idx {
        Some(idx) => table.column(idx).cloned().collect(),
        None => Vec::new(),
    };

    let series = table
        .labels
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != time_idx)
        .map(|(idx, label)| Series {
            label: label.clone(),
            values: table.column(idx).map(Cell::as_f64).collect(),
        })
        .collect();

    TimeSeriesPayload {
        time_column: roles.time.clone(),
        timestamps,
        series,
    }
}

/// Build the animated trail, or `None` when any required role is absent.
///
/// Rows without a numeric latitude or longitude cannot be placed on a
/// map and are skipped. A row whose primary value is missing keeps its
/// point but is tagged indeterminate (gray), since there is nothing to
/// classify.
pub fn geo_trail(table: &Table, roles: &ColumnRoles, keywords: &Keywords) -> Option<GeoTrailPayload> {
    let lat_label = roles.latitude.as_deref()?;
    let lon_label = roles.longitude.as_deref()?;
    let time_label = roles.time.as_deref()?;
    let param_label = roles.primary_parameter()?;

    let lat_idx = table.column_index(lat_label)?;
    let lon_idx = table.column_index(lon_label)?;
    let time_idx = table.column_index(time_label)?;
    let param_idx = table.column_index(param_label)?;

    let mut points = Vec::with_capacity(table.num_rows());
    for (row_idx, row) in table.rows.iter().enumerate() {
        let (Some(latitude), Some(longitude)) = (row[lat_idx].as_f64(), row[lon_idx].as_f64())
        else {
            warn!(row = row_idx, "skipping trail point without numeric coordinates");
            continue;
        };

        let value = row[param_idx].as_f64();
        let c: Classification = match value {
            Some(v) => classify(param_label, v, keywords),
            None => SeverityTier::Unknown.into(),
        };

        points.push(TrailPoint {
            latitude,
            longitude,
            time: row[time_idx].clone(),
            value,
            tier: c.tier,
            color: c.tier.color().to_string(),
            status: c.status,
        });
    }

    Some(GeoTrailPayload {
        latitude_column: lat_label.to_string(),
        longitude_column: lon_label.to_string(),
        time_column: time_label.to_string(),
        parameter_column: param_label.to_string(),
        points,
    })
}
