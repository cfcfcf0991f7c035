// src/dashboard/mod.rs

pub mod cards;
pub mod series;

pub use cards::SummaryCard;
pub use series::{GeoTrailPayload, Series, TimeSeriesPayload, TrailPoint};

use serde::Serialize;
use tracing::{info, warn};

use crate::decode::{decode_upload, UploadEvent};
use crate::infer;
use crate::keywords::Keywords;
use crate::table::{Cell, Table};

/// Pipeline configuration. Keyword sets are injected rather than read
/// from scattered literals, so inference and classification always agree
/// and tests can swap the whole vocabulary.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub keywords: Keywords,
    /// Rows shown in the table preview.
    pub preview_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            keywords: Keywords::default(),
            preview_rows: 10,
        }
    }
}

/// What one upload cycle produces. A missing upload renders the blank
/// state; a decode failure carries exactly one user-visible message and
/// nothing partial; success carries the full payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardResponse {
    Blank,
    Failed { message: String },
    Ready(DashboardPayload),
}

/// Everything the dashboard front end needs to render one upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPayload {
    pub message: String,
    pub preview: Preview,
    pub cards: Vec<SummaryCard>,
    pub visualization: Visualization,
}

/// The first rows of the normalized table, for the preview widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Either an animated geographic trail (when time, latitude, longitude
/// and a primary parameter are all present) or the time-series fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visualization {
    TimeSeries(TimeSeriesPayload),
    GeoTrail(GeoTrailPayload),
}

/// Run one full upload cycle: decode, normalize labels, infer roles,
/// classify, assemble.
#[tracing::instrument(level = "info", skip_all, fields(filename = upload.map(|u| u.filename.as_str())))]
pub fn build_dashboard(
    upload: Option<&UploadEvent>,
    config: &DashboardConfig,
) -> DashboardResponse {
    let Some(upload) = upload else {
        return DashboardResponse::Blank;
    };

    let mut table = match decode_upload(&upload.contents, &upload.filename) {
        Ok(table) => table,
        Err(err) => {
            warn!(filename = %upload.filename, error = %err, "upload rejected");
            return DashboardResponse::Failed {
                message: err.to_string(),
            };
        }
    };

    // Normalization happens exactly once, before any role inference.
    table.normalize_labels();

    let payload = assemble(&table, &upload.filename, config);
    info!(
        filename = %upload.filename,
        rows = table.num_rows(),
        cards = payload.cards.len(),
        "dashboard assembled"
    );
    DashboardResponse::Ready(payload)
}

fn assemble(table: &Table, filename: &str, config: &DashboardConfig) -> DashboardPayload {
    let roles = infer::infer_roles(&table.labels, &config.keywords);

    let cards = cards::summary_cards(table, &roles, &config.keywords);

    let visualization = if roles.supports_geo_trail() {
        match series::geo_trail(table, &roles, &config.keywords) {
            Some(trail) => Visualization::GeoTrail(trail),
            None => Visualization::TimeSeries(series::time_series(table, &roles)),
        }
    } else {
        Visualization::TimeSeries(series::time_series(table, &roles))
    };

    DashboardPayload {
        message: format!("Uploaded: {filename}"),
        preview: Preview {
            columns: table.labels.clone(),
            rows: table.head(config.preview_rows).to_vec(),
        },
        cards,
        visualization,
    }
}
