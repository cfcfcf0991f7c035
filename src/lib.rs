//! # vitalboard
//!
//! The ingestion and classification pipeline behind a single-page
//! physiological dashboard. One uploaded tabular file (CSV or Excel) is
//! decoded into an in-memory table, column labels are normalized and
//! role-inferred (time / latitude / longitude / physiological
//! parameter), each parameter column is summarized into a traffic-light
//! severity card, and everything is packaged as a serializable payload
//! for the front end to render.
//!
//! Data flow:
//!
//! ```text
//! upload (base64 payload + filename)
//!   → decode      (CSV / spreadsheet → Table)
//!   → table       (label normalization)
//!   → infer       (column roles from keyword config)
//!   → classify    (severity tiers from threshold bands)
//!   → dashboard   (preview, cards, time series or geo trail)
//! ```
//!
//! Rendering itself is out of scope: [`dashboard::DashboardResponse`]
//! is the contract an external assembler consumes, typically as JSON.
//! Each cycle is synchronous and owns its table exclusively; nothing is
//! shared or persisted across uploads.

pub mod classify;
pub mod dashboard;
pub mod decode;
pub mod infer;
pub mod keywords;
pub mod table;

pub use classify::{classify, Classification, SeverityTier};
pub use dashboard::{build_dashboard, DashboardConfig, DashboardPayload, DashboardResponse};
pub use decode::{decode_upload, DecodeError, UploadEvent};
pub use infer::{infer_roles, ColumnRole, ColumnRoles};
pub use keywords::Keywords;
pub use table::{Cell, Table};
