// src/decode/mod.rs

pub mod delimited;
pub mod spreadsheet;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::table::Table;

/// One upload as delivered by the dashboard's upload widget: a
/// `"<mime-prefix>,<base64-body>"` payload plus the original filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEvent {
    pub contents: String,
    pub filename: String,
}

impl UploadEvent {
    /// Frame raw file bytes the way a browser upload does. Used by the
    /// driver binary and by tests.
    pub fn from_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Self {
        Self {
            contents: format!("data:{};base64,{}", mime, BASE64.encode(bytes)),
            filename: filename.to_string(),
        }
    }
}

/// Why an upload could not be turned into a table.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The filename extension is not one we parse. Surfaced verbatim to
    /// the user; nothing is partially processed.
    #[error("unsupported file type: {filename}")]
    UnsupportedFileType { filename: String },

    /// Anything that went wrong between the base64 body and a parsed
    /// table: bad base64, bad encoding, corrupt workbook. One-shot
    /// uploads are never retried; the cause text is shown instead.
    #[error("error reading file: {cause}")]
    FileParse { cause: String },
}

impl DecodeError {
    fn parse(err: impl std::fmt::Display) -> Self {
        DecodeError::FileParse {
            cause: err.to_string(),
        }
    }
}

/// Decode one upload payload into a [`Table`].
///
/// The payload is split at its first comma into MIME prefix and base64
/// body; the decoded bytes are parsed according to the filename
/// extension (case-insensitive): `.csv` as UTF-8 comma-delimited text,
/// `.xls`/`.xlsx` as a spreadsheet workbook (first sheet). First row is
/// the header either way. Pure transform: no I/O beyond the payload.
pub fn decode_upload(contents: &str, filename: &str) -> Result<Table, DecodeError> {
    let (_mime_prefix, body) = contents.split_once(',').ok_or_else(|| {
        warn!(filename, "upload payload has no base64 separator");
        DecodeError::parse("payload is missing the base64 separator")
    })?;

    let bytes = BASE64.decode(body).map_err(DecodeError::parse)?;
    debug!(filename, bytes = bytes.len(), "decoded upload body");

    let extension = Path::new(filename)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());

    let table = match extension.as_deref() {
        Some("csv") => delimited::parse_csv(&bytes).map_err(|e| DecodeError::parse(format!("{e:#}")))?,
        Some("xls") | Some("xlsx") => {
            spreadsheet::parse_workbook(&bytes).map_err(|e| DecodeError::parse(format!("{e:#}")))?
        }
        _ => {
            return Err(DecodeError::UnsupportedFileType {
                filename: filename.to_string(),
            })
        }
    };

    debug!(
        filename,
        columns = table.num_columns(),
        rows = table.num_rows(),
        "upload decoded"
    );
    Ok(table)
}
