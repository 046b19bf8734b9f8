use std::path::Path;

use thiserror::Error;

pub mod csv_import;
pub mod roster;

pub use roster::{EmployeeRecord, Roster};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse roster {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse roster {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("unsupported roster format for {0} (expected .json or .csv)")]
    UnsupportedFormat(String),
}

/// Load a roster from disk, dispatching on the file extension. The
/// `cycle` override replaces whatever the file carries; CSV files carry
/// no cycle of their own and fall back to "ad-hoc" without one.
pub fn load_roster(path: &Path, cycle: Option<&str>) -> Result<Roster, InputError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let mut loaded = match ext.as_deref() {
        Some("json") => roster::load_json(path)?,
        Some("csv") => csv_import::load_csv(path)?,
        _ => return Err(InputError::UnsupportedFormat(path.display().to_string())),
    };

    if let Some(cycle) = cycle {
        loaded.review_cycle = cycle.to_string();
    }
    roster::audit_roster(&loaded);
    Ok(loaded)
}
