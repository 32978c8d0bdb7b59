//! Persisted cart layout.
//!
//! Current format (version 1):
//!
//! ```json
//! {"version":1,"saved_at":"2026-10-19T10:00:00Z","items":[{"id":"1","name":"…","price":299,
//!   "image":"…","description":"…","category":"…","stock":50,"quantity":2}]}
//! ```
//!
//! Older sessions wrote the bare `items` array with no envelope; those still
//! decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::line::{CartLine, validate_lines};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    items: &'a [CartLine],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotIn {
    Versioned {
        version: u32,
        items: Vec<CartLine>,
    },
    Legacy(Vec<CartLine>),
}

/// Serialize the full line list.
pub fn encode(lines: &[CartLine], saved_at: DateTime<Utc>) -> Result<String, PersistenceError> {
    let snapshot = SnapshotOut {
        version: SNAPSHOT_VERSION,
        saved_at,
        items: lines,
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Parse and structurally validate a persisted snapshot.
pub fn decode(text: &str) -> Result<Vec<CartLine>, PersistenceError> {
    let lines = match serde_json::from_str::<SnapshotIn>(text)? {
        SnapshotIn::Versioned { version, items } if version == SNAPSHOT_VERSION => items,
        SnapshotIn::Versioned { version, .. } => {
            return Err(PersistenceError::UnsupportedVersion(version));
        }
        SnapshotIn::Legacy(items) => items,
    };

    validate_lines(&lines).map_err(|e| PersistenceError::Invalid(e.to_string()))?;
    Ok(lines)
}
