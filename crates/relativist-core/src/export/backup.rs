// crates/relativist-core/src/export/backup.rs
//
// Full-progress backup as a single JSON document:
//
//   {
//     "version": "1",
//     "exportedAt": "<RFC 3339 UTC, millisecond precision>",
//     "checksums": { "<key>": "<crc32 hex>" },
//     "<key>": "<raw stored string>"
//   }
//
// Import restores known keys verbatim. Nothing is written unless every
// present checksum matches.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::{RelativistError, Result};
use crate::export::checksum::crc32_hex;
use crate::game::state::GAME_STATE_KEY;
use crate::store::KvStore;

pub const BACKUP_VERSION: &str = "1";
pub const RESTORABLE_KEYS: [&str; 1] = [GAME_STATE_KEY];

/// `relativist-backup-YYYY-MM-DD.json`
pub fn backup_file_name(exported_at: DateTime<Utc>) -> String {
    format!("relativist-backup-{}.json", exported_at.format("%Y-%m-%d"))
}

pub fn export_backup<S: KvStore + ?Sized>(store: &S, exported_at: DateTime<Utc>) -> Result<String> {
    let mut doc = Map::new();
    let mut checksums = Map::new();

    doc.insert("version".into(), Value::from(BACKUP_VERSION));
    doc.insert(
        "exportedAt".into(),
        Value::from(exported_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );

    for key in RESTORABLE_KEYS {
        if let Some(raw) = store.get(key) {
            checksums.insert(key.into(), Value::from(crc32_hex(raw.as_bytes())));
            doc.insert(key.into(), Value::from(raw));
        }
    }
    doc.insert("checksums".into(), Value::Object(checksums));

    Ok(serde_json::to_string_pretty(&Value::Object(doc))?)
}

/// Restores every known key found in `text`; returns how many were written.
pub fn import_backup<S: KvStore + ?Sized>(text: &str, store: &mut S) -> Result<usize> {
    let parsed: Value = serde_json::from_str(text)
        .map_err(|_| RelativistError::Backup("could not parse JSON".into()))?;
    let doc = parsed
        .as_object()
        .ok_or_else(|| RelativistError::Backup("top level is not an object".into()))?;

    if !has_version(doc) {
        return Err(RelativistError::Backup("missing version field".into()));
    }

    let checksums = doc.get("checksums").and_then(Value::as_object);

    let mut restored: Vec<(&str, String)> = Vec::new();
    for key in RESTORABLE_KEYS {
        let Some(value) = doc.get(key) else {
            continue;
        };
        let raw = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        if let Some(expected) = checksums.and_then(|c| c.get(key)).and_then(Value::as_str) {
            let actual = crc32_hex(raw.as_bytes());
            if !expected.eq_ignore_ascii_case(&actual) {
                return Err(RelativistError::ChecksumMismatch {
                    expected: expected.to_string(),
                    actual,
                });
            }
        }
        restored.push((key, raw));
    }

    if restored.is_empty() {
        return Err(RelativistError::Backup(
            "backup file contains no recognisable data".into(),
        ));
    }

    let n = restored.len();
    for (key, raw) in restored {
        store.set(key, raw)?;
    }
    info!(keys = n, "backup restored");
    Ok(n)
}

// Missing, null, false, 0 and "" all count as absent.
fn has_version(doc: &Map<String, Value>) -> bool {
    match doc.get("version") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}
