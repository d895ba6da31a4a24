//! Per-resource envelope normalization.
//!
//! The backend wraps list responses inconsistently: some resources nest
//! the array under `data.<plural>`, some under `data.<singular>`, some
//! return `data` or the bare array itself. Instead of repeating probe
//! chains at every call site, each resource declares one explicit
//! mapping table of candidate paths, tried in order.

use serde_json::Value;

/// Envelope mapping for one list resource.
#[derive(Debug, Clone, Copy)]
pub struct ListEnvelope {
    /// Candidate paths to the record array, in probe order. The empty
    /// path denotes a bare top-level array response.
    pub item_paths: &'static [&'static [&'static str]],
    /// Path to the total count, commonly `data.pagination.totalCount`.
    pub total_path: &'static [&'static str],
}

impl ListEnvelope {
    pub const fn new(
        item_paths: &'static [&'static [&'static str]],
        total_path: &'static [&'static str],
    ) -> Self {
        Self {
            item_paths,
            total_path,
        }
    }

    /// Probe the candidate paths in order; the first one resolving to
    /// an array wins. `None` means no candidate matched.
    pub fn extract_items(&self, payload: &Value) -> Option<Vec<Value>> {
        for path in self.item_paths {
            if let Some(Value::Array(items)) = walk(payload, path) {
                return Some(items.clone());
            }
        }
        None
    }

    /// Read the total count; `None` when the path is absent or not a
    /// number, in which case the caller falls back to the item count.
    pub fn extract_total(&self, payload: &Value) -> Option<u64> {
        walk(payload, self.total_path).and_then(Value::as_u64)
    }
}

fn walk<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    Some(current)
}

/// True when a payload that matched no candidate still carries data.
/// Strict mode uses this to tell an unrecognized shape apart from a
/// merely empty response.
pub fn looks_like_envelope_miss(payload: &Value) -> bool {
    match payload {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(_) => false,
        _ => true,
    }
}
