use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use simbench_core::{ErrorInfo, SweepError};

fn hash_error(code: &str, err: impl ToString) -> SweepError {
    SweepError::Hash(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(key, val)| (key, canonicalize(val)))
                .collect();
            Value::Object(ordered.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SweepError> {
    let value = serde_json::to_value(value).map_err(|err| hash_error("json-encode", err))?;
    serde_json::to_vec(&canonicalize(value)).map_err(|err| hash_error("json-write", err))
}

/// Stable hexadecimal sha256 over the canonical JSON encoding.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, SweepError> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(format!("{:x}", Sha256::digest(bytes)))
}
