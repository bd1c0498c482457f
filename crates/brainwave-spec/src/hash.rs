//! Canonical recipe hashing.
//!
//! Render params are hashed as `hex(BLAKE3(canonical_json))`, where the
//! canonical form has object keys sorted and no insignificant whitespace.
//! Two params documents that differ only in key order hash identically.

use crate::error::SpecError;
use crate::recipe::RenderParams;

/// Computes the canonical BLAKE3 hash of render params.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn recipe_hash(params: &RenderParams) -> Result<String, SpecError> {
    let value = serde_json::to_value(params)?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Renders a JSON value with sorted object keys and no whitespace.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::Value::String((*key).clone()).to_string());
                out.push(':');
                write_canonical(&map[key.as_str()], out);
            }
            out.push('}');
        }
        serde_json::Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
