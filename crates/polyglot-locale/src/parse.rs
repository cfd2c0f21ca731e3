//! Shared field extraction for locale documents.

use polyglot_core::error::PolyglotError;
use toml::{Table, Value};

/// Borrow `value` as a table, or fail with a type mismatch naming `key`.
pub(crate) fn as_table<'a>(key: &str, value: &'a Value) -> Result<&'a Table, PolyglotError> {
    value
        .as_table()
        .ok_or_else(|| PolyglotError::type_mismatch(key, "table", value.type_str()))
}

/// Keys are addressed by dotted paths, so a quoted key such as
/// `[commands."a.b"]` could never be looked up and is rejected.
pub(crate) fn check_key(key: &str) -> Result<(), PolyglotError> {
    if key.contains('.') {
        return Err(PolyglotError::type_mismatch(key, "key without '.'", "dotted key"));
    }
    Ok(())
}

/// Read a required string field.
pub(crate) fn required_str(table: &Table, key: &str, field: &str) -> Result<String, PolyglotError> {
    match table.get(field) {
        Some(v) => str_value(key, v),
        None => Err(PolyglotError::missing_field(key, field)),
    }
}

/// Read an optional string field. Present-but-not-a-string is still an error.
pub(crate) fn optional_str(
    table: &Table,
    key: &str,
    field: &str,
) -> Result<Option<String>, PolyglotError> {
    table.get(field).map(|v| str_value(key, v)).transpose()
}

/// Read a required array-of-strings field.
pub(crate) fn required_str_list(
    table: &Table,
    key: &str,
    field: &str,
) -> Result<Vec<String>, PolyglotError> {
    let value = table
        .get(field)
        .ok_or_else(|| PolyglotError::missing_field(key, field))?;
    let items = value
        .as_array()
        .ok_or_else(|| PolyglotError::type_mismatch(key, "array", value.type_str()))?;
    items.iter().map(|v| str_value(key, v)).collect()
}

fn str_value(key: &str, value: &Value) -> Result<String, PolyglotError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| PolyglotError::type_mismatch(key, "string", value.type_str()))
}
