//! JSON file codec for `TodoList`.
//!
//! # Responsibility
//! - Write pretty-printed camelCase JSON on save.
//! - Accept field names in any letter case on load.
//!
//! # Invariants
//! - Array order equals list order in both directions.
//! - An empty list is written as exactly `[]`.
//! - Loaded values are taken verbatim: no trimming, no uniqueness checks.

use super::{StoreError, StoreResult};
use crate::list::todo_list::TodoList;
use crate::model::item::TodoItem;
use log::{error, info};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::time::Instant;

const ITEM_FIELDS: &[&str] = &["id", "title", "isDone"];
const UTF8_BOM: char = '\u{feff}';

impl TodoList {
    /// Writes the whole list to `path`, replacing any existing content.
    ///
    /// # Side effects
    /// - Overwrites the target file (non-atomic).
    /// - Emits `list_save` logging events with item count and duration.
    ///
    /// # Errors
    /// - `StoreError::Io` when the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!(
            "event=list_save module=store status=start item_count={}",
            self.items.len()
        );

        let result = write_items(path, &self.items);
        match &result {
            Ok(()) => info!(
                "event=list_save module=store status=ok item_count={} duration_ms={}",
                self.items.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=list_save module=store status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            ),
        }
        result
    }

    /// Reads a list previously written by [`TodoList::save`].
    ///
    /// An empty (or whitespace-only) file, `[]` and `null` all produce an
    /// empty list.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `path` does not exist; checked first.
    /// - `StoreError::Io` when the file cannot be read.
    /// - `StoreError::Format` when content is not an array of items.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<TodoList> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!("event=list_load module=store status=start");

        match read_items(path) {
            Ok(items) => {
                info!(
                    "event=list_load module=store status=ok item_count={} duration_ms={}",
                    items.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(TodoList { items })
            }
            Err(err) => {
                error!(
                    "event=list_load module=store status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn write_items(path: &Path, items: &[TodoItem]) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(items).map_err(|err| StoreError::Format {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_items(path: &Path) -> StoreResult<Vec<TodoItem>> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format_error = |message: String| StoreError::Format {
        path: path.to_path_buf(),
        message,
    };

    let content = std::str::from_utf8(&bytes)
        .map_err(|err| format_error(format!("content is not valid UTF-8: {err}")))?;
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value =
        serde_json::from_str(content).map_err(|err| format_error(err.to_string()))?;
    let entries = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(entries) => entries,
        other => {
            return Err(format_error(format!(
                "expected a JSON array at top level, found {}",
                json_kind(&other)
            )));
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(fields) => {
                serde_json::from_value::<TodoItem>(Value::Object(fold_field_names(fields)))
                    .map_err(|err| format_error(format!("item {index}: {err}")))
            }
            other => Err(format_error(format!(
                "item {index}: expected an object, found {}",
                json_kind(&other)
            ))),
        })
        .collect()
}

/// Rewrites known field names to their canonical camelCase spelling,
/// matching case-insensitively. Unknown fields pass through untouched.
///
/// Relies on `serde_json/preserve_order`: keys are visited in file order, so
/// the last spelling of a field wins.
fn fold_field_names(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(key, value)| {
            let canonical = ITEM_FIELDS
                .iter()
                .find(|field| field.eq_ignore_ascii_case(&key))
                .map(|field| (*field).to_string())
                .unwrap_or(key);
            (canonical, value)
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{fold_field_names, json_kind};
    use serde_json::{json, Value};

    #[test]
    fn fold_field_names_canonicalizes_known_keys() {
        let Value::Object(fields) = json!({ "ID": "x", "Title": "t", "ISDONE": true, "Extra": 1 })
        else {
            panic!("fixture should be an object");
        };

        let folded = fold_field_names(fields);
        assert!(folded.contains_key("id"));
        assert!(folded.contains_key("title"));
        assert!(folded.contains_key("isDone"));
        assert!(folded.contains_key("Extra"));
    }

    #[test]
    fn fold_field_names_keeps_last_spelling_in_file_order() {
        let Value::Object(fields) = json!({ "title": "first", "TITLE": "last" }) else {
            panic!("fixture should be an object");
        };

        let folded = fold_field_names(fields);
        assert_eq!(folded.len(), 1);
        assert_eq!(folded["title"], "last");
    }

    #[test]
    fn json_kind_names_top_level_shapes() {
        assert_eq!(json_kind(&json!({})), "object");
        assert_eq!(json_kind(&json!(3)), "number");
        assert_eq!(json_kind(&json!([])), "array");
    }
}
