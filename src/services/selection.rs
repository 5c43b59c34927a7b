//! Export selection
//!
//! Turns the caller's loosely-typed item list into identifiers, then narrows
//! them to weight items, falling back to every weight item when the
//! selection ends up empty.

use serde_json::Value;
use tracing::debug;

use crate::error::ItemPlusResult;
use crate::models::Item;
use crate::storage::ItemRepository;

/// Extract item identifiers from a caller-supplied list
///
/// Accepts an array, or a string holding a JSON array. Entries may be bare
/// identifiers or objects carrying a string `name`; anything else is skipped.
/// Duplicates keep their first position.
pub fn parse_item_refs(items: &Value) -> Vec<String> {
    let entries = match items {
        Value::Array(entries) => entries.clone(),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(entries)) => entries,
            _ => {
                debug!("Ignoring item selection that is not a JSON list");
                return Vec::new();
            }
        },
        _ => return Vec::new(),
    };

    let mut ids: Vec<String> = Vec::new();
    for entry in entries {
        let id = match entry {
            Value::String(id) => id,
            Value::Object(mut fields) => match fields.remove("name") {
                Some(Value::String(id)) => id,
                _ => continue,
            },
            _ => continue,
        };
        let id = id.trim().to_string();
        if !id.is_empty() && !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Resolve the items to export
///
/// Keeps the requested items that are weight items. When none survive, or
/// nothing was requested, every weight item is exported instead. An empty
/// result means the dataset has no weight items at all.
pub fn select_weight_items<R>(repo: &R, requested: &[String]) -> ItemPlusResult<Vec<Item>>
where
    R: ItemRepository + ?Sized,
{
    let mut selected = Vec::new();
    for id in requested {
        match repo.get_item(id)? {
            Some(item) if item.is_weight_item => selected.push(item),
            Some(_) => debug!(item = %id, "Skipping item that is not a weight item"),
            None => debug!(item = %id, "Skipping unknown item"),
        }
    }

    if !selected.is_empty() {
        return Ok(selected);
    }

    if !requested.is_empty() {
        debug!("No requested weight items, falling back to all weight items");
    }

    let mut all = Vec::new();
    for id in repo.list_item_ids(&|item: &Item| item.is_weight_item)? {
        if let Some(item) = repo.get_item(&id)? {
            all.push(item);
        }
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SitePaths;
    use crate::storage::Storage;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SitePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        storage.items.upsert(Item::weight_item("10001", "Apples", "A")).unwrap();
        storage.items.upsert(Item::weight_item("10002", "Pears", "P")).unwrap();
        storage.items.upsert(Item::new("10003", "Bread")).unwrap();
        (temp_dir, storage)
    }

    fn codes(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.item_code.as_str()).collect()
    }

    #[test]
    fn test_parse_mixed_entries() {
        let value = json!(["10001", {"name": "10002"}, 42, {"other": "x"}, null, ["10003"]]);
        assert_eq!(parse_item_refs(&value), vec!["10001", "10002"]);
    }

    #[test]
    fn test_parse_json_text() {
        let value = json!(r#"[{"name": "10001"}, "10002"]"#);
        assert_eq!(parse_item_refs(&value), vec!["10001", "10002"]);
    }

    #[test]
    fn test_parse_malformed_is_empty() {
        assert!(parse_item_refs(&json!("not json")).is_empty());
        assert!(parse_item_refs(&json!(r#"{"name": "10001"}"#)).is_empty());
        assert!(parse_item_refs(&json!(17)).is_empty());
        assert!(parse_item_refs(&json!({"name": "10001"})).is_empty());
        assert!(parse_item_refs(&Value::Null).is_empty());
    }

    #[test]
    fn test_parse_dedupes_and_trims() {
        let value = json!(["10001", " 10001 ", "", "10002"]);
        assert_eq!(parse_item_refs(&value), vec!["10001", "10002"]);
    }

    #[test]
    fn test_requested_weight_items_kept() {
        let (_temp_dir, storage) = create_test_storage();
        let selected =
            select_weight_items(&storage, &["10002".to_string(), "10003".to_string()]).unwrap();
        assert_eq!(codes(&selected), vec!["10002"]);
    }

    #[test]
    fn test_no_request_exports_all_weight_items() {
        let (_temp_dir, storage) = create_test_storage();
        let selected = select_weight_items(&storage, &[]).unwrap();
        assert_eq!(codes(&selected), vec!["10001", "10002"]);
    }

    #[test]
    fn test_non_weight_request_falls_back_to_all() {
        let (_temp_dir, storage) = create_test_storage();
        let selected =
            select_weight_items(&storage, &["10003".to_string(), "missing".to_string()]).unwrap();
        assert_eq!(codes(&selected), vec!["10001", "10002"]);
    }

    #[test]
    fn test_no_weight_items_at_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SitePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.items.upsert(Item::new("10003", "Bread")).unwrap();

        assert!(select_weight_items(&storage, &[]).unwrap().is_empty());
    }
}
