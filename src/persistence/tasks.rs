use super::kv::{KeyValueStore, StoreResult};
use crate::domain::{is_valid_text, Task};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Storage key holding the serialized task list
pub const TASKS_KEY: &str = "tasks";

/// Serialize the full task list
pub fn encode_tasks(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string(tasks)
}

/// Parse a stored task list, dropping records that break the store
/// invariants (blank text, repeated id).
pub fn decode_tasks(raw: &str) -> serde_json::Result<Vec<Task>> {
    let parsed: Option<Vec<Task>> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    let mut tasks = Vec::new();

    for task in parsed.unwrap_or_default() {
        if !is_valid_text(&task.text) {
            debug!(id = %task.id, "dropping stored task with blank text");
            continue;
        }
        if !seen.insert(task.id.clone()) {
            debug!(id = %task.id, "dropping stored task with duplicate id");
            continue;
        }
        tasks.push(task);
    }

    Ok(tasks)
}

/// Load the task list once at startup.
///
/// Never fails: a missing key, a read error or an undecodable value all
/// mean "no saved tasks". An undecodable value is first copied aside under
/// a timestamped key so the next save does not destroy it.
pub fn load_tasks(store: &dyn KeyValueStore) -> Vec<Task> {
    let raw = match store.get(TASKS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("no saved tasks, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(error = %e, "could not read saved tasks, starting empty");
            return Vec::new();
        }
    };

    match decode_tasks(&raw) {
        Ok(tasks) => {
            info!(count = tasks.len(), "loaded tasks");
            tasks
        }
        Err(e) => {
            warn!(error = %e, "saved tasks are malformed, starting empty");
            preserve_corrupt(store, &raw);
            Vec::new()
        }
    }
}

fn preserve_corrupt(store: &dyn KeyValueStore, raw: &str) {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let key = format!("{}.corrupt-{}", TASKS_KEY, stamp);
    match store.set(&key, raw) {
        Ok(()) => info!(key = %key, "kept a copy of the malformed task data"),
        Err(e) => warn!(error = %e, "could not keep a copy of the malformed task data"),
    }
}

/// Write the full task list under [`TASKS_KEY`]
pub fn save_tasks(store: &dyn KeyValueStore, tasks: &[Task]) -> StoreResult<()> {
    let encoded = encode_tasks(tasks)?;
    store.set(TASKS_KEY, &encoded)?;
    debug!(count = tasks.len(), "saved tasks");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::kv::{FileStore, MemoryStore};
    use pretty_assertions::assert_eq;

    fn task(id: &str, text: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let store = MemoryStore::new();
        let tasks = vec![task("1", "a", false), task("2", "b", true)];

        save_tasks(&store, &tasks).unwrap();
        assert_eq!(load_tasks(&store), tasks);
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(load_tasks(&store).is_empty());
    }

    #[test]
    fn test_load_null_is_empty() {
        let store = MemoryStore::with_entry(TASKS_KEY, "null");
        assert!(load_tasks(&store).is_empty());
        // null is a valid empty value, not corruption
        assert_eq!(store.keys(), vec![TASKS_KEY.to_string()]);
    }

    #[test]
    fn test_load_malformed_is_empty_and_preserved() {
        let store = MemoryStore::with_entry(TASKS_KEY, "{not json");

        assert!(load_tasks(&store).is_empty());

        let keys = store.keys();
        assert_eq!(keys.len(), 2);
        let backup_key = keys.iter().find(|k| k.starts_with("tasks.corrupt-")).unwrap();
        assert_eq!(store.get(backup_key).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_load_read_error_is_empty_without_backup() {
        let store = MemoryStore::with_entry(TASKS_KEY, r#"[{"id":"1","text":"a"}]"#);
        store.set_simulate_read_error(true);

        assert!(load_tasks(&store).is_empty());

        // an unreadable value is not corrupt, so nothing is copied aside
        assert_eq!(store.keys(), vec![TASKS_KEY.to_string()]);
    }

    #[test]
    fn test_load_unreadable_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join("tasks.json")).unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(load_tasks(&store).is_empty());

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("tasks.json")]);
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let store = MemoryStore::with_entry(TASKS_KEY, r#"{"id":"1","text":"a"}"#);
        assert!(load_tasks(&store).is_empty());
    }

    #[test]
    fn test_decode_drops_invalid_records() {
        let raw = r#"[
            {"id":"1","text":"keep","completed":false},
            {"id":"2","text":"   ","completed":true},
            {"id":"1","text":"dupe","completed":true},
            {"id":"3","text":"no flag"}
        ]"#;

        let tasks = decode_tasks(raw).unwrap();
        assert_eq!(tasks, vec![task("1", "keep", false), task("3", "no flag", false)]);
    }

    #[test]
    fn test_encode_uses_wire_field_names() {
        let encoded = encode_tasks(&[task("x", "hello", true)]).unwrap();
        assert_eq!(encoded, r#"[{"id":"x","text":"hello","completed":true}]"#);
    }

    #[test]
    fn test_save_propagates_store_error() {
        let store = MemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(save_tasks(&store, &[task("1", "a", false)]).is_err());
    }
}
