use super::storage::{Storage, StorageError};
use crate::domain::mood::NOTE_MAX_CHARS;
use crate::domain::text::truncate_chars;
use crate::domain::{MoodEntry, MoodScore, Records, Task, TaskId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub const TASKS_KEY: &str = "flowguard_tasks";
pub const FOCUS_KEY: &str = "flowguard_focus";
pub const MOODS_KEY: &str = "flowguard_moods";

/// Records plus the storage they persist to. Every mutation writes the affected slice
/// straight away.
pub struct Store {
    records: Records,
    storage: Box<dyn Storage>,
}

impl Store {
    /// Read all three slices. Missing or malformed data never fails the load; it falls back
    /// to empty values.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let tasks = dedupe_tasks(load_list::<Task>(storage.as_ref(), TASKS_KEY));
        let focus_sessions = load_focus(storage.as_ref());
        let moods = load_list::<MoodEntry>(storage.as_ref(), MOODS_KEY)
            .into_iter()
            .map(|mut entry| {
                entry.note = truncate_chars(&entry.note, NOTE_MAX_CHARS);
                entry
            })
            .collect::<Vec<_>>();

        info!(
            tasks = tasks.len(),
            focus_sessions,
            moods = moods.len(),
            "loaded records"
        );

        Self {
            records: Records {
                tasks,
                focus_sessions,
                moods,
            },
            storage,
        }
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    /// `Ok(None)` when the title is blank; nothing is written then
    pub fn add_task(&mut self, title: &str, tag: &str, now_ms: i64) -> Result<Option<TaskId>, StorageError> {
        let Some(id) = self.records.add_task(title, tag, now_ms) else {
            return Ok(None);
        };
        self.save_tasks()?;
        Ok(Some(id))
    }

    pub fn toggle_task(&mut self, id: &TaskId, now_ms: i64) -> Result<bool, StorageError> {
        if !self.records.toggle_task(id, now_ms) {
            return Ok(false);
        }
        self.save_tasks()?;
        Ok(true)
    }

    pub fn delete_task(&mut self, id: &TaskId) -> Result<bool, StorageError> {
        if !self.records.delete_task(id) {
            return Ok(false);
        }
        self.save_tasks()?;
        Ok(true)
    }

    pub fn record_focus_session(&mut self) -> Result<u64, StorageError> {
        let total = self.records.record_focus_session();
        self.save_focus()?;
        Ok(total)
    }

    pub fn add_mood(&mut self, score: MoodScore, note: &str, now_ms: i64) -> Result<(), StorageError> {
        self.records.add_mood(score, note, now_ms);
        self.save_moods()
    }

    /// Reset every slice to its empty value, in memory and in storage
    pub fn purge(&mut self) -> Result<(), StorageError> {
        self.records.clear();
        self.save_tasks()?;
        self.save_focus()?;
        self.save_moods()?;
        info!("purged all records");
        Ok(())
    }

    fn save_tasks(&mut self) -> Result<(), StorageError> {
        write_slice(self.storage.as_mut(), TASKS_KEY, &self.records.tasks)
    }

    fn save_focus(&mut self) -> Result<(), StorageError> {
        write_slice(self.storage.as_mut(), FOCUS_KEY, &self.records.focus_sessions)
    }

    fn save_moods(&mut self) -> Result<(), StorageError> {
        write_slice(self.storage.as_mut(), MOODS_KEY, &self.records.moods)
    }
}

fn write_slice<T: Serialize + ?Sized>(storage: &mut dyn Storage, key: &str, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &json)?;
    debug!(key, bytes = json.len(), "saved slice");
    Ok(())
}

/// Raw stored text; read failures count as absent
fn read_raw(storage: &dyn Storage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(key, error = %e, "could not read stored value, using default");
            None
        }
    }
}

/// Parse a JSON array, dropping entries that don't deserialize
fn load_list<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Vec<T> {
    let Some(raw) = read_raw(storage, key) else {
        return Vec::new();
    };

    let items = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!(key, "stored value is not a list, using empty list");
            return Vec::new();
        }
        Err(e) => {
            warn!(key, error = %e, "stored value is not valid JSON, using empty list");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(key, index, error = %e, "dropping malformed entry");
                None
            }
        })
        .collect()
}

/// Keep the first task for each id
fn dedupe_tasks(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    tasks
        .into_iter()
        .filter(|task| {
            let fresh = seen.insert(task.id.clone());
            if !fresh {
                warn!(id = %task.id, "dropping task with duplicate id");
            }
            fresh
        })
        .collect()
}

fn load_focus(storage: &dyn Storage) -> u64 {
    let Some(raw) = read_raw(storage, FOCUS_KEY) else {
        return 0;
    };

    let parsed = match serde_json::from_str::<Value>(raw.trim()) {
        Ok(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        _ => None,
    };

    parsed.unwrap_or_else(|| {
        warn!(key = FOCUS_KEY, "stored focus count is not a non-negative number, using 0");
        0
    })
}
