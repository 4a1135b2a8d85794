use super::text::sanitize_text;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use uuid::Uuid;

/// Opaque task identifier.
///
/// Stored as a plain string so ids written by other generators survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Fresh random (v4) id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Sanitized, never empty
    pub title: String,
    /// Sanitized category label
    pub tag: String,
    pub completed: bool,
    /// Milliseconds since epoch
    pub created_at: i64,
    /// Last time the task was marked complete. Kept when the task is reopened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl Task {
    pub const DEFAULT_TAG: &'static str = "General";

    /// Build a task from raw form input. Returns `None` when the title is empty after
    /// sanitizing.
    pub fn new(id: TaskId, title: &str, tag: &str, now_ms: i64) -> Option<Self> {
        let title = sanitize_text(title);
        if title.is_empty() {
            return None;
        }

        let tag = sanitize_text(tag);
        let tag = if tag.is_empty() {
            Self::DEFAULT_TAG.to_string()
        } else {
            tag
        };

        Some(Self {
            id,
            title,
            tag,
            completed: false,
            created_at: now_ms,
            completed_at: None,
        })
    }

    /// Flip completion; stamps `completed_at` only when becoming complete
    pub fn toggle(&mut self, now_ms: i64) {
        self.completed = !self.completed;
        if self.completed {
            self.completed_at = Some(now_ms);
        }
    }
}

/// Display order: open tasks first, then completed; newest first within each group
pub fn display_order(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by_key(|task| (task.completed, Reverse(task.created_at)));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(id: &str, completed: bool, created_at: i64) -> Task {
        let mut task = Task::new(TaskId::from(id), id, "", created_at).unwrap();
        task.completed = completed;
        task
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(TaskId::from("t1"), "  Plan sprint ", "", 1_000).unwrap();
        assert_eq!(task.title, "Plan sprint");
        assert_eq!(task.tag, Task::DEFAULT_TAG);
        assert!(!task.completed);
        assert_eq!(task.created_at, 1_000);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn test_new_task_rejects_blank_title() {
        assert!(Task::new(TaskId::from("t1"), "", "Work", 0).is_none());
        assert!(Task::new(TaskId::from("t1"), "   ", "Work", 0).is_none());
        assert!(Task::new(TaskId::from("t1"), "\u{0001}\n", "Work", 0).is_none());
    }

    #[test]
    fn test_toggle_keeps_completed_at() {
        let mut task = task("a", false, 0);

        task.toggle(500);
        assert!(task.completed);
        assert_eq!(task.completed_at, Some(500));

        task.toggle(900);
        assert!(!task.completed);
        assert_eq!(task.completed_at, Some(500));

        task.toggle(1_200);
        assert_eq!(task.completed_at, Some(1_200));
    }

    #[test]
    fn test_display_order() {
        let tasks = vec![task("old-open", false, 1), task("done", true, 3), task("new-open", false, 2)];

        let ids: Vec<&str> = display_order(&tasks).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["new-open", "old-open", "done"]);
    }

    #[test]
    fn test_json_shape() {
        let mut task = Task::new(TaskId::from("abc"), "Read", "Books", 10).unwrap();
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"id":"abc","title":"Read","tag":"Books","completed":false,"createdAt":10}"#
        );

        task.toggle(20);
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains(r#""completedAt":20"#));
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(TaskId::generate(), TaskId::generate());
    }
}
