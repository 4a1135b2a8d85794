use super::mood::{MoodEntry, MoodScore};
use super::task::{Task, TaskId};

/// In-memory state shared by every feature: tasks, completed focus sessions and mood log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Records {
    pub tasks: Vec<Task>,
    pub focus_sessions: u64,
    pub moods: Vec<MoodEntry>,
}

impl Records {
    /// Append a task built from raw input. Returns the new id, or `None` if the title was blank.
    pub fn add_task(&mut self, title: &str, tag: &str, now_ms: i64) -> Option<TaskId> {
        let id = self.fresh_task_id();
        let task = Task::new(id.clone(), title, tag, now_ms)?;
        self.tasks.push(task);
        Some(id)
    }

    /// Returns false if no task has this id
    pub fn toggle_task(&mut self, id: &TaskId, now_ms: i64) -> bool {
        match self.tasks.iter_mut().find(|task| &task.id == id) {
            Some(task) => {
                task.toggle(now_ms);
                true
            }
            None => false,
        }
    }

    /// Returns false if no task has this id
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        self.tasks.len() != before
    }

    /// Count one finished focus session, returning the new total
    pub fn record_focus_session(&mut self) -> u64 {
        self.focus_sessions += 1;
        self.focus_sessions
    }

    pub fn add_mood(&mut self, score: MoodScore, note: &str, now_ms: i64) -> &MoodEntry {
        self.moods.push(MoodEntry::new(score, note, now_ms));
        &self.moods[self.moods.len() - 1]
    }

    /// Drop everything back to empty/zero
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.focus_sessions = 0;
        self.moods.clear();
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    fn fresh_task_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if !self.tasks.iter().any(|task| task.id == id) {
                return id;
            }
        }
    }
}
