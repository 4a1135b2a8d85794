use super::enums::TimerPhase;
use super::mood::{latest, MOOD_LOG_LIMIT};
use super::records::Records;
use super::stats::Stats;
use super::task::{display_order, TaskId};
use super::timer::Timer;
use chrono::{Local, TimeZone};

/// One row of the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    /// "tag • date"
    pub meta: String,
    pub completed: bool,
}

/// One entry of the mood log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodRow {
    pub score: u8,
    pub time: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerView {
    /// MM:SS
    pub clock: String,
    pub phase: TimerPhase,
    pub session_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub completed: String,
    pub focus_sessions: String,
    pub mood_average: String,
    pub stale_visible: bool,
}

/// Everything the screen shows, computed from state alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub tasks: Vec<TaskRow>,
    pub moods: Vec<MoodRow>,
    pub timer: TimerView,
    pub stats: StatsView,
}

impl Dashboard {
    pub fn build(records: &Records, timer: &Timer, now_ms: i64, stale_after_days: u32) -> Self {
        let tasks = display_order(&records.tasks)
            .into_iter()
            .map(|task| TaskRow {
                id: task.id.clone(),
                title: task.title.clone(),
                meta: format!("{} • {}", task.tag, format_timestamp(task.created_at)),
                completed: task.completed,
            })
            .collect();

        let moods = latest(&records.moods, MOOD_LOG_LIMIT)
            .into_iter()
            .map(|entry| MoodRow {
                score: entry.score.value(),
                time: format_timestamp(entry.timestamp),
                note: (!entry.note.is_empty()).then(|| entry.note.clone()),
            })
            .collect();

        let stats = Stats::compute(records, now_ms, stale_after_days);

        Self {
            tasks,
            moods,
            timer: TimerView {
                clock: timer.display(),
                phase: timer.phase(),
                session_minutes: timer.session_minutes(),
            },
            stats: StatsView {
                completed: stats.completed_count.to_string(),
                focus_sessions: stats.focus_sessions.to_string(),
                mood_average: stats.mood_display(),
                stale_visible: stats.stale,
            },
        }
    }
}

/// Local "dd Mon HH:MM" for a millisecond timestamp
pub fn format_timestamp(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%d %b %H:%M").to_string(),
        None => String::new(),
    }
}
