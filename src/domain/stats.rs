use super::mood::MoodEntry;
use super::records::Records;
use super::task::Task;

/// Shown instead of an average when there are no mood entries
pub const MOOD_PLACEHOLDER: &str = "—";

pub const DEFAULT_STALE_AFTER_DAYS: u32 = 3;

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Summary derived from the records. Always recomputed, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub completed_count: usize,
    pub focus_sessions: u64,
    pub mood_average: Option<f64>,
    /// Whether the stale-data warning should be visible
    pub stale: bool,
}

impl Stats {
    pub fn compute(records: &Records, now_ms: i64, stale_after_days: u32) -> Self {
        let last = last_activity(&records.tasks, &records.moods);

        Self {
            completed_count: records.completed_count(),
            focus_sessions: records.focus_sessions,
            mood_average: average_mood(&records.moods),
            stale: is_stale(last, now_ms, stale_after_days),
        }
    }

    /// Average rounded to one decimal (half away from zero), or the placeholder
    pub fn mood_display(&self) -> String {
        match self.mood_average {
            Some(avg) => format!("{:.1}", (avg * 10.0).round() / 10.0),
            None => MOOD_PLACEHOLDER.to_string(),
        }
    }
}

pub fn average_mood(moods: &[MoodEntry]) -> Option<f64> {
    if moods.is_empty() {
        return None;
    }
    let total: u64 = moods.iter().map(|entry| u64::from(entry.score.value())).sum();
    Some(total as f64 / moods.len() as f64)
}

/// Latest task creation or mood timestamp
pub fn last_activity(tasks: &[Task], moods: &[MoodEntry]) -> Option<i64> {
    tasks
        .iter()
        .map(|task| task.created_at)
        .chain(moods.iter().map(|entry| entry.timestamp))
        .max()
}

/// No activity at all is not stale
pub fn is_stale(last_activity: Option<i64>, now_ms: i64, stale_after_days: u32) -> bool {
    match last_activity {
        Some(last) => (now_ms - last) as f64 / MS_PER_DAY >= f64::from(stale_after_days),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mood::MoodScore;

    const DAY_MS: i64 = 86_400_000;

    fn records_with_moods(scores: &[u8]) -> Records {
        let mut records = Records::default();
        for (i, score) in scores.iter().enumerate() {
            records.add_mood(MoodScore::try_from(*score).unwrap(), "", i as i64);
        }
        records
    }

    #[test]
    fn test_mood_average_display() {
        let stats = Stats::compute(&records_with_moods(&[3, 4, 5]), 10, 3);
        assert_eq!(stats.mood_display(), "4.0");

        let stats = Stats::compute(&records_with_moods(&[]), 10, 3);
        assert_eq!(stats.mood_display(), MOOD_PLACEHOLDER);
    }

    #[test]
    fn test_mood_average_rounds_half_up() {
        // 13 / 4 = 3.25
        let stats = Stats::compute(&records_with_moods(&[3, 3, 3, 4]), 10, 3);
        assert_eq!(stats.mood_display(), "3.3");

        let stats = Stats::compute(&records_with_moods(&[1, 2]), 10, 3);
        assert_eq!(stats.mood_display(), "1.5");
    }

    #[test]
    fn test_counts() {
        let mut records = Records::default();
        let id = records.add_task("A", "", 0).unwrap();
        records.add_task("B", "", 0);
        records.toggle_task(&id, 1);
        records.record_focus_session();

        let stats = Stats::compute(&records, 1, 3);
        assert_eq!(stats.completed_count, 1);
        assert_eq!(stats.focus_sessions, 1);
    }

    #[test]
    fn test_staleness() {
        let now = 100 * DAY_MS;

        // No entries: hidden
        assert!(!is_stale(None, now, 3));

        // Recent entry: hidden
        assert!(!is_stale(Some(now - DAY_MS), now, 3));

        // Older than three days: shown
        assert!(is_stale(Some(now - 4 * DAY_MS), now, 3));
    }

    #[test]
    fn test_staleness_uses_newest_entry() {
        let now = 100 * DAY_MS;
        let mut records = Records::default();
        records.add_task("Old", "", now - 10 * DAY_MS);
        records.add_mood(MoodScore::try_from(3).unwrap(), "", now - DAY_MS);

        assert!(!Stats::compute(&records, now, 3).stale);
        assert!(Stats::compute(&records, now + 5 * DAY_MS, 3).stale);
    }
}
