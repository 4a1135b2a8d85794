use super::text::{sanitize_text, truncate_chars};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use thiserror::Error;

/// Maximum note length in characters
pub const NOTE_MAX_CHARS: usize = 160;

/// Number of entries shown in the mood log
pub const MOOD_LOG_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("mood score {0} is outside 1-5")]
pub struct InvalidScore(pub u8);

/// Mood rating in 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const LOWEST: Self = Self(Self::MIN);
    pub const HIGHEST: Self = Self(Self::MAX);

    pub fn value(self) -> u8 {
        self.0
    }

    /// Next score up, saturating at 5
    pub fn raise(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// Next score down, saturating at 1
    pub fn lower(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl TryFrom<u8> for MoodScore {
    type Error = InvalidScore;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidScore(value))
        }
    }
}

impl From<MoodScore> for u8 {
    fn from(score: MoodScore) -> Self {
        score.0
    }
}

/// One mood check-in. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub score: MoodScore,
    #[serde(default)]
    pub note: String,
    /// Milliseconds since epoch
    pub timestamp: i64,
}

impl MoodEntry {
    pub fn new(score: MoodScore, note: &str, now_ms: i64) -> Self {
        Self {
            score,
            note: clean_note(note),
            timestamp: now_ms,
        }
    }
}

/// Sanitize and cap a note
pub fn clean_note(note: &str) -> String {
    truncate_chars(&sanitize_text(note), NOTE_MAX_CHARS)
}

/// The `limit` most recent entries, newest first
pub fn latest(moods: &[MoodEntry], limit: usize) -> Vec<&MoodEntry> {
    let mut ordered: Vec<&MoodEntry> = moods.iter().collect();
    ordered.sort_by_key(|entry| Reverse(entry.timestamp));
    ordered.truncate(limit);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: u8) -> MoodScore {
        MoodScore::try_from(value).unwrap()
    }

    #[test]
    fn test_score_bounds() {
        assert!(MoodScore::try_from(0).is_err());
        assert_eq!(MoodScore::try_from(1).map(MoodScore::value), Ok(1));
        assert_eq!(MoodScore::try_from(5).map(MoodScore::value), Ok(5));
        assert_eq!(MoodScore::try_from(6), Err(InvalidScore(6)));
    }

    #[test]
    fn test_score_raise_lower_saturate() {
        assert_eq!(score(5).raise(), score(5));
        assert_eq!(score(3).raise(), score(4));
        assert_eq!(score(1).lower(), score(1));
        assert_eq!(score(2).lower(), score(1));
    }

    #[test]
    fn test_note_is_sanitized_and_truncated() {
        let long = "x".repeat(200);
        let entry = MoodEntry::new(score(3), &format!("  {long}\u{0000} "), 42);
        assert_eq!(entry.note.chars().count(), NOTE_MAX_CHARS);
        assert_eq!(entry.timestamp, 42);

        let entry = MoodEntry::new(score(4), " calm\n", 1);
        assert_eq!(entry.note, "calm");
    }

    #[test]
    fn test_latest_limits_and_orders() {
        let moods: Vec<MoodEntry> = (0..7).map(|i| MoodEntry::new(score(3), "", i)).collect();

        let shown: Vec<i64> = latest(&moods, MOOD_LOG_LIMIT).iter().map(|m| m.timestamp).collect();
        assert_eq!(shown, vec![6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_out_of_range_score_fails_to_deserialize() {
        let parsed: Result<MoodEntry, _> = serde_json::from_str(r#"{"score":9,"note":"","timestamp":1}"#);
        assert!(parsed.is_err());

        let parsed: MoodEntry = serde_json::from_str(r#"{"score":2,"note":"meh","timestamp":1}"#).unwrap();
        assert_eq!(parsed.score, score(2));
    }
}
