use super::enums::TimerPhase;
use std::time::{Duration, Instant};

pub const DEFAULT_SESSION_MINUTES: u32 = 25;
pub const MIN_SESSION_MINUTES: u32 = 5;
pub const MAX_SESSION_MINUTES: u32 = 60;

/// Countdown callback granularity
const TICK: Duration = Duration::from_secs(1);

/// Active countdown. Exists only while the timer runs, so there is never more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Countdown {
    /// Instant at which the session ends
    end: Instant,
    /// Next whole-second beat after start
    next_fire: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running(Countdown),
    Paused,
}

/// What a poll of the countdown produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining_secs: u64 },
    /// Reached zero; the timer is back to Idle with a full session loaded
    Completed,
}

/// Outcome of a session-length change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLengthChange {
    Applied(u32),
    /// Input was not a whole number in range; the default was loaded instead
    ResetToDefault,
}

/// Parse a session length in minutes, accepting only whole numbers within bounds
pub fn parse_session_minutes(input: &str) -> Option<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|m| (MIN_SESSION_MINUTES..=MAX_SESSION_MINUTES).contains(m))
}

/// Format seconds as `MM:SS`
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Round a duration up to whole seconds
fn ceil_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}

/// Focus countdown.
///
/// While running, the remaining time is always derived from a fixed end instant rather than
/// decremented per beat, so late or skipped polls never accumulate drift.
#[derive(Debug, Clone)]
pub struct Timer {
    session_minutes: u32,
    remaining_secs: u64,
    phase: Phase,
}

impl Timer {
    /// New idle timer. Out-of-range lengths fall back to the default.
    pub fn new(session_minutes: u32) -> Self {
        let session_minutes = if (MIN_SESSION_MINUTES..=MAX_SESSION_MINUTES).contains(&session_minutes) {
            session_minutes
        } else {
            DEFAULT_SESSION_MINUTES
        };

        Self {
            session_minutes,
            remaining_secs: session_secs(session_minutes),
            phase: Phase::Idle,
        }
    }

    pub fn session_minutes(&self) -> u32 {
        self.session_minutes
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn phase(&self) -> TimerPhase {
        match self.phase {
            Phase::Idle => TimerPhase::Idle,
            Phase::Running(_) => TimerPhase::Running,
            Phase::Paused => TimerPhase::Paused,
        }
    }

    /// `MM:SS` of the remaining time
    pub fn display(&self) -> String {
        format_clock(self.remaining_secs)
    }

    /// Begin counting down. Returns false (and does nothing) if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }

        self.phase = Phase::Running(Countdown {
            end: now + Duration::from_secs(self.remaining_secs),
            next_fire: now + TICK,
        });
        true
    }

    /// Freeze the remaining time. Returns false if the timer was not running.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.phase = Phase::Paused;
        true
    }

    /// Stop and reload a full session
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.remaining_secs = session_secs(self.session_minutes);
    }

    /// Apply a new session length typed by the user.
    ///
    /// A running timer restarts from the new full length; the in-progress count is discarded.
    pub fn set_session_length(&mut self, input: &str, now: Instant) -> SessionLengthChange {
        let (minutes, change) = match parse_session_minutes(input) {
            Some(minutes) => (minutes, SessionLengthChange::Applied(minutes)),
            None => (DEFAULT_SESSION_MINUTES, SessionLengthChange::ResetToDefault),
        };

        let was_running = self.is_running();
        self.session_minutes = minutes;
        self.reset();
        if was_running {
            self.start(now);
        }

        change
    }

    /// Drive the countdown. Fires at most once per call, on whole-second beats since start;
    /// beats missed while the host was busy are skipped.
    pub fn poll(&mut self, now: Instant) -> Option<TimerEvent> {
        let Phase::Running(mut countdown) = self.phase else {
            return None;
        };

        if now < countdown.next_fire {
            return None;
        }

        let behind = now.duration_since(countdown.next_fire);
        countdown.next_fire += Duration::from_secs(behind.as_secs() + 1);

        let remaining = ceil_secs(countdown.end.saturating_duration_since(now));
        self.remaining_secs = remaining;

        if remaining == 0 {
            self.reset();
            return Some(TimerEvent::Completed);
        }

        self.phase = Phase::Running(countdown);
        Some(TimerEvent::Tick {
            remaining_secs: remaining,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_remaining(session_minutes: u32, remaining_secs: u64) -> Self {
        let mut timer = Self::new(session_minutes);
        timer.remaining_secs = remaining_secs;
        timer
    }
}

fn session_secs(minutes: u32) -> u64 {
    u64::from(minutes) * 60
}
