use std::time::Duration;

/// Event poll interval while a focus session is counting down. Several polls per
/// second keep the displayed seconds in step with the one-second beat.
pub const RUNNING_TICK_MS: u64 = 250;

/// Event poll interval when nothing on screen moves on its own
pub const IDLE_TICK_MS: u64 = 1_000;

/// How long the event loop waits for input before redrawing
pub fn poll_timeout(timer_running: bool) -> Duration {
    if timer_running {
        Duration::from_millis(RUNNING_TICK_MS)
    } else {
        Duration::from_millis(IDLE_TICK_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_timeout() {
        assert_eq!(poll_timeout(true), Duration::from_millis(250));
        assert_eq!(poll_timeout(false), Duration::from_secs(1));
        assert!(poll_timeout(true) < Duration::from_secs(1));
    }
}
