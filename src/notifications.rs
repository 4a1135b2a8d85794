/// Desktop notifications
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a focus session finishes
pub fn notify_session_complete(total_sessions: u64) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "Focus session #{} complete. Take a break." with title "FlowGuard""#,
            total_sessions
        );

        let _ = Command::new("osascript").arg("-e").arg(&script).output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = total_sessions;
    }
}
