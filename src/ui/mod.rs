pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod mood_pane;
pub mod stats_bar;
pub mod styles;
pub mod tasks_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_purge_modal;
use mood_pane::render_mood_pane;
use ratatui::Frame;
use stats_bar::{render_stale_alert, render_stats_bar};
use tasks_pane::render_tasks_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI from a fresh dashboard
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let dashboard = app.dashboard();
    let layout = create_layout(size, dashboard.stats.stale_visible);

    render_keybindings(f, app.ui_mode, layout.keybindings_area);

    if let Some(alert_area) = layout.alert_area {
        render_stale_alert(f, alert_area);
    }

    render_stats_bar(f, &dashboard.stats, layout.stats_area);
    render_tasks_pane(f, &dashboard.tasks, app.selected_index, layout.tasks_area);
    render_timer_pane(f, &dashboard.timer, layout.timer_area);
    render_mood_pane(f, &dashboard.moods, layout.mood_area);

    // Purge confirmation takes precedence
    if app.ui_mode == UiMode::ConfirmPurge {
        render_purge_modal(f, size);
        return;
    }

    render_input_form(f, app, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::Config;
    use crate::domain::MoodScore;
    use crate::persistence::storage::MemoryStorage;
    use crate::persistence::Store;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn create_test_app() -> (AppState, ManualClock) {
        let clock = ManualClock::new(1_700_000_000_000);
        let store = Store::load(Box::new(MemoryStorage::new()));
        let app = AppState::new(store, Config::default(), Box::new(clock.clone()));
        (app, clock)
    }

    /// Draw one frame and return the screen as plain text
    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_empty_state() {
        let (app, _) = create_test_app();
        let screen = draw(&app);

        assert!(screen.contains("Tasks (0 open)"));
        assert!(screen.contains("25:00"));
        assert!(screen.contains("Ready"));
        assert!(screen.contains("No moods logged"));
        assert!(!screen.contains("No new tasks or moods"));
    }

    #[test]
    fn test_render_records() {
        let (mut app, _) = create_test_app();
        app.add_task("Write report", "Work").unwrap();
        app.submit_mood(MoodScore::try_from(4).ok(), "steady").unwrap();
        let screen = draw(&app);

        assert!(screen.contains("Tasks (1 open)"));
        assert!(screen.contains("Write report"));
        assert!(screen.contains("4/5"));
        assert!(screen.contains("steady"));
        assert!(screen.contains("Avg mood 4.0"));
    }

    #[test]
    fn test_render_stale_alert() {
        let (mut app, clock) = create_test_app();
        app.add_task("Old task", "").unwrap();
        clock.advance(Duration::from_secs(4 * 86_400));

        assert!(draw(&app).contains("No new tasks or moods"));
    }

    #[test]
    fn test_render_overlays() {
        let (mut app, _) = create_test_app();

        app.start_add_task();
        assert!(draw(&app).contains("Add Task"));
        app.cancel_form();

        app.start_edit_session_length();
        assert!(draw(&app).contains("Session Length"));
        app.cancel_form();

        app.request_purge();
        let screen = draw(&app);
        assert!(screen.contains("Purge Data"));
        assert!(screen.contains("y purge everything"));
    }
}
