use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingSessionLength => handle_input_form_mode(app, key),
        UiMode::LoggingMood => handle_mood_form_mode(app, key),
        UiMode::ConfirmPurge => handle_confirm_purge_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Toggle completion
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected()?;
            Ok(false)
        }

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected()?;
            Ok(false)
        }

        // Timer controls
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.start_timer();
            Ok(false)
        }
        KeyCode::Char('p') => {
            app.pause_timer();
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer();
            Ok(false)
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.start_edit_session_length();
            Ok(false)
        }

        // Log mood
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.start_log_mood();
            Ok(false)
        }

        // Purge everything (asks first)
        KeyCode::Char('P') => {
            app.request_purge();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in the task form and the session length prompt
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_form()?;
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_form();
            Ok(false)
        }

        // Switch between title and tag
        KeyCode::Tab => {
            app.form_toggle_field();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the mood form
fn handle_mood_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Arrows step the score from anywhere in the form
        KeyCode::Left => {
            app.mood_form_step_score(false);
            Ok(false)
        }
        KeyCode::Right => {
            app.mood_form_step_score(true);
            Ok(false)
        }
        _ => handle_input_form_mode(app, key),
    }
}

/// Handle keys while the purge confirmation is open
fn handle_confirm_purge_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_purge()?;
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_purge();
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::Config;
    use crate::domain::TimerPhase;
    use crate::persistence::storage::MemoryStorage;
    use crate::persistence::Store;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_app() -> AppState {
        let store = Store::load(Box::new(MemoryStorage::new()));
        AppState::new(store, Config::default(), Box::new(ManualClock::new(1_700_000_000_000)))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        app.add_task("Task 1", "").unwrap();
        app.add_task("Task 2", "").unwrap();

        assert_eq!(app.selected_index, 0);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c).unwrap());
    }

    #[test]
    fn test_handle_add_task() {
        let mut app = create_test_app();

        // Press 'a' to open form
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.task_form.is_some());

        // Typing 'q' in a form is text, not quit
        type_text(&mut app, "quiz");
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "School");

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.task_form.is_none());

        let task = &app.store.records().tasks[0];
        assert_eq!(task.title, "quiz");
        assert_eq!(task.tag, "School");
    }

    #[test]
    fn test_handle_toggle_and_delete() {
        let mut app = create_test_app();
        app.add_task("Task", "").unwrap();

        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.store.records().tasks[0].completed);
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.store.records().tasks[0].completed);

        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert!(app.store.records().tasks.is_empty());
    }

    #[test]
    fn test_handle_timer_keys() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert_eq!(app.timer.phase(), TimerPhase::Running);
        handle_key(&mut app, key(KeyCode::Char('p'))).unwrap();
        assert_eq!(app.timer.phase(), TimerPhase::Paused);
        handle_key(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_handle_session_length() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('l'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingSessionLength);
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        type_text(&mut app, "45");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.timer.session_minutes(), 45);
        assert_eq!(app.timer.display(), "45:00");
    }

    #[test]
    fn test_handle_mood_form() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('m'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::LoggingMood);

        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "calm");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        let mood = &app.store.records().moods[0];
        assert_eq!(mood.score.value(), 2);
        assert_eq!(mood.note, "calm");
    }

    #[test]
    fn test_handle_purge_requires_confirmation() {
        let mut app = create_test_app();
        app.add_task("Keep me", "").unwrap();

        handle_key(&mut app, key(KeyCode::Char('P'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::ConfirmPurge);

        // Other keys are ignored while confirming
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(!handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());
        assert_eq!(app.store.records().tasks.len(), 1);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.records().tasks.len(), 1);

        handle_key(&mut app, key(KeyCode::Char('P'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert!(app.store.records().tasks.is_empty());
    }
}
