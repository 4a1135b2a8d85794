use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub alert_area: Option<Rect>,
    pub stats_area: Rect,
    pub tasks_area: Rect,
    pub timer_area: Rect,
    pub mood_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Stale alert (1 row, only when shown)
/// - Stats strip (3 rows)
/// - Main area: Tasks (60%) | Timer above Mood log (40%)
pub fn create_layout(area: Rect, show_alert: bool) -> MainLayout {
    let alert_height = if show_alert { 1 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Keybindings bar
            Constraint::Length(alert_height), // Stale alert
            Constraint::Length(3),            // Stats strip
            Constraint::Min(0),               // Main content
        ])
        .split(area);

    let horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Tasks pane
            Constraint::Percentage(40), // Timer + mood column
        ])
        .split(main_chunks[3]);

    let right_column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Timer pane
            Constraint::Min(0),    // Mood log
        ])
        .split(horizontal_split[1]);

    MainLayout {
        keybindings_area: main_chunks[0],
        alert_area: show_alert.then_some(main_chunks[1]),
        stats_area: main_chunks[2],
        tasks_area: horizontal_split[0],
        timer_area: right_column[0],
        mood_area: right_column[1],
    }
}

/// Create centered modal area of the given height
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area, false);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.stats_area.height, 3);
        assert!(layout.alert_area.is_none());
        assert!(layout.tasks_area.height > 0);
        assert_eq!(layout.timer_area.height, 7);
        assert!(layout.mood_area.height > 0);
        assert_eq!(layout.tasks_area.width, 60);

        let with_alert = create_layout(area, true);
        let alert = with_alert.alert_area.unwrap();
        assert_eq!(alert.height, 1);
        assert_eq!(with_alert.stats_area.y, alert.y + 1);
        assert_eq!(with_alert.tasks_area.height + 1, layout.tasks_area.height);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area, 12);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 12);
    }
}
