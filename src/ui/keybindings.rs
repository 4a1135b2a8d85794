use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hint text for the current mode
fn hints(mode: UiMode) -> &'static str {
    match mode {
        UiMode::Normal => {
            " ↑/↓ select   a add   Enter/Space done   x delete   s start   p pause   r reset   l length   m mood   P purge   q quit"
        }
        UiMode::AddingTask => " Tab switch field   Enter add   Esc cancel",
        UiMode::LoggingMood => " 1-5 or ←/→ score   Tab switch field   Enter log   Esc cancel",
        UiMode::EditingSessionLength => " 5-60 minutes   Enter apply   Esc cancel",
        UiMode::ConfirmPurge => " y purge everything   n/Esc keep",
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(mode))).style(hint_style());
    f.render_widget(paragraph, area);
}
