use crate::domain::views::TimerView;
use crate::ui::styles::{border_style, clock_style, meta_style, phase_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the focus timer pane
pub fn render_timer_pane(f: &mut Frame, timer: &TimerView, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled(timer.clock.clone(), clock_style()),
        Line::styled(timer.phase.label(), phase_style(timer.phase)),
        Line::styled(format!("{} min sessions", timer.session_minutes), meta_style()),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Focus Timer ", title_style())),
    );

    f.render_widget(paragraph, area);
}
