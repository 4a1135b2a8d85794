use crate::domain::views::StatsView;
use crate::ui::styles::{alert_style, border_style, meta_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the completed / focus / mood strip
pub fn render_stats_bar(f: &mut Frame, stats: &StatsView, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Completed ", meta_style()),
        Span::styled(stats.completed.clone(), title_style()),
        Span::styled("   Focus sessions ", meta_style()),
        Span::styled(stats.focus_sessions.clone(), title_style()),
        Span::styled("   Avg mood ", meta_style()),
        Span::styled(stats.mood_average.clone(), title_style()),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(" FlowGuard "),
    );

    f.render_widget(paragraph, area);
}

/// Render the inactivity warning row
pub fn render_stale_alert(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(
        " No new tasks or moods in a few days. Add a task or check in to keep momentum. ",
    ))
    .style(alert_style());
    f.render_widget(paragraph, area);
}
