use crate::ui::{
    layout::create_modal_area,
    styles::{danger_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the purge confirmation modal
pub fn render_purge_modal(f: &mut Frame, area: Rect) {
    let modal_area = create_modal_area(area, 10);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw("  Clear all saved FlowGuard data?"),
        Line::raw(""),
        Line::raw("  Tasks, focus sessions and moods will be erased."),
        Line::raw("  This cannot be undone."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", danger_style()),
            Span::raw(" Purge  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Keep my data"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Purge Data ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
