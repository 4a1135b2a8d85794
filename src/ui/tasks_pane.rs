use crate::domain::TaskRow;
use crate::ui::styles::{border_style, default_style, done_style, meta_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the task list pane
pub fn render_tasks_pane(f: &mut Frame, rows: &[TaskRow], selected_index: usize, area: Rect) {
    let open = rows.iter().filter(|row| !row.completed).count();
    let title = format!(" Tasks ({} open) ", open);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if rows.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("  Nothing here yet. Press a to add a task.", meta_style()),
        ])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(create_task_lines(row)))
        .collect();

    let list = List::new(items)
        .block(block)
        .style(default_style())
        .highlight_style(selected_style());

    // Stateful render keeps the selection scrolled into view
    let mut state = ListState::default().with_selected(Some(selected_index));
    f.render_stateful_widget(list, area, &mut state);
}

/// Two lines per task:
/// [x] Write report
///     Work • 14 Mar 09:30
fn create_task_lines(row: &TaskRow) -> Vec<Line<'static>> {
    let (checkbox, title_style) = if row.completed {
        ("[x] ", done_style())
    } else {
        ("[ ] ", default_style())
    };

    vec![
        Line::from(vec![
            Span::raw(checkbox),
            Span::styled(row.title.clone(), title_style),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(row.meta.clone(), meta_style()),
        ]),
    ]
}
