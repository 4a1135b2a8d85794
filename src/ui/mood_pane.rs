use crate::domain::MoodRow;
use crate::ui::styles::{border_style, default_style, meta_style, mood_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the recent mood log
pub fn render_mood_pane(f: &mut Frame, rows: &[MoodRow], area: Rect) {
    let lines: Vec<Line> = if rows.is_empty() {
        vec![Line::styled(" No moods logged. Press m to check in.", meta_style())]
    } else {
        rows.iter().map(create_mood_line).collect()
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Mood Log ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// Format: Mood: 4/5  14 Mar 09:30  slept well
fn create_mood_line(row: &MoodRow) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!(" Mood: {}/5 ", row.score), mood_style(row.score)),
        Span::styled(format!(" {} ", row.time), meta_style()),
    ];
    if let Some(note) = &row.note {
        spans.push(Span::styled(format!(" {}", note), default_style()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_line_without_note() {
        let row = MoodRow {
            score: 3,
            time: "14 Mar 09:30".to_string(),
            note: None,
        };
        let line = create_mood_line(&row);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, " Mood: 3/5 ");
    }

    #[test]
    fn test_mood_line_with_note() {
        let row = MoodRow {
            score: 5,
            time: "14 Mar 09:30".to_string(),
            note: Some("great run".to_string()),
        };
        let line = create_mood_line(&row);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[2].content, " great run");
    }
}
