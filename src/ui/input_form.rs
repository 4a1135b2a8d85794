use crate::app::{AppState, MoodFormState, TaskFormState};
use crate::domain::mood::NOTE_MAX_CHARS;
use crate::domain::timer::{MAX_SESSION_MINUTES, MIN_SESSION_MINUTES};
use crate::domain::MoodScore;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, mood_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render whichever input form is open
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.task_form {
        render_form(f, area, " Add Task ", task_form_lines(form));
    } else if let Some(form) = &app.mood_form {
        render_form(f, area, " Log Mood ", mood_form_lines(form));
    } else if let Some(input) = &app.session_length_input {
        render_form(f, area, " Session Length ", session_length_lines(input));
    }
}

fn render_form(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let modal_area = create_modal_area(area, lines.len() as u16 + 2);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title.to_string(), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Label plus "> value█" for a text field
fn text_field<'a>(label: &'a str, value: &'a str, editing: bool) -> [Line<'a>; 2] {
    let label = if editing {
        Line::raw(format!("{} (editing)", label))
    } else {
        Line::raw(label)
    };

    let value = Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]);

    [label, value]
}

fn task_form_lines(form: &TaskFormState) -> Vec<Line<'_>> {
    let mut lines = vec![Line::raw("")];
    lines.extend(text_field("Title:", &form.title, form.editing_field == 0));
    lines.push(Line::raw(""));
    lines.extend(text_field("Tag:", &form.tag, form.editing_field == 1));
    lines.push(Line::raw(""));
    lines.push(Line::raw("Tab to switch fields  ·  Enter to add  ·  Esc to cancel"));
    lines.push(Line::raw("(Empty tag files the task under General)"));
    lines
}

fn mood_form_lines(form: &MoodFormState) -> Vec<Line<'_>> {
    let editing_score = form.editing_field == 0;

    let mut scale = vec![Span::raw("  ")];
    for value in MoodScore::MIN..=MoodScore::MAX {
        let chosen = form.score.map(MoodScore::value) == Some(value);
        let span = if chosen {
            Span::styled(format!("[{}]", value), mood_style(value))
        } else {
            Span::raw(format!(" {} ", value))
        };
        scale.push(span);
        scale.push(Span::raw(" "));
    }

    let mut lines = vec![
        Line::raw(""),
        Line::raw(if editing_score {
            "Score 1-5: (editing)"
        } else {
            "Score 1-5:"
        }),
        Line::from(scale),
        Line::raw(""),
    ];
    lines.extend(text_field("Note (optional):", &form.note, !editing_score));
    lines.push(Line::raw(format!("  {}/{} characters", form.note.chars().count(), NOTE_MAX_CHARS)));
    lines.push(Line::raw(""));
    lines.push(Line::raw("1-5 or ←/→ to score  ·  Tab to switch  ·  Enter to log  ·  Esc to cancel"));
    lines
}

fn session_length_lines(input: &str) -> Vec<Line<'_>> {
    let mut lines = vec![Line::raw("")];
    lines.extend(text_field("Minutes per session:", input, true));
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!(
        "Whole minutes from {} to {}; anything else loads the default",
        MIN_SESSION_MINUTES, MAX_SESSION_MINUTES
    )));
    lines.push(Line::raw("Enter to apply  ·  Esc to cancel"));
    lines
}
