use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{AppState, Section},
    ui::{
        components::{
            centered_rect,
            hints::{KeyHint, common},
            tabs,
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    if !state.help {
        return;
    }

    let theme = Theme::default();
    let popup = centered_rect(60, 70, area);
    let block = Block::default()
        .title(Span::styled(" Keybinds ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.surface));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(help_lines(state, &theme)).block(block), popup);
}

fn help_lines(state: &AppState, theme: &Theme) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let rows = |hints: Vec<KeyHint>| -> Vec<Line<'static>> {
        hints
            .into_iter()
            .map(|hint| {
                Line::from(vec![
                    Span::styled(format!("  {:<7}", hint.key), Style::default().fg(theme.accent)),
                    Span::raw(hint.action),
                ])
            })
            .collect()
    };

    let mut lines = vec![heading("Global"), Line::from(tabs::tab_shortcuts(theme))];
    lines.extend(rows(vec![
        KeyHint::new("?", "toggle help"),
        KeyHint::new("q", "quit"),
        KeyHint::new("Ctrl+C", "quit"),
    ]));
    lines.push(Line::from(""));

    match state.section {
        Section::Tracker => {
            lines.push(heading("Tracker"));
            lines.extend(rows(vec![KeyHint::new("↑↓ j/k", "select row")]));
            lines.extend(rows(common::tracker_browse()));
            lines.push(Line::from(""));
            lines.push(heading("Add / edit form"));
            lines.extend(rows(common::form_editing()));
        }
        Section::Statistics => {
            lines.push(heading("Statistics"));
            lines.extend(rows(common::statistics()));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" close"),
    ]));
    lines
}
