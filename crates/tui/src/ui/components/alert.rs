use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    app::{Alert, AlertLevel},
    ui::{components::centered_fixed, theme::Theme},
};

/// Modal message box, drawn above everything else.
pub fn render(frame: &mut Frame<'_>, area: Rect, alert: Option<&Alert>) {
    let Some(alert) = alert else {
        return;
    };
    let theme = Theme::default();

    let longest = alert
        .message
        .lines()
        .map(|line| line.chars().count())
        .chain(std::iter::once(alert.title.chars().count()))
        .max()
        .unwrap_or(0);
    let width = (longest + 6).max(30) as u16;
    let height = alert.message.lines().count() as u16 + 5;
    let rect = centered_fixed(width, height, area);

    let color = match alert.level {
        AlertLevel::Info => theme.positive,
        AlertLevel::Warning => theme.warning,
        AlertLevel::Error => theme.error,
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", alert.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.surface));

    let mut lines: Vec<Line<'_>> = alert
        .message
        .lines()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.text))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::styled(" ok", Style::default().fg(theme.text_muted)),
    ]));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        rect,
    );
}
