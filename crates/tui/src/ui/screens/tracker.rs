use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};

use crate::{
    app::{AppState, FormField, TrackerMode, TransactionForm},
    ui::{
        components::{card::Card, centered_fixed, money::styled_kind_amount},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Add form
            Constraint::Length(3), // Search / sort
            Constraint::Min(0),    // History
        ])
        .split(area);

    let editing = state.tracker.mode == TrackerMode::Form;
    let card = Card::new("Add Transaction", &theme).focused(editing);
    card.render_with(
        frame,
        layout[0],
        Paragraph::new(form_lines(&state.tracker.form, editing, &theme)),
    );

    render_search(frame, layout[1], state, &theme);
    render_history(frame, layout[2], state, &theme);

    match state.tracker.mode {
        TrackerMode::Edit => render_edit(frame, area, state, &theme),
        TrackerMode::ConfirmDelete(_) => render_confirm(frame, area, &theme),
        TrackerMode::Prompt => render_prompt(frame, area, state, &theme),
        TrackerMode::Browse | TrackerMode::Form | TrackerMode::Search => {}
    }
}

fn form_lines(form: &TransactionForm, active: bool, theme: &Theme) -> Vec<Line<'static>> {
    FormField::ALL
        .iter()
        .map(|&field| {
            let focused = active && form.focus == field;
            let label_style = if focused {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_muted)
            };
            let value = form.value(field);
            let value = match field {
                FormField::Kind if value.is_empty() => Span::styled(
                    "◀ select ▶",
                    Style::default().fg(theme.text_muted),
                ),
                FormField::Kind => Span::styled(
                    format!("◀ {value} ▶"),
                    Style::default().fg(theme.text),
                ),
                _ => Span::styled(value, Style::default().fg(theme.text)),
            };

            let mut spans = vec![
                Span::styled(format!("{:<10}", field.label()), label_style),
                value,
            ];
            if focused && field != FormField::Kind {
                spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_search(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let tracker = &state.tracker;
    let searching = tracker.mode == TrackerMode::Search;

    let mut spans = vec![
        Span::styled("Search", Style::default().fg(theme.text_muted)),
        Span::raw(": "),
        Span::styled(tracker.search.clone(), Style::default().fg(theme.text)),
    ];
    if searching {
        spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
    }
    spans.push(Span::raw("   "));
    spans.push(Span::styled("Sort", Style::default().fg(theme.text_muted)));
    spans.push(Span::raw(format!(": {}", tracker.order.label())));
    if tracker.applied.is_some() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} of {} shown", tracker.rows.len(), state.ledger.len()),
            Style::default().fg(theme.text_muted),
        ));
    }

    Card::new("Search / Sort", theme)
        .focused(searching)
        .render_with(frame, area, Paragraph::new(Line::from(spans)));
}

fn render_history(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Transaction History", theme);
    if state.tracker.rows.is_empty() {
        let message = if state.ledger.is_empty() {
            "No transactions yet. Press a to add one."
        } else {
            "No transactions match the search."
        };
        card.render_with(
            frame,
            area,
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(theme.text_muted),
            )))
            .alignment(Alignment::Center),
        );
        return;
    }

    let symbol = state.currency_symbol();
    let rows = state
        .tracker
        .rows
        .iter()
        .filter_map(|&index| state.ledger.get(index))
        .map(|tx| {
            Row::new(vec![
                Cell::from(tx.date.to_string()),
                Cell::from(tx.kind.as_str()),
                Cell::from(tx.category.clone()),
                Cell::from(styled_kind_amount(tx.amount, tx.kind, symbol, theme)),
                Cell::from(tx.notes.clone()),
            ])
        });

    let header = Row::new(["Date", "Type", "Category", "Amount", "Notes"]).style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(20),
            Constraint::Length(14),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(card.block())
    .row_highlight_style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::REVERSED),
    )
    .highlight_symbol("» ");

    let mut table_state = TableState::default().with_selected(state.tracker.selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn popup_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface))
}

fn render_edit(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let Some(edit) = &state.tracker.edit else {
        return;
    };
    let rect = centered_fixed(56, 8, area);
    let mut lines = form_lines(&edit.form, true, theme);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter save  Esc cancel",
        Style::default().fg(theme.text_muted),
    )));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(popup_block("Edit Entry", theme)),
        rect,
    );
}

fn render_confirm(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let rect = centered_fixed(34, 5, area);
    let lines = vec![
        Line::from("Delete this entry?"),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.accent)),
            Span::raw(" yes   "),
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::raw(" no"),
        ]),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(popup_block("Confirm Delete", theme)),
        rect,
    );
}

fn render_prompt(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let Some(prompt) = &state.tracker.prompt else {
        return;
    };
    let rect = centered_fixed(64, 5, area);
    let lines = vec![
        Line::from(vec![
            Span::styled("Path", Style::default().fg(theme.text_muted)),
            Span::raw(": "),
            Span::styled(prompt.input.clone(), Style::default().fg(theme.text)),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ]),
        Line::from(Span::styled(
            "Enter confirm  Esc cancel",
            Style::default().fg(theme.text_muted),
        )),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(prompt.purpose.title(), theme)),
        rect,
    );
}
