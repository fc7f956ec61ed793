use engine::{ChartData, Dashboard};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::{Card, StatCard},
            charts,
            money::{budget_gauge, status_color, styled_amount},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let dashboard = state.ledger.dashboard(state.stats.month);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Month selector
            Constraint::Min(8),    // Pie chart + legend
            Constraint::Length(9), // Budget summary
        ])
        .split(area);

    render_month_selector(frame, layout[0], &dashboard, &theme);
    render_chart(frame, layout[1], &dashboard, &theme);
    render_budget(frame, layout[2], state, &dashboard, &theme);
}

fn render_month_selector(frame: &mut Frame<'_>, area: Rect, dashboard: &Dashboard, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(theme.accent)),
        Span::styled(
            dashboard.month.label(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(theme.accent)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_chart(frame: &mut Frame<'_>, area: Rect, dashboard: &Dashboard, theme: &Theme) {
    let card = Card::new("Expenses by Category", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let ChartData::Slices(slices) = &dashboard.chart else {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No Expenses Found",
                Style::default().fg(theme.text_muted),
            )))
            .alignment(Alignment::Center),
            vertical[1],
        );
        return;
    };

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);
    charts::render_pie(frame, split[0], slices);
    charts::render_legend(frame, split[1], slices, theme);
}

fn render_budget(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    dashboard: &Dashboard,
    theme: &Theme,
) {
    let card = Card::new("Budget Summary", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Income / Spent / Remaining
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Status line
        ])
        .split(inner);

    let symbol = state.currency_symbol();
    let figures = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);
    StatCard::new(
        "Income",
        Span::styled(
            dashboard.total_income.format_with(symbol),
            Style::default().fg(theme.positive),
        ),
        theme,
    )
    .render(frame, figures[0]);
    StatCard::new(
        "Spent",
        Span::styled(
            dashboard.total_expenses.format_with(symbol),
            Style::default().fg(theme.negative),
        ),
        theme,
    )
    .render(frame, figures[1]);
    StatCard::new(
        "Remaining",
        styled_amount(dashboard.remaining, symbol, theme),
        theme,
    )
    .render(frame, figures[2]);

    frame.render_widget(
        budget_gauge(dashboard.progress(), dashboard.status, theme),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            dashboard.status_line(),
            Style::default().fg(status_color(dashboard.status, theme)),
        )))
        .alignment(Alignment::Center),
        rows[3],
    );
}
