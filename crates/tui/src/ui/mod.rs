pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{AppState, Section, TrackerMode};

use components::hints::{self, common};
pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    // Main layout: info bar, tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar (label + underline)
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Tracker => screens::tracker::render(frame, layout[2], state),
        Section::Statistics => screens::stats::render(frame, layout[2], state),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
    components::help_overlay::render(frame, area, state);
    components::alert::render(frame, area, state.alert.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("File", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.data_file)),
        Span::styled("Rows", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.ledger.len())),
        Span::styled("Currency", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}", state.currency_symbol())),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::tabs::tab_shortcuts(theme);

    let context = context_hints(state);
    if !context.is_empty() {
        parts.push(hints::hint_separator(theme));
        parts.extend(hints::hints_to_spans(&context, theme));
    }

    parts.push(hints::hint_separator(theme));
    parts.push(Span::styled("?", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" help  "));
    parts.push(Span::styled("q", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Returns context-specific keyboard hints based on current section and mode.
fn context_hints(state: &AppState) -> Vec<hints::KeyHint> {
    match state.section {
        Section::Statistics => common::statistics(),
        Section::Tracker => match state.tracker.mode {
            TrackerMode::Browse => common::tracker_browse(),
            TrackerMode::Form | TrackerMode::Edit => common::form_editing(),
            TrackerMode::Search | TrackerMode::Prompt => common::text_input(),
            TrackerMode::ConfirmDelete(_) => common::confirm(),
        },
    }
}
