use engine::{BudgetStatus, Money, TransactionKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Gauge,
};

use crate::ui::theme::Theme;

/// Amount coloured by sign, e.g. the remaining budget.
#[must_use]
pub fn styled_amount(amount: Money, symbol: &str, theme: &Theme) -> Span<'static> {
    let color = if amount.is_positive() {
        theme.positive
    } else if amount.is_negative() {
        theme.negative
    } else {
        theme.text
    };
    Span::styled(amount.format_with(symbol), Style::default().fg(color))
}

/// Amount coloured by the kind of row it belongs to.
#[must_use]
pub fn styled_kind_amount(
    amount: Money,
    kind: TransactionKind,
    symbol: &str,
    theme: &Theme,
) -> Span<'static> {
    let color = match kind {
        TransactionKind::Income => theme.positive,
        TransactionKind::Expense => theme.negative,
    };
    Span::styled(amount.format_with(symbol), Style::default().fg(color))
}

pub fn status_color(status: BudgetStatus, theme: &Theme) -> Color {
    match status {
        BudgetStatus::NoIncome => theme.text_muted,
        BudgetStatus::Healthy => theme.positive,
        BudgetStatus::Warning => theme.warning,
        BudgetStatus::Danger | BudgetStatus::OverBudget => theme.negative,
    }
}

/// Share of income already spent. `progress` is expected in `0..=100`.
#[must_use]
pub fn budget_gauge(progress: f64, status: BudgetStatus, theme: &Theme) -> Gauge<'static> {
    let ratio = (progress / 100.0).clamp(0.0, 1.0);
    Gauge::default()
        .gauge_style(
            Style::default()
                .fg(status_color(status, theme))
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD),
        )
        .ratio(ratio)
        .label(format!("{progress:.1}%"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_use_symbol_and_sign_colour() {
        let theme = Theme::default();
        let span = styled_amount(Money::new(-1_250), "₱", &theme);
        assert_eq!(span.content, "-₱12.50");
        assert_eq!(span.style.fg, Some(theme.negative));

        let span = styled_kind_amount(Money::new(123_456), TransactionKind::Income, "₱", &theme);
        assert_eq!(span.content, "₱1,234.56");
        assert_eq!(span.style.fg, Some(theme.positive));
    }

    #[test]
    fn gauge_colour_follows_status() {
        let theme = Theme::default();
        assert_eq!(status_color(BudgetStatus::Healthy, &theme), theme.positive);
        assert_eq!(status_color(BudgetStatus::Warning, &theme), theme.warning);
        assert_eq!(status_color(BudgetStatus::OverBudget, &theme), theme.negative);
    }
}
