use engine::CategorySlice;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph,
        canvas::{Canvas, Points},
    },
};

use crate::ui::theme::{Theme, slice_color};

/// Braille dots per terminal cell.
const DOTS_X: u16 = 2;
const DOTS_Y: u16 = 4;

/// Canvas bounds that keep the unit circle round, given that a terminal cell
/// is about twice as tall as it is wide.
fn pie_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    if area.width == 0 || area.height == 0 {
        return ([-1.0, 1.0], [-1.0, 1.0]);
    }
    let aspect = f64::from(area.width) / (2.0 * f64::from(area.height));
    if aspect >= 1.0 {
        ([-aspect, aspect], [-1.0, 1.0])
    } else {
        ([-1.0, 1.0], [-1.0 / aspect, 1.0 / aspect])
    }
}

/// Slice index for a point of the unit disc. Slices start at twelve o'clock
/// and run counterclockwise.
fn slice_at(x: f64, y: f64, cumulative: &[f64]) -> usize {
    let angle = y.atan2(x).to_degrees();
    let from_top = (angle - 90.0).rem_euclid(360.0) / 360.0 * 100.0;
    cumulative
        .iter()
        .position(|&end| from_top < end)
        .unwrap_or(cumulative.len().saturating_sub(1))
}

/// Canvas points of every slice, one braille dot apart.
pub fn pie_points(slices: &[CategorySlice], area: Rect) -> Vec<Vec<(f64, f64)>> {
    let mut points = vec![Vec::new(); slices.len()];
    if slices.is_empty() {
        return points;
    }

    let cumulative: Vec<f64> = slices
        .iter()
        .scan(0.0, |acc, slice| {
            *acc += slice.percent;
            Some(*acc)
        })
        .collect();

    let ([x_min, x_max], [y_min, y_max]) = pie_bounds(area);
    let cols = area.width * DOTS_X;
    let rows = area.height * DOTS_Y;
    let step_x = (x_max - x_min) / f64::from(cols.max(1));
    let step_y = (y_max - y_min) / f64::from(rows.max(1));

    for row in 0..rows {
        let y = y_min + (f64::from(row) + 0.5) * step_y;
        for col in 0..cols {
            let x = x_min + (f64::from(col) + 0.5) * step_x;
            if x * x + y * y <= 1.0 {
                points[slice_at(x, y, &cumulative)].push((x, y));
            }
        }
    }
    points
}

pub fn render_pie(frame: &mut Frame<'_>, area: Rect, slices: &[CategorySlice]) {
    let (x_bounds, y_bounds) = pie_bounds(area);
    let points = pie_points(slices, area);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for (index, coords) in points.iter().enumerate() {
                ctx.draw(&Points {
                    coords,
                    color: slice_color(index),
                });
            }
        });
    frame.render_widget(canvas, area);
}

/// Category names with their share of spending, in slice colours.
pub fn render_legend(frame: &mut Frame<'_>, area: Rect, slices: &[CategorySlice], theme: &Theme) {
    let lines: Vec<Line<'_>> = slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(slice_color(index))),
                Span::styled(slice.category.as_str(), Style::default().fg(theme.text)),
                Span::styled(
                    format!("  {:.1}%", slice.percent),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
