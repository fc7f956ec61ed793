use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            surface: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(60, 70, 80),
            border_focused: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(90, 180, 110),
            negative: Color::Rgb(210, 95, 95),
            warning: Color::Rgb(220, 170, 60),
            error: Color::Rgb(200, 80, 80),
        }
    }
}

/// Pie slice colours, reused in order when there are more categories.
pub const SLICE_COLORS: [Color; 12] = [
    Color::Rgb(141, 211, 199),
    Color::Rgb(255, 255, 179),
    Color::Rgb(190, 186, 218),
    Color::Rgb(251, 128, 114),
    Color::Rgb(128, 177, 211),
    Color::Rgb(253, 180, 98),
    Color::Rgb(179, 222, 105),
    Color::Rgb(252, 205, 229),
    Color::Rgb(217, 217, 217),
    Color::Rgb(188, 128, 189),
    Color::Rgb(204, 235, 197),
    Color::Rgb(255, 237, 111),
];

pub fn slice_color(index: usize) -> Color {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}
