use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub current_line_bg: Color,
    pub bar: Color,       // Untouched element
    pub comparing: Color, // Yellow
    pub swapping: Color,  // Pink
    pub sorted: Color,    // Green
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    bar: Color::Rgb(137, 180, 250),
    comparing: Color::Rgb(249, 226, 175),
    swapping: Color::Rgb(245, 194, 231),
    sorted: Color::Rgb(166, 227, 161),
};
