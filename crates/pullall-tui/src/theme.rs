//! Theme and styling definitions for the pullall TUI.

use ratatui::style::{Color, Modifier, Style};

/// Color palette, using the terminal's indexed colors.
pub struct Palette;

impl Palette {
    pub const SUCCESS: Color = Color::Indexed(10);
    pub const ERROR: Color = Color::Indexed(9);
    pub const INFO: Color = Color::Indexed(12);
    pub const SPINNER: Color = Color::Indexed(205);
}

/// Styles used by the view, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub success: Style,
    pub error: Style,
    pub info: Style,
    pub spinner: Style,
    pub bold: Style,
    /// Columns of blank space around the final summary.
    pub margin: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            success: Style::default().fg(Palette::SUCCESS),
            error: Style::default().fg(Palette::ERROR),
            info: Style::default().fg(Palette::INFO),
            spinner: Style::default().fg(Palette::SPINNER),
            bold: Style::default().add_modifier(Modifier::BOLD),
            margin: 2,
        }
    }
}
