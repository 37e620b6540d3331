use ratatui::style::{Color, Modifier, Style};

use crate::ui::style::theme::types::{Theme, ThemeDefinition};

pub const NAME: &str = "light";

pub const LIGHT: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(30, 41, 59))
        .bg(Color::Rgb(226, 232, 240)),
    row_highlight: Style::new()
        .bg(Color::Rgb(203, 213, 225))
        .fg(Color::Rgb(146, 64, 14)),
    prompt: Style::new().fg(Color::Blue),
    empty: Style::new().fg(Color::Gray),
    highlight: Style::new()
        .fg(Color::Rgb(146, 64, 14))
        .add_modifier(Modifier::BOLD),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, LIGHT);
