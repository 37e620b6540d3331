//! Visual styling utilities.
//!
//! The `style` module is the umbrella for UI appearance. Themes cover the
//! configurable color schemes; speed classes keep fixed colors so the badges
//! read the same under every theme.

pub mod theme;

use ratatui::style::{Color, Modifier, Style};

use crate::listing::SpeedClass;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};

/// Badge style for a speed class.
#[must_use]
pub fn speed_class_style(class: SpeedClass) -> Style {
    match class {
        SpeedClass::VeryFast => Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
        SpeedClass::Fast => Style::new().fg(Color::Blue),
        SpeedClass::Moderate => Style::new().fg(Color::DarkGray),
        SpeedClass::Slow => Style::new().fg(Color::Red),
    }
}
