use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub header: Style,
    pub row_highlight: Style,
    pub prompt: Style,
    pub empty: Style,
    pub highlight: Style,
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn highlight_style(&self) -> Style {
        self.highlight
    }

    #[must_use]
    pub fn header_fg(&self) -> Color {
        self.header.fg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn header_bg(&self) -> Color {
        self.header.bg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn row_highlight_bg(&self) -> Color {
        self.row_highlight.bg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn tab_inactive_style(&self) -> Style {
        Style::new()
            .fg(self.header_fg())
            .bg(self.row_highlight_bg())
    }

    #[must_use]
    pub fn tab_highlight_style(&self) -> Style {
        Style::new().bg(self.header_bg())
    }
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self {
            name,
            theme,
            aliases: &[],
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}
