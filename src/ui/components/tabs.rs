use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::ui::config::Tab;
use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

/// Render metadata for a tab header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabItem<'a> {
    pub tab: Tab,
    pub label: &'a str,
}

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
    pub query_input: &'a QueryInput<'a>,
    pub input_title: Option<&'a str>,
    pub tab: Tab,
    pub tabs: &'a [TabItem<'a>],
    pub area: Rect,
    pub theme: &'a Theme,
}

/// Render the query input row with tabs at the right.
pub fn render_input_with_tabs(frame: &mut ratatui::Frame, input: InputContext<'_>) {
    let InputContext {
        query_input,
        input_title,
        tab,
        tabs,
        area,
        theme,
    } = input;

    let prompt = input_title.unwrap_or("");
    let tabs_width = calculate_tabs_width(tabs);
    let prompt_width = calculate_prompt_width(prompt);

    let constraints = layout_constraints(!prompt.is_empty(), prompt_width, tabs_width);

    let horizontal = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    if !prompt.is_empty() {
        let prompt_text = format!("{} > ", prompt);
        let prompt_widget =
            ratatui::widgets::Paragraph::new(prompt_text).style(theme.prompt_style());
        frame.render_widget(prompt_widget, horizontal[0]);
    }

    let input_index = if prompt.is_empty() { 0 } else { 1 };
    query_input.render(frame, horizontal[input_index]);

    let tabs_area = horizontal[horizontal.len() - 1];
    let tabs_inner = Rect {
        x: tabs_area.x.saturating_add(1),
        width: tabs_area.width.saturating_sub(1),
        ..tabs_area
    };
    let selected = selected_tab_index(tab, tabs);

    let tab_titles = build_tab_titles(theme, selected, tabs);

    let tabs = Tabs::new(tab_titles)
        .select(selected)
        .divider("")
        .padding("", " ")
        .highlight_style(theme.tab_highlight_style());

    frame.render_widget(tabs, tabs_inner);
}

fn calculate_prompt_width(prompt: &str) -> u16 {
    if prompt.is_empty() {
        0
    } else {
        prompt.len() as u16 + 3
    }
}

fn layout_constraints(
    has_prompt: bool,
    prompt_width: u16,
    tabs_width: u16,
) -> Vec<ratatui::layout::Constraint> {
    if has_prompt {
        vec![
            ratatui::layout::Constraint::Length(prompt_width),
            ratatui::layout::Constraint::Min(1),
            ratatui::layout::Constraint::Length(tabs_width),
        ]
    } else {
        vec![
            ratatui::layout::Constraint::Min(1),
            ratatui::layout::Constraint::Length(tabs_width),
        ]
    }
}

fn selected_tab_index(tab: Tab, tabs: &[TabItem<'_>]) -> usize {
    tabs.iter().position(|item| item.tab == tab).unwrap_or(0)
}

fn build_tab_titles(theme: &Theme, selected: usize, tabs: &[TabItem<'_>]) -> Vec<Line<'static>> {
    let active = theme.header_style();
    let inactive = theme.tab_inactive_style();
    tabs.iter()
        .enumerate()
        .map(|(index, tab)| {
            let label = format!(" {} ", tab.label);
            let style = if index == selected { active } else { inactive };
            Line::from(label).style(style)
        })
        .collect()
}

fn calculate_tabs_width(tabs: &[TabItem<'_>]) -> u16 {
    let mut width = 0u16;
    for tab in tabs {
        let label_len = tab.label.chars().count() as u16;
        width = width.saturating_add(label_len.saturating_add(3));
    }
    width.max(12)
}
