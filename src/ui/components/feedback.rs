//! Feedback tab: interview prompts for validating the sample data.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::ui::style::Theme;

/// Argument bundle for rendering the feedback tab.
pub struct FeedbackContext<'a> {
    pub location_label: &'a str,
    pub show_risk_notes: bool,
    pub theme: &'a Theme,
}

/// Render the feedback prompts and the mock form side by side.
pub fn render_feedback(frame: &mut Frame, area: Rect, context: FeedbackContext<'_>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_prompts(frame, columns[0], &context);
    render_form(frame, columns[1], &context);
}

fn render_prompts(frame: &mut Frame, area: Rect, context: &FeedbackContext<'_>) {
    let lines = vec![
        Line::from("This is a mock. The goal is to pressure-test the real-world workflow."),
        Line::from(""),
        Line::styled("What we need", context.theme.highlight_style()),
        Line::from("• Agency list accuracy: which agencies matter in each city?"),
        Line::from("• Placement reality: what docs, steps, and timelines are typical?"),
        Line::from("• Fast roles: which roles get hired within 72 hours?"),
        Line::from("• Dealbreakers: what slows hiring?"),
        Line::from("• Risk note: which tech roles are risky to leave vacant?"),
    ];

    render_panel(frame, area, "What we need", lines, context.theme);
}

fn render_form(frame: &mut Frame, area: Rect, context: &FeedbackContext<'_>) {
    let toggle_text = if context.show_risk_notes { "On" } else { "Off" };
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Location       ", context.theme.empty_style()),
            Span::raw(context.location_label.to_string()),
        ]),
        Line::from(""),
    ];
    lines.extend(question(
        "Which agencies should be listed here?",
        "Comma-separated agency names",
        context.theme,
    ));
    lines.extend(question(
        "What's the real placement process?",
        "IDs, background checks, orientations…",
        context.theme,
    ));
    lines.extend(question(
        "Fastest roles in this city?",
        "Warehouse, hospitality, admin, help desk…",
        context.theme,
    ));
    lines.extend(question(
        "What slows hiring?",
        "Late arrivals, missing docs, poor availability…",
        context.theme,
    ));
    lines.push(Line::from(format!(
        "Risk notes: {toggle_text} (toggle with Ctrl+N)"
    )));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "This form doesn't save yet; it's just a clickable shell.",
        context.theme.empty_style(),
    ));

    render_panel(frame, area, "Feedback form (mock)", lines, context.theme);
}

fn question<'a>(prompt: &'a str, placeholder: &'a str, theme: &Theme) -> Vec<Line<'a>> {
    vec![
        Line::from(prompt),
        Line::styled(format!("  {placeholder}"), theme.empty_style()),
        Line::from(""),
    ]
}

fn render_panel(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'_>>, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ratatui::symbols::border::ROUNDED)
        .border_style(Style::default().fg(theme.header_fg()))
        .title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_text(context: FeedbackContext<'_>) -> String {
        let backend = TestBackend::new(120, 26);
        let mut terminal = Terminal::new(backend).expect("create terminal");
        terminal
            .draw(|frame| render_feedback(frame, frame.area(), context))
            .expect("render frame");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn feedback_panels_list_prompts_and_form() {
        let theme = Theme::default();

        let rendered = render_to_text(FeedbackContext {
            location_label: "Dallas, TX",
            show_risk_notes: false,
            theme: &theme,
        });

        assert!(rendered.contains("What we need"));
        assert!(rendered.contains("Feedback form (mock)"));
        assert!(rendered.contains("Dallas, TX"));
        assert!(rendered.contains("Which agencies should be listed here?"));
        assert!(rendered.contains("Risk notes: Off"));
    }

    #[test]
    fn toggle_state_is_reflected_in_the_form() {
        let theme = Theme::default();

        let rendered = render_to_text(FeedbackContext {
            location_label: "Select a state",
            show_risk_notes: true,
            theme: &theme,
        });

        assert!(rendered.contains("Risk notes: On"));
    }
}
