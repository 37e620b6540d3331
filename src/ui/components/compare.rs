//! Compare tab: agency speed versus job-board baselines.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::dataset::Metrics;
use crate::ui::components::rows::format_days;
use crate::ui::style::Theme;

const RISK_TIE_IN: &str = "Long vacancy time in IT/ops roles can increase risk: delayed patching, \
backlog, weak access hygiene. We prioritize speed for these roles.";

/// Argument bundle for rendering the compare tab.
pub struct CompareContext<'a> {
    pub location_label: &'a str,
    pub metrics: Option<&'a Metrics>,
    pub show_risk_notes: bool,
    pub theme: &'a Theme,
}

/// Render the two compare panels side by side.
pub fn render_compare(frame: &mut Frame, area: Rect, context: CompareContext<'_>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_positioning(frame, columns[0], &context);
    render_metrics(frame, columns[1], &context);
}

fn render_positioning(frame: &mut Frame, area: Rect, context: &CompareContext<'_>) {
    let mut lines = vec![
        Line::from("We treat job boards as a comparative signal, not the source of truth."),
        Line::from("We compare speed, reach, and friction."),
        Line::from(""),
        Line::styled("Baseline (Temp agencies)", context.theme.highlight_style()),
        Line::from("• Shorter time-to-interview (often 1–5 days)"),
        Line::from("• Fewer decision layers"),
        Line::from("• Repeatable placement workflow"),
        Line::from(""),
        Line::styled(
            "Comparator (Indeed-style postings)",
            context.theme.highlight_style(),
        ),
        Line::from("• Wider reach, longer hiring cycles"),
        Line::from("• Noisy/duplicated listings"),
        Line::from("• More employer filtering"),
    ];

    if context.show_risk_notes {
        lines.push(Line::from(""));
        lines.push(Line::styled("Risk tie-in", context.theme.highlight_style()));
        lines.push(Line::from(RISK_TIE_IN));
    }

    render_panel(frame, area, "Timeframe comparison", lines, context.theme);
}

fn render_metrics(frame: &mut Frame, area: Rect, context: &CompareContext<'_>) {
    let (interview, start) = context
        .metrics
        .map(|metrics| {
            (
                format_days(metrics.avg_interview_days),
                format_days(metrics.avg_start_days),
            )
        })
        .unwrap_or_else(|| (format_days(None), format_days(None)));

    let lines = vec![
        labeled("Selected", context.location_label.to_string(), context.theme),
        labeled("Avg interview", interview, context.theme),
        labeled("Avg start", start, context.theme),
        Line::from(""),
        labeled(
            "Comparator",
            "Job boards: ~14–30d start".to_string(),
            context.theme,
        ),
    ];

    render_panel(frame, area, "City metrics snapshot", lines, context.theme);
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

fn labeled(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<15}"), theme.empty_style()),
        Span::raw(value),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Directory;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_text(context: CompareContext<'_>) -> String {
        let backend = TestBackend::new(110, 24);
        let mut terminal = Terminal::new(backend).expect("create terminal");
        terminal
            .draw(|frame| render_compare(frame, frame.area(), context))
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
    fn compare_panels_show_copy_and_metrics() {
        let directory = Directory::bundled();
        let metrics = &directory.regions[0].localities[0].metrics;
        let theme = Theme::default();

        let rendered = render_to_text(CompareContext {
            location_label: "Las Vegas, NV",
            metrics: Some(metrics),
            show_risk_notes: false,
            theme: &theme,
        });

        assert!(rendered.contains("Timeframe comparison"));
        assert!(rendered.contains("City metrics snapshot"));
        assert!(rendered.contains("Fewer decision layers"));
        assert!(rendered.contains("Las Vegas, NV"));
        assert!(rendered.contains("2.4d"));
        assert!(rendered.contains("5.2d"));
        assert!(!rendered.contains("Risk tie-in"));
    }

    #[test]
    fn risk_tie_in_appears_with_the_toggle() {
        let theme = Theme::default();

        let rendered = render_to_text(CompareContext {
            location_label: "Select a state",
            metrics: None,
            show_risk_notes: true,
            theme: &theme,
        });

        assert!(rendered.contains("Risk tie-in"));
        assert!(rendered.contains("patching"));
    }
}
