//! Location sidebar: the active region/locality pickers and city snapshot.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::dataset::{Locality, Region};
use crate::listing::IndustryFilter;
use crate::ui::components::rows::{MISSING_VALUE, format_days};
use crate::ui::style::Theme;

/// Argument bundle for rendering the location panel.
pub struct LocationContext<'a> {
    pub region: Option<&'a Region>,
    pub locality: Option<&'a Locality>,
    pub industry: &'a IndustryFilter,
    pub show_risk_notes: bool,
    pub title: &'a str,
    pub hint: &'a str,
    pub theme: &'a Theme,
}

/// Render the location panel: current pickers, city snapshot, and key hints.
pub fn render_location_panel(frame: &mut Frame, area: Rect, context: LocationContext<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ratatui::symbols::border::ROUNDED)
        .border_style(Style::default().fg(context.theme.header_fg()))
        .title(context.title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    let region_text = context
        .region
        .map(|region| format!("{} ({})", region.name, region.code))
        .unwrap_or_else(|| "Select a state".to_string());
    let locality_text = context
        .locality
        .map(|locality| locality.name.clone())
        .unwrap_or_else(|| "Select a city".to_string());
    let toggle_text = if context.show_risk_notes { "On" } else { "Off" };

    lines.push(labeled("State", region_text, context.theme));
    lines.push(labeled("City", locality_text, context.theme));
    lines.push(labeled("Industry", context.industry.to_string(), context.theme));
    lines.push(labeled("Risk notes", toggle_text.to_string(), context.theme));

    if let Some(locality) = context.locality {
        let metrics = &locality.metrics;
        let agencies_text = metrics
            .agencies
            .map(|count| count.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string());
        let fast_roles = if metrics.top_fast_roles.is_empty() {
            MISSING_VALUE.to_string()
        } else {
            metrics.top_fast_roles[..metrics.top_fast_roles.len().min(2)].join(", ")
        };

        lines.push(Line::from(""));
        lines.push(Line::styled(
            "City snapshot",
            context.theme.highlight_style(),
        ));
        lines.push(labeled("Agencies", agencies_text, context.theme));
        lines.push(labeled(
            "Avg interview",
            format_days(metrics.avg_interview_days),
            context.theme,
        ));
        lines.push(labeled(
            "Avg start",
            format_days(metrics.avg_start_days),
            context.theme,
        ));
        lines.push(labeled("Fast roles", fast_roles, context.theme));

        if context.show_risk_notes
            && let Some(note) = &metrics.risk_note
        {
            lines.push(Line::from(""));
            lines.push(Line::styled("Risk note", context.theme.highlight_style()));
            lines.push(Line::from(note.clone()));
        }
    }

    if !context.hint.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            context.hint.to_string(),
            context.theme.empty_style(),
        ));
    }

    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn labeled(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), theme.empty_style()),
        Span::raw(value),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Directory;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_text(context: LocationContext<'_>) -> String {
        let backend = TestBackend::new(38, 24);
        let mut terminal = Terminal::new(backend).expect("create terminal");
        terminal
            .draw(|frame| render_location_panel(frame, frame.area(), context))
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
    fn panel_shows_selected_location_and_metrics() {
        let directory = Directory::bundled();
        let region = &directory.regions[0];
        let locality = &region.localities[0];
        let theme = Theme::default();
        let industry = IndustryFilter::All;

        let rendered = render_to_text(LocationContext {
            region: Some(region),
            locality: Some(locality),
            industry: &industry,
            show_risk_notes: false,
            title: "Location",
            hint: "",
            theme: &theme,
        });

        assert!(rendered.contains("Nevada (NV)"));
        assert!(rendered.contains("Las Vegas"));
        assert!(rendered.contains("28"));
        assert!(rendered.contains("2.4d"));
        assert!(rendered.contains("Warehouse, Hospitality"));
        assert!(!rendered.contains("backlog"));
    }

    #[test]
    fn risk_note_appears_only_when_toggled_on() {
        let directory = Directory::bundled();
        let region = &directory.regions[0];
        let locality = &region.localities[0];
        let theme = Theme::default();
        let industry = IndustryFilter::All;

        let rendered = render_to_text(LocationContext {
            region: Some(region),
            locality: Some(locality),
            industry: &industry,
            show_risk_notes: true,
            title: "Location",
            hint: "",
            theme: &theme,
        });

        assert!(rendered.contains("Risk note"));
        assert!(rendered.contains("backlog"));
    }

    #[test]
    fn empty_directory_prompts_for_a_selection() {
        let theme = Theme::default();
        let industry = IndustryFilter::All;

        let rendered = render_to_text(LocationContext {
            region: None,
            locality: None,
            industry: &industry,
            show_risk_notes: false,
            title: "Location",
            hint: "",
            theme: &theme,
        });

        assert!(rendered.contains("Select a state"));
        assert!(rendered.contains("Select a city"));
    }
}
