//! Agency detail pane: contact info, speed figures, and open roles.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, ScrollbarState};
use unicode_width::UnicodeWidthStr;

use crate::dataset::Agency;
use crate::listing::SpeedClass;
use crate::ui::components::rows::format_days;
use crate::ui::components::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::ui::style::{Theme, speed_class_style};

/// Argument bundle for rendering the detail pane.
pub struct DetailContext<'a> {
    pub agency: Option<(&'a Agency, SpeedClass)>,
    pub show_risk_notes: bool,
    pub scroll: usize,
    pub title: &'a str,
    pub theme: &'a Theme,
}

/// Scroll bookkeeping produced by a detail render.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetailLayout {
    /// Display lines after wrapping to the pane width.
    pub line_count: usize,
    /// Rows available inside the pane border.
    pub viewport_height: usize,
}

/// Render the detail pane for the selected agency.
///
/// Returns the layout the caller needs to clamp future scroll input.
pub fn render_agency_detail(
    frame: &mut Frame,
    area: Rect,
    scrollbar_state: &mut ScrollbarState,
    context: DetailContext<'_>,
) -> DetailLayout {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ratatui::symbols::border::ROUNDED)
        .border_style(Style::default().fg(context.theme.header_fg()))
        .title(context.title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let viewport_height = inner.height as usize;
    let lines = detail_lines(context.agency, context.show_risk_notes, context.theme);
    let mut display = wrap_lines(lines, inner.width as usize);
    let mut metrics = ScrollMetrics::compute(display.len(), viewport_height);
    let mut text_area = inner;

    if metrics.needs_scrollbar {
        // Re-wrap to leave the rightmost column to the scrollbar.
        text_area.width = inner.width.saturating_sub(1);
        let lines = detail_lines(context.agency, context.show_risk_notes, context.theme);
        display = wrap_lines(lines, text_area.width as usize);
        metrics = ScrollMetrics::compute(display.len(), viewport_height);
    }

    let scroll = context.scroll.min(metrics.max_scroll);
    let line_count = display.len();
    let paragraph = Paragraph::new(Text::from(display)).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, text_area);

    if metrics.needs_scrollbar {
        *scrollbar_state = scrollbar_state
            .content_length(metrics.content_length)
            .viewport_content_length(metrics.viewport_len)
            .position(metrics.scrollbar_position(scroll));
        render_scrollbar(frame, inner, scrollbar_state, context.theme);
    }

    DetailLayout {
        line_count,
        viewport_height,
    }
}

/// Build the logical lines for the detail pane, before width wrapping.
#[must_use]
pub fn detail_lines<'a>(
    agency: Option<(&'a Agency, SpeedClass)>,
    show_risk_notes: bool,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let Some((agency, class)) = agency else {
        return vec![Line::styled("Select an agency", theme.empty_style())];
    };

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(agency.name.as_str(), theme.highlight_style()),
        Span::raw("  "),
        Span::styled(class.label(), speed_class_style(class)),
    ]));

    let contact = join_present(&[&agency.engagement, &agency.reach, &agency.address]);
    if !contact.is_empty() {
        lines.push(Line::from(contact));
    }
    if !agency.website.is_empty() {
        lines.push(Line::styled(agency.website.as_str(), theme.prompt_style()));
    }

    lines.push(Line::from(format!(
        "Interview: {}  Start: {}",
        format_days(agency.speed.interview_days),
        format_days(agency.speed.start_days),
    )));
    if !agency.industries.is_empty() {
        lines.push(Line::from(format!(
            "Industries: {}",
            agency.industries.join(", ")
        )));
    }

    if !agency.notes.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(agency.notes.as_str()));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled("Roles", theme.highlight_style()));
    if agency.roles.is_empty() {
        lines.push(Line::styled("No open roles listed.", theme.empty_style()));
    }
    for role in &agency.roles {
        lines.push(Line::from(vec![
            Span::raw("▸ "),
            Span::styled(
                role.title.as_str(),
                Style::default().fg(theme.header_fg()),
            ),
            Span::raw(format!("  [{}]", role.urgency.label())),
        ]));
        let snapshot = join_present(&[&role.pay, &role.timeframe]);
        if !snapshot.is_empty() {
            lines.push(Line::from(format!("  {snapshot}")));
        }
        if !role.requirements.is_empty() {
            lines.push(Line::from(format!(
                "  Requirements: {}",
                role.requirements.join(", ")
            )));
        }
        if show_risk_notes
            && let Some(note) = &role.risk_note
        {
            lines.push(Line::styled(
                format!("  Risk note: {note}"),
                theme.prompt_style(),
            ));
        }
    }

    lines
}

fn join_present(parts: &[&String]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Word-wrap single-span lines to the given display width. Multi-span lines
/// are short badges and pass through untouched.
fn wrap_lines(lines: Vec<Line<'_>>, width: usize) -> Vec<Line<'_>> {
    if width == 0 {
        return lines;
    }
    let mut display = Vec::with_capacity(lines.len());
    for line in lines {
        if line.width() <= width || line.spans.len() != 1 {
            display.push(line);
            continue;
        }
        let span = &line.spans[0];
        let style = line.style.patch(span.style);
        for piece in wrap_plain(span.content.as_ref(), width) {
            display.push(Line::styled(piece, style));
        }
    }
    display
}

fn wrap_plain(text: &str, width: usize) -> Vec<String> {
    let indent: String = text.chars().take_while(|ch| *ch == ' ').collect();
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            indent.width() + word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if !current.is_empty() && candidate > width {
            lines.push(std::mem::take(&mut current));
        }
        if current.is_empty() {
            current = format!("{indent}{word}");
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Directory;
    use crate::listing::classify;
    use ratatui::{Terminal, backend::TestBackend};

    fn first_agency(directory: &Directory) -> &Agency {
        &directory.regions[0].localities[0].agencies[0]
    }

    #[test]
    fn lines_cover_contact_speed_and_roles() {
        let directory = Directory::bundled();
        let agency = first_agency(&directory);
        let theme = Theme::default();

        let lines = detail_lines(Some((agency, classify(agency.speed))), false, &theme);
        let text: String = lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("Silver State Staffing"));
        assert!(text.contains("Fast"));
        assert!(text.contains("Temp-to-Hire • Local"));
        assert!(text.contains("Interview: 1.5d  Start: 3.5d"));
        assert!(text.contains("Warehouse Associate"));
        assert!(text.contains("[High]"));
        assert!(text.contains("$17–$20/hr"));
        assert!(text.contains("Reliable transport"));
    }

    #[test]
    fn role_risk_notes_follow_the_toggle() {
        let directory = Directory::bundled();
        let agency = &directory.regions[0].localities[0].agencies[1];
        let theme = Theme::default();

        let hidden = detail_lines(Some((agency, classify(agency.speed))), false, &theme);
        let shown = detail_lines(Some((agency, classify(agency.speed))), true, &theme);
        let contains_note = |lines: &[Line<'_>]| {
            lines.iter().any(|line| {
                line.spans
                    .iter()
                    .any(|span| span.content.contains("security hygiene"))
            })
        };

        assert!(!contains_note(&hidden));
        assert!(contains_note(&shown));
    }

    #[test]
    fn empty_selection_prompts_for_one() {
        let theme = Theme::default();
        let lines = detail_lines(None, false, &theme);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content.as_ref(), "Select an agency");
    }

    #[test]
    fn plain_wrap_respects_width_and_indent() {
        let wrapped = wrap_plain("  alpha beta gamma delta", 12);

        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|line| line.width() <= 12));
        assert!(wrapped.iter().all(|line| line.starts_with("  ")));
        assert_eq!(wrapped.join(" ").split_whitespace().count(), 4);
    }

    #[test]
    fn detail_render_shows_the_agency() {
        let backend = TestBackend::new(44, 20);
        let mut terminal = Terminal::new(backend).expect("create terminal");
        let directory = Directory::bundled();
        let agency = first_agency(&directory);
        let theme = Theme::default();
        let mut scrollbar_state = ScrollbarState::default();

        let mut layout = DetailLayout::default();
        terminal
            .draw(|frame| {
                layout = render_agency_detail(
                    frame,
                    frame.area(),
                    &mut scrollbar_state,
                    DetailContext {
                        agency: Some((agency, classify(agency.speed))),
                        show_risk_notes: false,
                        scroll: 0,
                        title: "Agency detail",
                        theme: &theme,
                    },
                );
            })
            .expect("render frame");

        let rendered: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("Silver State Staffing"));
        assert!(rendered.contains("Roles"));
        assert!(layout.line_count > 0);
        assert_eq!(layout.viewport_height, 18);
    }
}
