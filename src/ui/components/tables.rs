use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table,
};

use crate::ui::components::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::ui::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
pub(crate) const TABLE_HIGHLIGHT_SPACING: HighlightSpacing = HighlightSpacing::WhenSelected;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: usize = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
    /// Column headers.
    pub headers: Vec<String>,
    /// Column width constraints.
    pub widths: Vec<Constraint>,
    /// Rendered table rows.
    pub rows: Vec<Row<'a>>,
    /// Optional title for the bordered table.
    pub title: Option<String>,
}

/// Render the bordered agencies table with its scrollbar.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut ratatui::widgets::TableState,
    scrollbar_state: &mut ScrollbarState,
    spec: TableSpec<'_>,
    theme: &Theme,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_set(ratatui::symbols::border::ROUNDED)
        .border_style(Style::default().fg(theme.header_fg()));

    if let Some(title) = spec.title.clone() {
        block = block.title(title);
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_configured_table(frame, inner, table_state, scrollbar_state, theme, spec);
}

fn render_configured_table(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut ratatui::widgets::TableState,
    scrollbar_state: &mut ScrollbarState,
    theme: &Theme,
    spec: TableSpec<'_>,
) {
    let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
    let header_style = Style::default().fg(theme.header_fg());
    let header = Row::new(header_cells)
        .style(header_style)
        .height(1)
        .bottom_margin(1);

    let mut widths = spec.widths;
    if widths.is_empty() {
        widths = vec![Constraint::Fill(1)];
    }

    // Viewport = header + separator + visible rows.
    let viewport_height = area.height as usize;
    let available_rows = viewport_height.saturating_sub(TABLE_HEADER_ROWS);
    let total_rows = spec.rows.len();

    let metrics = ScrollMetrics::compute(total_rows, available_rows);
    let needs_scrollbar = metrics.needs_scrollbar;

    let table_area = if needs_scrollbar {
        Rect {
            x: area.x,
            y: area.y,
            width: area.width.saturating_sub(1),
            height: area.height,
        }
    } else {
        area
    };

    let table = Table::new(spec.rows, widths)
        .header(header)
        .column_spacing(TABLE_COLUMN_SPACING)
        .highlight_spacing(TABLE_HIGHLIGHT_SPACING)
        .row_highlight_style(theme.row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(table, table_area, table_state);

    if needs_scrollbar {
        *scrollbar_state = scrollbar_state
            .content_length(metrics.content_length)
            .viewport_content_length(metrics.viewport_len)
            .position(metrics.scrollbar_position(table_state.offset()));
        render_scrollbar(frame, area, scrollbar_state, theme);
    }

    render_header_separator(frame, table_area, theme, 1);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
    if header_height >= area.height {
        return;
    }
    let sep_y = area.y + header_height;
    if sep_y >= area.y + area.height {
        return;
    }

    let width = area.width as usize;
    if width == 0 {
        return;
    }

    let sep_rect = Rect {
        x: area.x,
        y: sep_y,
        width: area.width,
        height: 1,
    };
    if width <= 2 {
        let line = " ".repeat(width);
        let para = Paragraph::new(line);
        frame.render_widget(para, sep_rect);
        return;
    }

    let middle = "─".repeat(width - 2);
    let middle_style = Style::default().fg(theme.header_fg());
    let middle_span = Span::styled(middle, middle_style);
    let spans = vec![Span::raw(" "), middle_span, Span::raw(" ")];
    let para = Paragraph::new(Text::from(Line::from(spans)));
    frame.render_widget(para, sep_rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::TableState;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn table_renders_headers_title_and_rows() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).expect("create terminal");
        let theme = Theme::default();
        let mut table_state = TableState::default();
        let mut scrollbar_state = ScrollbarState::default();

        terminal
            .draw(|frame| {
                let spec = TableSpec {
                    headers: vec!["Agency".to_string(), "Type".to_string()],
                    widths: vec![Constraint::Min(20), Constraint::Length(14)],
                    rows: vec![
                        Row::new(vec!["Silver State Staffing", "Temp-to-Hire"]),
                        Row::new(vec!["Desert Tech Temps", "Contract"]),
                    ],
                    title: Some("Agencies".to_string()),
                };
                render_table(
                    frame,
                    frame.area(),
                    &mut table_state,
                    &mut scrollbar_state,
                    spec,
                    &theme,
                );
            })
            .expect("render frame");

        let rendered = buffer_text(&terminal);
        assert!(rendered.contains("Agencies"));
        assert!(rendered.contains("Agency"));
        assert!(rendered.contains("Silver State Staffing"));
        assert!(rendered.contains("Desert Tech Temps"));
    }

    #[test]
    fn overflowing_rows_engage_the_scrollbar() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).expect("create terminal");
        let theme = Theme::default();
        let mut table_state = TableState::default();
        let mut scrollbar_state = ScrollbarState::default();

        terminal
            .draw(|frame| {
                let rows = (0..20)
                    .map(|index| Row::new(vec![format!("agency {index}")]))
                    .collect();
                let spec = TableSpec {
                    headers: vec!["Agency".to_string()],
                    widths: Vec::new(),
                    rows,
                    title: None,
                };
                render_table(
                    frame,
                    frame.area(),
                    &mut table_state,
                    &mut scrollbar_state,
                    spec,
                    &theme,
                );
            })
            .expect("render frame");

        let rendered = buffer_text(&terminal);
        assert!(rendered.contains("agency 0"));
        assert!(!rendered.contains("agency 19"));
    }
}
