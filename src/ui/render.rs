use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::Paragraph;

use crate::dataset::{Agency, Directory};
use crate::ui::components::{
    CompareContext, DetailContext, FeedbackContext, InputContext, LocationContext, TabItem,
    TableSpec, agency_headers, agency_widths, build_agency_rows, render_agency_detail,
    render_compare, render_feedback, render_input_with_tabs, render_location_panel, render_table,
};
use crate::ui::config::Tab;
use crate::ui::state::App;

/// Width of the location sidebar on the browse tab.
const SIDEBAR_WIDTH: u16 = 38;

impl App<'_> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let area = area.inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        let tab_items: Vec<TabItem<'_>> = self
            .labels
            .tabs()
            .iter()
            .map(|entry| TabItem {
                tab: entry.tab,
                label: entry.label.as_str(),
            })
            .collect();
        let input_ctx = InputContext {
            query_input: &self.query_input,
            input_title: self.input_title.as_deref(),
            tab: self.tab,
            tabs: &tab_items,
            area: layout[0],
            theme: &self.theme,
        };
        render_input_with_tabs(frame, input_ctx);

        let body = layout[1];
        match self.tab {
            Tab::Browse => self.render_browse(frame, body),
            Tab::Compare => self.render_compare_tab(frame, body),
            Tab::Feedback => self.render_feedback_tab(frame, body),
        }
    }

    fn render_browse(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        self.render_sidebar(frame, columns[0]);
        self.render_listing_table(frame, panes[0]);
        self.render_detail(frame, panes[1]);

        if self.filtered_len() == 0 {
            self.render_empty_message(frame, panes[0]);
        }
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let context = LocationContext {
            region: self.region(),
            locality: self.locality(),
            industry: &self.industry,
            show_risk_notes: self.show_risk_notes,
            title: &self.labels.location_panel_title,
            hint: self.labels.tab_hint(self.tab),
            theme: &self.theme,
        };
        render_location_panel(frame, area, context);
    }

    fn render_listing_table(&mut self, frame: &mut Frame, area: Rect) {
        let agencies = locality_agencies(&self.directory, self.region_index, self.locality_index);
        let rows = build_agency_rows(&self.listing, agencies);
        let title = format!(
            "{} ({} {})",
            self.labels.table_title,
            self.listing.len(),
            self.labels.count_label
        );

        let spec = TableSpec {
            headers: agency_headers(),
            widths: agency_widths(),
            rows,
            title: Some(title),
        };

        render_table(
            frame,
            area,
            &mut self.table_state,
            &mut self.table_scrollbar_state,
            spec,
            &self.theme,
        );
    }

    fn render_detail(&mut self, frame: &mut Frame, area: Rect) {
        let agencies = locality_agencies(&self.directory, self.region_index, self.locality_index);
        let selected = self
            .table_state
            .selected()
            .and_then(|idx| self.listing.get(idx))
            .copied();
        let agency = selected.and_then(|row| {
            agencies
                .get(row.index)
                .map(|agency| (agency, row.class))
        });

        let layout = render_agency_detail(
            frame,
            area,
            &mut self.detail_scrollbar_state,
            DetailContext {
                agency,
                show_risk_notes: self.show_risk_notes,
                scroll: self.detail_scroll,
                title: &self.labels.detail_panel_title,
                theme: &self.theme,
            },
        );
        self.record_detail_layout(layout);
    }

    fn render_compare_tab(&self, frame: &mut Frame, area: Rect) {
        let location_label = self.location_label();
        let context = CompareContext {
            location_label: &location_label,
            metrics: self.locality().map(|locality| &locality.metrics),
            show_risk_notes: self.show_risk_notes,
            theme: &self.theme,
        };
        render_compare(frame, area, context);
    }

    fn render_feedback_tab(&self, frame: &mut Frame, area: Rect) {
        let location_label = self.location_label();
        let context = FeedbackContext {
            location_label: &location_label,
            show_risk_notes: self.show_risk_notes,
            theme: &self.theme,
        };
        render_feedback(frame, area, context);
    }

    fn render_empty_message(&self, frame: &mut Frame, area: Rect) {
        // Account for border (1 top + 1 bottom) and header + divider (2).
        const BORDER_AND_HEADER_HEIGHT: u16 = 4;
        let mut message_area = area;
        if message_area.height <= BORDER_AND_HEADER_HEIGHT {
            return;
        }
        message_area.y += 1;
        message_area.x += 1;
        message_area.width = message_area.width.saturating_sub(2);
        message_area.height -= 2;

        const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;
        if message_area.height > HEADER_AND_DIVIDER_HEIGHT {
            message_area.y += HEADER_AND_DIVIDER_HEIGHT;
            message_area.height -= HEADER_AND_DIVIDER_HEIGHT;

            let empty = Paragraph::new(self.labels.empty_message.as_str())
                .style(self.theme.empty_style())
                .alignment(Alignment::Center);
            frame.render_widget(empty, message_area);
        }
    }
}

fn locality_agencies(
    directory: &Directory,
    region_index: Option<usize>,
    locality_index: Option<usize>,
) -> &[Agency] {
    let Some(region_index) = region_index else {
        return &[];
    };
    let Some(locality_index) = locality_index else {
        return &[];
    };
    directory
        .regions
        .get(region_index)
        .and_then(|region| region.localities.get(locality_index))
        .map(|locality| locality.agencies.as_slice())
        .unwrap_or(&[])
}
