//! Core state container for the terminal browser.
//!
//! The `app` module exposes the [`App`] struct which bundles the agency
//! directory, the current location/filter selections, and UI bookkeeping such
//! as table selection and detail-pane scroll state.

use ratatui::widgets::{ScrollbarState, TableState};

use crate::dataset::{Agency, Directory, Locality, Region};
use crate::listing::{
    IndustryFilter, ListingFilter, ListingRow, SpeedClass, build_listing, industry_vocabulary,
};
use crate::ui::components::{DetailLayout, ScrollMetrics};
use crate::ui::config::{Tab, UiLabels};
use crate::ui::input::QueryInput;
use crate::ui::outcome::AgencySelection;
use crate::ui::style::Theme;

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the immutable directory and derives everything else from
/// the current selections. Every mutation that can change which agencies are
/// visible ends in [`App::refresh_listing`], so the listing, the table
/// selection, and the detail pane never drift apart.
pub struct App<'a> {
    /// The immutable agency directory being browsed.
    pub directory: Directory,
    /// Text input widget for the free-text query.
    pub query_input: QueryInput<'a>,
    /// Selection state for the agencies table.
    pub table_state: TableState,
    pub(crate) labels: UiLabels,
    pub(crate) theme: Theme,
    pub(crate) input_title: Option<String>,
    pub(crate) tab: Tab,
    pub(crate) region_index: Option<usize>,
    pub(crate) locality_index: Option<usize>,
    pub(crate) industry: IndustryFilter,
    pub(crate) industry_options: Vec<String>,
    pub(crate) show_risk_notes: bool,
    pub(crate) listing: Vec<ListingRow>,
    /// Scrollbar state for the agencies table.
    pub(crate) table_scrollbar_state: ScrollbarState,
    /// Scroll offset within the detail pane.
    pub(crate) detail_scroll: usize,
    /// Scrollbar state for the detail pane.
    pub(crate) detail_scrollbar_state: ScrollbarState,
    /// Last known detail viewport height for scroll bounds.
    pub(crate) detail_viewport_height: usize,
    /// Last known detail line count after wrapping.
    pub(crate) detail_line_count: usize,
}

impl<'a> App<'a> {
    /// Construct an [`App`] over a directory, selecting its first region and
    /// locality when present.
    pub fn new(directory: Directory) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        let mut app = Self {
            directory,
            query_input: QueryInput::new(""),
            table_state,
            labels: UiLabels::default(),
            theme: Theme::default(),
            input_title: Some("Search".to_string()),
            tab: Tab::default(),
            region_index: None,
            locality_index: None,
            industry: IndustryFilter::All,
            industry_options: Vec::new(),
            show_risk_notes: false,
            listing: Vec::new(),
            table_scrollbar_state: ScrollbarState::default(),
            detail_scroll: 0,
            detail_scrollbar_state: ScrollbarState::default(),
            detail_viewport_height: 1,
            detail_line_count: 0,
        };
        if !app.directory.regions.is_empty() {
            app.select_region_index(0);
        }
        app
    }

    /// The currently selected region, if any.
    #[must_use]
    pub fn region(&self) -> Option<&Region> {
        self.region_index
            .and_then(|idx| self.directory.regions.get(idx))
    }

    /// The currently selected locality, if any.
    #[must_use]
    pub fn locality(&self) -> Option<&Locality> {
        let region = self.region()?;
        self.locality_index
            .and_then(|idx| region.localities.get(idx))
    }

    /// The active tab.
    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// The current free-text query.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query_input.text()
    }

    /// The active industry filter.
    #[must_use]
    pub fn industry(&self) -> &IndustryFilter {
        &self.industry
    }

    /// Whether risk notes are currently shown.
    #[must_use]
    pub fn show_risk_notes(&self) -> bool {
        self.show_risk_notes
    }

    /// The filtered listing for the current selections.
    #[must_use]
    pub fn listing(&self) -> &[ListingRow] {
        &self.listing
    }

    /// Select a region by position, carrying the locality over by name when
    /// the new region has one with the same name, else falling back to the
    /// region's first locality.
    pub fn select_region_index(&mut self, index: usize) {
        if index >= self.directory.regions.len() {
            return;
        }
        let previous_name = self.locality().map(|locality| locality.name.clone());
        self.region_index = Some(index);
        let region = &self.directory.regions[index];
        let carried = previous_name
            .as_deref()
            .and_then(|name| region.locality_position(name));
        self.locality_index = carried.or_else(|| (!region.localities.is_empty()).then_some(0));
        self.refresh_industry_options();
        self.refresh_listing();
    }

    /// Select a locality of the current region by position.
    pub fn select_locality_index(&mut self, index: usize) {
        let Some(region) = self.region() else {
            return;
        };
        if index >= region.localities.len() {
            return;
        }
        self.locality_index = Some(index);
        self.refresh_listing();
    }

    /// Select a region by code. Unknown codes leave the selection unchanged.
    pub fn select_region_code(&mut self, code: &str) -> bool {
        match self.directory.region_position(code) {
            Some(index) => {
                self.select_region_index(index);
                true
            }
            None => false,
        }
    }

    /// Select a locality of the current region by name. Unknown names leave
    /// the selection unchanged.
    pub fn select_locality_name(&mut self, name: &str) -> bool {
        let Some(position) = self
            .region()
            .and_then(|region| region.locality_position(name))
        else {
            return false;
        };
        self.select_locality_index(position);
        true
    }

    /// Advance to the next region, wrapping at the end.
    pub fn cycle_region(&mut self) {
        let total = self.directory.regions.len();
        if total == 0 {
            return;
        }
        let next = self.region_index.map_or(0, |idx| (idx + 1) % total);
        self.select_region_index(next);
    }

    /// Advance to the next locality of the current region, wrapping.
    pub fn cycle_locality(&mut self) {
        let Some(region) = self.region() else {
            return;
        };
        let total = region.localities.len();
        if total == 0 {
            return;
        }
        let next = self.locality_index.map_or(0, |idx| (idx + 1) % total);
        self.select_locality_index(next);
    }

    /// Advance the industry filter through All and each vocabulary label,
    /// wrapping. A label missing from the vocabulary steps back to All.
    pub fn cycle_industry(&mut self) {
        let position = match &self.industry {
            IndustryFilter::All => 0,
            IndustryFilter::Label(label) => self
                .industry_options
                .iter()
                .position(|option| option == label)
                .map_or(self.industry_options.len(), |idx| idx + 1),
        };
        let total = self.industry_options.len() + 1;
        let next = (position + 1) % total;
        self.industry = if next == 0 {
            IndustryFilter::All
        } else {
            IndustryFilter::Label(self.industry_options[next - 1].clone())
        };
        self.refresh_listing();
    }

    /// Replace the industry filter outright.
    pub fn set_industry(&mut self, industry: IndustryFilter) {
        self.industry = industry;
        self.refresh_listing();
    }

    /// Flip the risk-notes toggle. The listing is unaffected.
    pub fn toggle_risk_notes(&mut self) {
        self.show_risk_notes = !self.show_risk_notes;
    }

    pub fn set_show_risk_notes(&mut self, show: bool) {
        self.show_risk_notes = show;
    }

    /// Replace the query text, as from configuration.
    pub fn set_query(&mut self, text: &str) {
        self.query_input = QueryInput::new(text);
        self.refresh_listing();
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_labels(&mut self, labels: UiLabels) {
        self.labels = labels;
    }

    pub fn set_input_title(&mut self, title: Option<String>) {
        self.input_title = title;
    }

    /// Rebuild the industry vocabulary for the selected region.
    pub(crate) fn refresh_industry_options(&mut self) {
        self.industry_options = industry_vocabulary(self.region());
    }

    /// Rerun the listing pipeline for the current selections and clamp the
    /// table selection to the result.
    pub(crate) fn refresh_listing(&mut self) {
        let filter = ListingFilter {
            query: self.query_input.text().to_string(),
            industry: self.industry.clone(),
        };
        self.listing = build_listing(self.locality(), &filter);
        self.ensure_selection();
        self.reset_detail_scroll();
    }

    /// Ensure the row selection remains valid for the current listing.
    pub(crate) fn ensure_selection(&mut self) {
        if self.filtered_len() == 0 {
            self.table_state.select(None);
        } else if self.table_state.selected().is_none() {
            self.table_state.select(Some(0));
        } else if let Some(selected) = self.table_state.selected() {
            let len = self.filtered_len();
            if selected >= len {
                self.table_state.select(Some(len.saturating_sub(1)));
            }
        }
    }

    /// Number of rows in the filtered listing.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.listing.len()
    }

    /// The selected listing row, if any.
    pub(crate) fn selected_row(&self) -> Option<ListingRow> {
        let selected = self.table_state.selected()?;
        self.listing.get(selected).copied()
    }

    /// The selected agency with its speed classification.
    #[must_use]
    pub fn selected_agency(&self) -> Option<(&Agency, SpeedClass)> {
        let row = self.selected_row()?;
        let locality = self.locality()?;
        locality
            .agencies
            .get(row.index)
            .map(|agency| (agency, row.class))
    }

    /// Snapshot of the selection for the exit outcome.
    pub(crate) fn current_selection(&self) -> Option<AgencySelection> {
        let (agency, class) = self.selected_agency()?;
        let region = self.region()?;
        let locality = self.locality()?;
        Some(AgencySelection {
            agency: agency.name.clone(),
            website: agency.website.clone(),
            locality: locality.name.clone(),
            region: region.code.clone(),
            class,
        })
    }

    /// Move the table selection by a signed number of rows, clamping at both
    /// ends. Changing rows resets the detail scroll.
    pub(crate) fn move_selection(&mut self, delta: isize) {
        let len = self.filtered_len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            (current + delta.unsigned_abs()).min(len - 1)
        };
        if next != current {
            self.detail_scroll = 0;
        }
        self.table_state.select(Some(next));
        self.update_detail_scrollbar();
    }

    /// Human-readable label for the current location.
    #[must_use]
    pub fn location_label(&self) -> String {
        match (self.region(), self.locality()) {
            (Some(region), Some(locality)) => format!("{}, {}", locality.name, region.code),
            (Some(region), None) => format!("{} — select a city", region.name),
            _ => "Select a state".to_string(),
        }
    }

    /// Scroll the detail pane up.
    pub(crate) fn scroll_detail_up(&mut self, lines: usize) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
        self.update_detail_scrollbar();
    }

    /// Scroll the detail pane down.
    pub(crate) fn scroll_detail_down(&mut self, lines: usize) {
        let metrics = ScrollMetrics::compute(self.detail_line_count, self.detail_viewport_height);
        self.detail_scroll = (self.detail_scroll + lines).min(metrics.max_scroll);
        self.update_detail_scrollbar();
    }

    pub(crate) fn reset_detail_scroll(&mut self) {
        self.detail_scroll = 0;
        self.update_detail_scrollbar();
    }

    /// Record the layout the detail render produced so scroll input can be
    /// clamped against it.
    pub(crate) fn record_detail_layout(&mut self, layout: DetailLayout) {
        self.detail_line_count = layout.line_count;
        self.detail_viewport_height = layout.viewport_height;
        self.update_detail_scrollbar();
    }

    /// Update scrollbar state to match the detail content and scroll position.
    pub(crate) fn update_detail_scrollbar(&mut self) {
        let metrics = ScrollMetrics::compute(self.detail_line_count, self.detail_viewport_height);
        self.detail_scroll = self.detail_scroll.min(metrics.max_scroll);
        self.detail_scrollbar_state = self
            .detail_scrollbar_state
            .content_length(metrics.content_length)
            .viewport_content_length(metrics.viewport_len)
            .position(metrics.scrollbar_position(self.detail_scroll));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Locality, Region};

    fn sample_app() -> App<'static> {
        App::new(Directory::bundled())
    }

    #[test]
    fn new_app_selects_the_first_region_and_locality() {
        let app = sample_app();

        assert_eq!(app.region().map(|region| region.code.as_str()), Some("NV"));
        assert_eq!(
            app.locality().map(|locality| locality.name.as_str()),
            Some("Las Vegas")
        );
        assert_eq!(app.filtered_len(), 2);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn region_change_resets_the_locality_to_the_first() {
        let mut app = sample_app();

        app.cycle_region();

        assert_eq!(app.region().map(|region| region.code.as_str()), Some("TX"));
        assert_eq!(
            app.locality().map(|locality| locality.name.as_str()),
            Some("Dallas")
        );
        assert_eq!(app.filtered_len(), 1);
    }

    #[test]
    fn region_change_keeps_a_locality_with_the_same_name() {
        let mut directory = Directory::bundled();
        directory.regions.push(Region {
            code: "AZ".into(),
            name: "Arizona".into(),
            localities: vec![
                Locality {
                    name: "Phoenix".into(),
                    ..Locality::default()
                },
                Locality {
                    name: "Las Vegas".into(),
                    ..Locality::default()
                },
            ],
        });
        let mut app = App::new(directory);

        assert_eq!(
            app.locality().map(|locality| locality.name.as_str()),
            Some("Las Vegas")
        );
        app.select_region_code("AZ");
        assert_eq!(
            app.locality().map(|locality| locality.name.as_str()),
            Some("Las Vegas")
        );
        assert_eq!(app.locality_index, Some(1));
    }

    #[test]
    fn industry_filter_persists_across_region_changes() {
        let mut app = sample_app();
        app.set_industry(IndustryFilter::Label("Warehouse".into()));
        assert_eq!(app.filtered_len(), 1);

        app.cycle_region();

        assert_eq!(app.industry, IndustryFilter::Label("Warehouse".into()));
        assert_eq!(app.filtered_len(), 1);
    }

    #[test]
    fn industry_cycle_walks_the_vocabulary_and_wraps() {
        let mut app = sample_app();
        let options = app.industry_options.clone();
        assert!(!options.is_empty());

        app.cycle_industry();
        assert_eq!(app.industry, IndustryFilter::Label(options[0].clone()));

        for _ in 0..options.len() {
            app.cycle_industry();
        }
        assert_eq!(app.industry, IndustryFilter::All);
    }

    #[test]
    fn unknown_industry_label_cycles_back_to_all() {
        let mut app = sample_app();
        app.set_industry(IndustryFilter::Label("Forestry".into()));

        app.cycle_industry();

        assert_eq!(app.industry, IndustryFilter::All);
    }

    #[test]
    fn empty_listing_clears_the_selection() {
        let mut app = sample_app();
        app.set_query("no agency matches this");

        assert_eq!(app.filtered_len(), 0);
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    fn selection_is_clamped_when_the_listing_shrinks() {
        let mut app = sample_app();
        app.move_selection(1);
        assert_eq!(app.table_state.selected(), Some(1));

        app.set_industry(IndustryFilter::Label("Warehouse".into()));

        assert_eq!(app.filtered_len(), 1);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn selection_moves_are_clamped_at_both_ends() {
        let mut app = sample_app();

        app.move_selection(-5);
        assert_eq!(app.table_state.selected(), Some(0));

        app.move_selection(10);
        assert_eq!(app.table_state.selected(), Some(1));
    }

    #[test]
    fn location_label_follows_the_selection() {
        let mut app = sample_app();
        assert_eq!(app.location_label(), "Las Vegas, NV");

        app.locality_index = None;
        assert_eq!(app.location_label(), "Nevada — select a city");

        app.region_index = None;
        assert_eq!(app.location_label(), "Select a state");
    }

    #[test]
    fn current_selection_reports_the_fastest_agency_first() {
        let app = sample_app();
        let selection = app.current_selection().expect("selection available");

        assert_eq!(selection.agency, "Silver State Staffing");
        assert_eq!(selection.region, "NV");
        assert_eq!(selection.locality, "Las Vegas");
        assert_eq!(selection.class, SpeedClass::Fast);
    }

    #[test]
    fn detail_scroll_clamps_to_recorded_layout() {
        let mut app = sample_app();
        app.record_detail_layout(DetailLayout {
            line_count: 30,
            viewport_height: 10,
        });

        app.scroll_detail_down(50);
        assert_eq!(app.detail_scroll, 20);

        app.scroll_detail_up(5);
        assert_eq!(app.detail_scroll, 15);

        app.move_selection(1);
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn query_edits_rebuild_the_listing() {
        let mut app = sample_app();
        app.set_query("desert");

        assert_eq!(app.filtered_len(), 1);
        let (agency, class) = app.selected_agency().expect("selection available");
        assert_eq!(agency.name, "Desert Tech Temps");
        assert_eq!(class, SpeedClass::Slow);
    }
}
