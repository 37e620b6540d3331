use anyhow::Result;

use super::state::App;
use crate::dataset::Directory;
use crate::listing::IndustryFilter;
use crate::ui::config::{Tab, UiLabels};
use crate::ui::outcome::BrowseOutcome;
use crate::ui::style::Theme;

/// A small builder for configuring the interactive browser.
/// This collects the optional knobs (theme, labels, starting
/// location and filters) before running the interactive picker.
pub struct BrowserUi {
    directory: Directory,
    input_title: Option<String>,
    labels: Option<UiLabels>,
    theme: Option<Theme>,
    start_tab: Option<Tab>,
    initial_query: Option<String>,
    industry: Option<IndustryFilter>,
    show_risk_notes: Option<bool>,
    region: Option<String>,
    locality: Option<String>,
}

impl BrowserUi {
    /// Create a browser UI for the provided directory.
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            input_title: None,
            labels: None,
            theme: None,
            start_tab: None,
            initial_query: None,
            industry: None,
            show_risk_notes: None,
            region: None,
            locality: None,
        }
    }

    /// Create a browser UI over the dataset compiled into the binary.
    pub fn bundled() -> Self {
        Self::new(Directory::bundled())
    }

    pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
        self.input_title = Some(title.into());
        self
    }

    pub fn with_labels(mut self, labels: UiLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = Some(query.into());
        self
    }

    pub fn with_theme_name(mut self, name: &str) -> Self {
        if let Some(theme) = crate::ui::style::by_name(name) {
            self.theme = Some(theme);
        }
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_start_tab(mut self, tab: Tab) -> Self {
        self.start_tab = Some(tab);
        self
    }

    pub fn with_industry(mut self, industry: IndustryFilter) -> Self {
        self.industry = Some(industry);
        self
    }

    pub fn with_risk_notes(mut self, show: bool) -> Self {
        self.show_risk_notes = Some(show);
        self
    }

    /// Start on the region with this code, when it exists in the dataset.
    pub fn with_region(mut self, code: impl Into<String>) -> Self {
        self.region = Some(code.into());
        self
    }

    /// Start on the locality with this name, when the selected region has it.
    pub fn with_locality(mut self, name: impl Into<String>) -> Self {
        self.locality = Some(name.into());
        self
    }

    /// Run the interactive browser with the configured options.
    pub fn run(self) -> Result<BrowseOutcome> {
        self.build_app().run()
    }

    /// Build an App and apply the optional customizations.
    fn build_app(self) -> App<'static> {
        let mut app = App::new(self.directory);
        if let Some(labels) = self.labels {
            app.set_labels(labels);
        }
        if let Some(theme) = self.theme {
            app.set_theme(theme);
        }
        if let Some(title) = self.input_title {
            app.set_input_title(Some(title));
        }
        if let Some(code) = self.region {
            app.select_region_code(&code);
        }
        if let Some(name) = self.locality {
            app.select_locality_name(&name);
        }
        if let Some(industry) = self.industry {
            app.set_industry(industry);
        }
        if let Some(show) = self.show_risk_notes {
            app.set_show_risk_notes(show);
        }
        if let Some(query) = self.initial_query {
            app.set_query(&query);
        }
        if let Some(tab) = self.start_tab {
            app.set_tab(tab);
        }
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_location_and_filters() {
        let app = BrowserUi::bundled()
            .with_region("tx")
            .with_locality("dallas")
            .with_industry(IndustryFilter::parse("Warehouse"))
            .with_risk_notes(true)
            .with_start_tab(Tab::Compare)
            .build_app();

        assert_eq!(app.region().map(|region| region.code.as_str()), Some("TX"));
        assert_eq!(
            app.locality().map(|locality| locality.name.as_str()),
            Some("Dallas"),
        );
        assert!(!app.industry().is_all());
        assert!(app.show_risk_notes());
        assert_eq!(app.tab(), Tab::Compare);
    }

    #[test]
    fn unknown_region_keeps_the_default_selection() {
        let app = BrowserUi::bundled().with_region("zz").build_app();
        assert_eq!(app.region().map(|region| region.code.as_str()), Some("NV"));
    }

    #[test]
    fn initial_query_filters_the_listing() {
        let app = BrowserUi::bundled().with_initial_query("desert").build_app();
        assert_eq!(app.query(), "desert");
        assert_eq!(app.listing().len(), 1);
    }

    #[test]
    fn unknown_theme_name_is_ignored() {
        // No panic and no change; the default theme stays in place.
        let app = BrowserUi::bundled().with_theme_name("no-such-theme").build_app();
        assert_eq!(app.tab(), Tab::Browse);
    }
}
