use serde::Deserialize;
use tempdex::IndustryFilter;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
    pub(super) input_title: Option<String>,
    pub(super) initial_query: Option<String>,
    pub(super) theme: Option<String>,
    pub(super) industry: Option<String>,
    pub(super) start_tab: Option<String>,
    pub(super) risk_notes: Option<bool>,
}

/// UI values after defaults are applied. The start tab stays a raw string
/// here; `RawConfig::resolve` types it so the error can name its origin.
pub(super) struct UiResolution {
    pub(super) input_title: Option<String>,
    pub(super) initial_query: String,
    pub(super) theme: Option<String>,
    pub(super) industry: IndustryFilter,
    pub(super) start_tab: Option<String>,
    pub(super) show_risk_notes: bool,
}

impl UiSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(title) = cli.title.clone() {
            self.input_title = Some(title);
        }
        if let Some(query) = cli.query.clone() {
            self.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.theme = Some(theme);
        }
        if let Some(label) = cli.industry.clone() {
            self.industry = Some(label);
        }
        if let Some(tab) = cli.tab {
            self.start_tab = Some(tab.as_str().to_string());
        }
        if let Some(value) = cli.risk_notes {
            self.risk_notes = Some(value);
        }
    }

    pub(super) fn finalize(self) -> UiResolution {
        let industry = self
            .industry
            .as_deref()
            .map(IndustryFilter::parse)
            .unwrap_or_default();

        UiResolution {
            input_title: self.input_title,
            initial_query: self.initial_query.unwrap_or_default(),
            theme: self.theme,
            industry,
            start_tab: self.start_tab,
            show_risk_notes: self.risk_notes.unwrap_or(false),
        }
    }
}
