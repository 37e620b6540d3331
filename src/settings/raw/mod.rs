use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;
use tempdex::Tab;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

mod dataset;
mod ui;

use dataset::DatasetSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    dataset: DatasetSection,
    ui: UiSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.dataset.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            ui_theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "TEMPDEX__UI__THEME",
                "--theme",
                "ui.theme",
            ),
            ui_start_tab: detect_source(
                cli.tab.is_some(),
                self.ui.start_tab.is_some(),
                "TEMPDEX__UI__START_TAB",
                "--tab",
                "ui.start_tab",
            ),
        };

        let dataset = self.dataset.resolve()?;
        let ui = self.ui.finalize();

        let start_tab = match ui.start_tab {
            None => None,
            Some(raw_tab) => match Tab::from_id(&raw_tab) {
                Some(tab) => Some(tab),
                None => {
                    return Err(Error::new(ConfigError::invalid(
                        "ui.start_tab",
                        raw_tab,
                        sources.source_for_start_tab(),
                        "expected one of: browse, compare, feedback",
                    )));
                }
            },
        };

        let config = ResolvedConfig {
            dataset_path: dataset.path,
            region: dataset.region,
            locality: dataset.locality,
            input_title: ui.input_title,
            initial_query: ui.initial_query,
            theme: ui.theme,
            start_tab,
            industry: ui.industry,
            show_risk_notes: ui.show_risk_notes,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
