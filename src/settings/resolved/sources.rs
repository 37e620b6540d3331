use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

/// Where each validated setting came from, for error attribution.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) ui_theme: Option<SettingSource>,
    pub(crate) ui_start_tab: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_theme(&self) -> SettingSource {
        self.ui_theme
            .clone()
            .unwrap_or(SettingSource::ConfigKey("ui.theme"))
    }

    pub(crate) fn source_for_start_tab(&self) -> SettingSource {
        self.ui_start_tab
            .clone()
            .unwrap_or(SettingSource::ConfigKey("ui.start_tab"))
    }
}
