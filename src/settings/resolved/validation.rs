use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    if let Some(theme) = config.theme.as_deref()
        && tempdex::theme_by_name(theme).is_none()
    {
        return Err(ConfigError::invalid(
            "ui.theme",
            theme,
            sources.source_for_theme(),
            format!(
                "unknown theme; expected one of: {}",
                tempdex::theme_names().join(", "),
            ),
        ));
    }

    Ok(())
}
