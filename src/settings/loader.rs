use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve(cli)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use clap::Parser;
    use tempdex::Tab;
    use tempfile::tempdir;

    use super::*;

    fn cli_with_config(path: &Path, extra: &[&str]) -> CliArgs {
        let mut argv = vec!["tempdex", "--no-config"];
        argv.extend_from_slice(extra);
        let mut cli = CliArgs::parse_from(argv);
        cli.config.push(path.to_path_buf());
        cli
    }

    #[test]
    fn config_file_values_reach_the_resolved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tempdex.toml");
        fs::write(
            &path,
            concat!(
                "[dataset]\n",
                "region = \"TX\"\n",
                "locality = \"Dallas\"\n",
                "[ui]\n",
                "start_tab = \"compare\"\n",
                "initial_query = \"desert\"\n",
                "industry = \"Warehouse\"\n",
                "risk_notes = true\n",
            ),
        )
        .unwrap();

        let resolved = load(&cli_with_config(&path, &[])).expect("loads");
        assert_eq!(resolved.region.as_deref(), Some("TX"));
        assert_eq!(resolved.locality.as_deref(), Some("Dallas"));
        assert_eq!(resolved.start_tab, Some(Tab::Compare));
        assert_eq!(resolved.initial_query, "desert");
        assert!(!resolved.industry.is_all());
        assert!(resolved.show_risk_notes);
    }

    #[test]
    fn cli_flags_override_config_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tempdex.toml");
        fs::write(&path, "[ui]\ntheme = \"light\"\nstart_tab = \"feedback\"\n").unwrap();

        let cli = cli_with_config(&path, &["--theme", "slate", "--tab", "browse"]);
        let resolved = load(&cli).expect("loads");
        assert_eq!(resolved.theme.as_deref(), Some("slate"));
        assert_eq!(resolved.start_tab, Some(Tab::Browse));
    }

    #[test]
    fn unknown_theme_in_a_config_file_is_rejected_with_its_origin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tempdex.toml");
        fs::write(&path, "[ui]\ntheme = \"neon\"\n").unwrap();

        let err = load(&cli_with_config(&path, &[])).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("ui.theme"));
        assert!(message.contains("value: neon"));
        assert!(message.contains("configuration key"));
    }

    #[test]
    fn missing_explicit_config_files_are_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load(&cli_with_config(&path, &[])).is_err());
    }
}
