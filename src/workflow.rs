use anyhow::{Context, Result};
use tempdex::{BrowseOutcome, BrowserUi, Directory};
use tracing::debug;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive browse session.
pub(crate) struct BrowseWorkflow {
    browser: BrowserUi,
}

impl BrowseWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let browser = builder_from_config(config)?;
        Ok(Self { browser })
    }

    pub(crate) fn run(self) -> Result<BrowseOutcome> {
        self.browser.run()
    }
}

/// Translate the resolved configuration into a configured [`BrowserUi`].
fn builder_from_config(config: ResolvedConfig) -> Result<BrowserUi> {
    let ResolvedConfig {
        dataset_path,
        region,
        locality,
        input_title,
        initial_query,
        theme,
        start_tab,
        industry,
        show_risk_notes,
    } = config;

    let directory = load_directory(dataset_path)?;

    let mut builder = BrowserUi::new(directory)
        .with_industry(industry)
        .with_risk_notes(show_risk_notes)
        .with_initial_query(initial_query);
    if let Some(code) = region {
        builder = builder.with_region(code);
    }
    if let Some(name) = locality {
        builder = builder.with_locality(name);
    }
    if let Some(title) = input_title {
        builder = builder.with_input_title(title);
    }
    if let Some(name) = theme {
        builder = builder.with_theme_name(&name);
    }
    if let Some(tab) = start_tab {
        builder = builder.with_start_tab(tab);
    }

    Ok(builder)
}

fn load_directory(dataset_path: Option<std::path::PathBuf>) -> Result<Directory> {
    match dataset_path {
        Some(path) => {
            debug!(path = %path.display(), "loading external dataset");
            let directory = Directory::from_path(&path)
                .with_context(|| format!("failed to load dataset from {}", path.display()))?;
            directory
                .validate()
                .with_context(|| format!("invalid dataset in {}", path.display()))?;
            Ok(directory)
        }
        None => {
            debug!("using the bundled sample dataset");
            Ok(Directory::bundled())
        }
    }
}
