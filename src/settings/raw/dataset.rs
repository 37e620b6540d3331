use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Dataset selection options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DatasetSection {
    pub(super) path: Option<PathBuf>,
    pub(super) region: Option<String>,
    pub(super) locality: Option<String>,
}

/// Dataset options after path resolution.
pub(super) struct DatasetResolution {
    pub(super) path: Option<PathBuf>,
    pub(super) region: Option<String>,
    pub(super) locality: Option<String>,
}

impl DatasetSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.data.clone() {
            self.path = Some(path);
        }
        if let Some(code) = cli.region.clone() {
            self.region = Some(code);
        }
        if let Some(name) = cli.city.clone() {
            self.locality = Some(name);
        }
    }

    /// Resolve the dataset path to an absolute file; `None` means the bundled
    /// sample. Region and locality pass through untouched, they are matched
    /// against the loaded dataset at workflow time.
    pub(super) fn resolve(self) -> Result<DatasetResolution> {
        let path = match self.path {
            None => None,
            Some(mut path) => {
                if path.is_relative() {
                    path = env::current_dir()
                        .context("failed to resolve current directory for the dataset path")?
                        .join(path);
                }
                let path = fs::canonicalize(&path).with_context(|| {
                    format!("failed to canonicalize dataset path {}", path.display())
                })?;
                let metadata = fs::metadata(&path)
                    .with_context(|| format!("failed to inspect dataset path {}", path.display()))?;
                ensure!(metadata.is_file(), "dataset path must be a file");
                Some(path)
            }
        };

        Ok(DatasetResolution {
            path,
            region: self.region,
            locality: self.locality,
        })
    }
}
