//! Agency directory data model.
//!
//! A [`Directory`] is an immutable tree: regions contain localities, and each
//! locality carries aggregate metrics plus the agencies operating there. The
//! tree is loaded once, either from the bundled sample or from a JSON file,
//! and never mutated afterwards.

mod fixture;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Days substituted when an agency has not reported a speed component.
///
/// Large enough to sink unreported agencies to the bottom of any
/// speed-ordered listing while keeping the scoring math finite.
pub const MISSING_SPEED_DAYS: f64 = 99.0;

/// Root of the agency directory tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Directory {
    pub regions: Vec<Region>,
}

/// A top-level area, e.g. a US state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub localities: Vec<Locality>,
}

/// A city within a region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Locality {
    pub name: String,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub agencies: Vec<Agency>,
}

/// Aggregate numbers for a locality. Every field is optional; the display
/// layer substitutes placeholders for anything unreported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub agencies: Option<u32>,
    pub avg_interview_days: Option<f64>,
    pub avg_start_days: Option<f64>,
    pub top_fast_roles: Vec<String>,
    pub risk_note: Option<String>,
}

/// A single staffing agency listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Agency {
    pub name: String,
    #[serde(default)]
    pub engagement: String,
    #[serde(default)]
    pub reach: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub speed: Speed,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Reported placement speed in days. Either component may be absent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Speed {
    pub interview_days: Option<f64>,
    pub start_days: Option<f64>,
}

/// An open role advertised by an agency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    #[serde(default)]
    pub pay: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub timeframe: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub risk_note: Option<String>,
}

/// How quickly an agency wants a role filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    High,
    #[default]
    Medium,
    Low,
}

impl Directory {
    /// Return the sample dataset compiled into the binary.
    #[must_use]
    pub fn bundled() -> Self {
        fixture::bundled()
    }

    /// Load a directory from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check the structural invariants selection logic relies on: region
    /// codes are unique, and locality names are unique within their region.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut codes: Vec<&str> = Vec::with_capacity(self.regions.len());
        for region in &self.regions {
            if codes
                .iter()
                .any(|code| code.eq_ignore_ascii_case(&region.code))
            {
                return Err(DatasetError::DuplicateRegion {
                    code: region.code.clone(),
                });
            }
            codes.push(&region.code);

            let mut names: Vec<&str> = Vec::with_capacity(region.localities.len());
            for locality in &region.localities {
                if names
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(&locality.name))
                {
                    return Err(DatasetError::DuplicateLocality {
                        region: region.code.clone(),
                        locality: locality.name.clone(),
                    });
                }
                names.push(&locality.name);
            }
        }
        Ok(())
    }

    /// Find a region by its code, ignoring ASCII case.
    #[must_use]
    pub fn region(&self, code: &str) -> Option<&Region> {
        self.region_position(code).map(|idx| &self.regions[idx])
    }

    /// Position of a region by its code, ignoring ASCII case.
    #[must_use]
    pub fn region_position(&self, code: &str) -> Option<usize> {
        self.regions
            .iter()
            .position(|region| region.code.eq_ignore_ascii_case(code))
    }

    /// Total number of agencies across every locality.
    #[must_use]
    pub fn agency_count(&self) -> usize {
        self.regions
            .iter()
            .flat_map(|region| &region.localities)
            .map(|locality| locality.agencies.len())
            .sum()
    }
}

impl Region {
    /// Position of a locality by name, ignoring ASCII case.
    #[must_use]
    pub fn locality_position(&self, name: &str) -> Option<usize> {
        self.localities
            .iter()
            .position(|locality| locality.name.eq_ignore_ascii_case(name))
    }
}

impl Speed {
    /// Interview days with the missing-data sentinel applied.
    #[must_use]
    pub fn interview_days_or_default(&self) -> f64 {
        self.interview_days.unwrap_or(MISSING_SPEED_DAYS)
    }

    /// Start days with the missing-data sentinel applied.
    #[must_use]
    pub fn start_days_or_default(&self) -> f64 {
        self.start_days.unwrap_or(MISSING_SPEED_DAYS)
    }

    /// Combined days used to order listings, slowest last.
    #[must_use]
    pub fn total_days(&self) -> f64 {
        self.interview_days_or_default() + self.start_days_or_default()
    }
}

impl Urgency {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }
}

/// Errors raised while loading or validating a directory.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse dataset file `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate region code `{code}`")]
    DuplicateRegion { code: String },
    #[error("duplicate locality `{locality}` in region `{region}`")]
    DuplicateLocality { region: String, locality: String },
}
