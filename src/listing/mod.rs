//! Listing pipeline over a locality's agencies.
//!
//! The pipeline is pure: it borrows a [`Locality`], applies the industry
//! filter and free-text query, orders by combined placement days, and returns
//! row handles into `locality.agencies`. Callers rerun it after every
//! interaction; there is no cache to invalidate.

mod speed;

use std::collections::BTreeSet;
use std::fmt;

use crate::dataset::{Agency, Locality, Region};

pub use speed::{INTERVIEW_DAY_WEIGHT, START_DAY_WEIGHT, SpeedClass, classify, placement_score};

/// Industry restriction applied to a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IndustryFilter {
    #[default]
    All,
    Label(String),
}

impl IndustryFilter {
    /// Parse user input. Blank input and the literal `all` in any case
    /// select every industry; anything else is kept as a label.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Label(trimmed.to_string())
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether an agency passes the filter. Labels compare case-sensitively
    /// against the agency's industry list.
    #[must_use]
    pub fn admits(&self, agency: &Agency) -> bool {
        match self {
            Self::All => true,
            Self::Label(label) => agency.industries.iter().any(|industry| industry == label),
        }
    }
}

impl fmt::Display for IndustryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// Inputs to [`build_listing`].
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub query: String,
    pub industry: IndustryFilter,
}

/// One listing row: an index into `locality.agencies` plus its speed bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingRow {
    pub index: usize,
    pub class: SpeedClass,
}

/// Filter and order a locality's agencies.
///
/// The query is trimmed and matched case-insensitively against agency name,
/// engagement type, reach, industries, and role titles. Rows are ordered by
/// combined interview and start days ascending; the sort is stable, so
/// agencies with equal totals keep their dataset order.
#[must_use]
pub fn build_listing(locality: Option<&Locality>, filter: &ListingFilter) -> Vec<ListingRow> {
    let Some(locality) = locality else {
        return Vec::new();
    };

    let needle = filter.query.trim().to_lowercase();
    let mut rows: Vec<(ListingRow, f64)> = locality
        .agencies
        .iter()
        .enumerate()
        .filter(|(_, agency)| filter.industry.admits(agency))
        .filter(|(_, agency)| needle.is_empty() || haystack(agency).contains(&needle))
        .map(|(index, agency)| {
            let row = ListingRow {
                index,
                class: classify(agency.speed),
            };
            (row, agency.speed.total_days())
        })
        .collect();

    rows.sort_by(|a, b| a.1.total_cmp(&b.1));
    rows.into_iter().map(|(row, _)| row).collect()
}

/// Distinct industry labels across every locality in the region, sorted.
#[must_use]
pub fn industry_vocabulary(region: Option<&Region>) -> Vec<String> {
    let Some(region) = region else {
        return Vec::new();
    };
    let mut labels = BTreeSet::new();
    for locality in &region.localities {
        for agency in &locality.agencies {
            for industry in &agency.industries {
                labels.insert(industry.clone());
            }
        }
    }
    labels.into_iter().collect()
}

fn haystack(agency: &Agency) -> String {
    let mut parts: Vec<&str> = vec![&agency.name, &agency.engagement, &agency.reach];
    parts.extend(agency.industries.iter().map(String::as_str));
    parts.extend(agency.roles.iter().map(|role| role.title.as_str()));
    parts.join(" ").to_lowercase()
}
