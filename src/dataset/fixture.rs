//! Sample dataset compiled into the binary.

use super::Directory;

const SAMPLE_JSON: &str = include_str!("../../data/sample.json");

/// Parse the bundled sample.
///
/// The fixture ships inside the crate and is pinned by tests, so a parse
/// failure here is a packaging defect rather than a runtime condition.
pub(super) fn bundled() -> Directory {
    serde_json::from_str(SAMPLE_JSON).expect("bundled sample dataset must parse")
}
