//! Core crate exports for building and running the `tempdex` terminal interface.
//!
//! The root module primarily re-exports types from the dataset, listing, and
//! UI subsystems so that embedders can configure the application without
//! digging through the module hierarchy.

pub mod app_dirs;
pub mod dataset;
pub mod listing;
pub mod logging;
pub mod ui;

pub use dataset::{Agency, Directory, Locality, Region, Role};
pub use listing::{IndustryFilter, ListingRow, SpeedClass, build_listing};
pub use ui::{AgencySelection, BrowseOutcome, BrowserUi, Tab, UiLabels, run};

pub use crate::ui::style::{Theme, by_name as theme_by_name, default_theme, names as theme_names};
