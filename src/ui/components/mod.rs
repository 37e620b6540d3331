//! UI building blocks shared across rendering and state modules.

/// Compare tab panels.
pub mod compare;
/// Agency detail pane.
pub mod detail;
/// Feedback tab panels.
pub mod feedback;
/// Table row construction.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Location sidebar and city snapshot.
pub mod snapshot;
/// Table rendering and configuration.
pub mod tables;
/// Tab and input widget components.
pub mod tabs;

pub use compare::{CompareContext, render_compare};
pub use detail::{DetailContext, DetailLayout, render_agency_detail};
pub use feedback::{FeedbackContext, render_feedback};
pub use rows::{agency_headers, agency_widths, build_agency_rows};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
pub use snapshot::{LocationContext, render_location_panel};
pub use tables::{TableSpec, render_table};
pub use tabs::{InputContext, TabItem, render_input_with_tabs};
