//! Interactive terminal UI orchestration for `tempdex`.
//!
//! The [`builder`] module exposes the public-facing [`BrowserUi`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, state
//! management, and the reusable widgets/style definitions that power the
//! terminal application.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
pub mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::BrowserUi;
pub use config::{Tab, TabLabels, UiLabels};
pub use outcome::{AgencySelection, BrowseOutcome};
pub use runtime::run;
pub use state::App;
