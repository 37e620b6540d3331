//! Application state for the terminal browser.

mod app;

pub use app::App;
