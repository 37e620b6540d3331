//! File-backed tracing setup.
//!
//! The UI owns the terminal while it runs, so log output goes to
//! `tempdex.log` in the data directory instead of stderr. Verbosity is
//! controlled through the `TEMPDEX_LOG` environment variable using the
//! usual `tracing` filter syntax; the default is `info`.

use std::fs::{self, File};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TEMPDEX_LOG";
const LOG_FILE: &str = "tempdex.log";

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Safe to call more than once; only the
/// first call takes effect. When no log file can be opened the process
/// simply runs without logging.
pub fn init() {
    INIT.get_or_init(|| {
        let _ = try_init();
    });
}

fn try_init() -> Option<()> {
    let dir = crate::app_dirs::get_data_dir().ok()?;
    fs::create_dir_all(&dir).ok()?;
    let file = File::create(dir.join(LOG_FILE)).ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init()
        .ok()
}
