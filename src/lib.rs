#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod clock;
pub mod config;
pub mod domain;
pub mod storage;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use clock::{ClockReading, is_valid};
pub use domain::{DisplaySettings, ZoneList};
pub use ui::ClocksApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Track these zones for this run, on top of the persisted list
    #[arg(long = "zone", value_name = "IANA_ID")]
    pub zones: Vec<String>,

    /// Ignore the persisted zone list and start from the built-in defaults
    #[arg(long, default_value_t = false)]
    pub fresh: bool,
}

/// Startup knobs the entry points hand to the app. The WASM shell has no
/// command line and uses the defaults.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub extra_zones: Vec<String>,
    pub fresh: bool,
}

impl From<Cli> for StartupOptions {
    fn from(cli: Cli) -> Self {
        Self {
            extra_zones: cli.zones,
            fresh: cli.fresh,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, startup: StartupOptions) -> Box<dyn eframe::App> {
    Box::new(ClocksApp::new(cc, startup))
}
