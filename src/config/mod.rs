//! Configuration module for the tz-clocks application.

pub mod defaults;
pub mod persistence;

mod debug; // Private; files must use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use defaults::{SUGGESTED_ZONES, TICK_PERIOD, default_zones, host_local_zone};
pub use persistence::{APP_STATE_PATH, SETTINGS_STORAGE_KEY, ZONES_STORAGE_KEY};
