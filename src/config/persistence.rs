//! Storage keys and persistence paths.

/// Storage key for the tracked zone list (JSON array of IANA ids).
pub const ZONES_STORAGE_KEY: &str = "tz-clocks-zones";

/// Storage key for display settings (JSON `{"showDate": .., "hour12": ..}`).
pub const SETTINGS_STORAGE_KEY: &str = "tz-clocks-settings";

// App state persistence
/// Path the native shell hands to eframe for its storage backend.
pub const APP_STATE_PATH: &str = ".tz-clocks.json";
