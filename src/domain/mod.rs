//! Core domain state: the tracked zone list and display settings.

pub mod settings;
pub mod zone_list;

pub use settings::DisplaySettings;
pub use zone_list::ZoneList;
