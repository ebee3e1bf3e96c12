//! Best-effort JSON persistence over `eframe::Storage`.
//!
//! Every failure mode on the read side (no backend, missing key, corrupt
//! JSON) collapses to [`LoadOutcome::Missing`] and the caller picks the
//! fallback, so a broken store degrades to "changes won't survive reload"
//! and nothing else. Writes log-and-continue for the same reason.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{SETTINGS_STORAGE_KEY, ZONES_STORAGE_KEY};
use crate::domain::{DisplaySettings, ZoneList};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Outcome of a best-effort read. `Missing` covers absence and corruption
/// alike; the distinction is deliberately not surfaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Missing,
}

impl<T> LoadOutcome<T> {
    pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            LoadOutcome::Loaded(value) => value,
            LoadOutcome::Missing => fallback(),
        }
    }
}

fn load_json<T: DeserializeOwned>(storage: Option<&dyn eframe::Storage>, key: &str) -> LoadOutcome<T> {
    let Some(storage) = storage else {
        return LoadOutcome::Missing;
    };
    let Some(raw) = storage.get_string(key) else {
        return LoadOutcome::Missing;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => LoadOutcome::Loaded(value),
        Err(_err) => {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_state_serde {
                log::warn!("Discarding corrupt value under '{}': {}", key, _err);
            }
            LoadOutcome::Missing
        }
    }
}

fn save_json<T: Serialize>(storage: &mut dyn eframe::Storage, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => storage.set_string(key, raw),
        Err(err) => log::error!("Failed to serialize value for '{}': {}", key, err),
    }
}

/// Reads the persisted zone list. Callers fall back to the defaults on
/// `Missing`.
pub fn load_zones(storage: Option<&dyn eframe::Storage>) -> LoadOutcome<ZoneList> {
    load_json(storage, ZONES_STORAGE_KEY)
}

/// Persists the full zone list under its JSON-array key.
pub fn save_zones(storage: &mut dyn eframe::Storage, zones: &ZoneList) {
    save_json(storage, ZONES_STORAGE_KEY, zones);
}

/// Reads the persisted display settings.
pub fn load_settings(storage: Option<&dyn eframe::Storage>) -> LoadOutcome<DisplaySettings> {
    load_json(storage, SETTINGS_STORAGE_KEY)
}

/// Persists the display settings blob.
pub fn save_settings(storage: &mut dyn eframe::Storage, settings: &DisplaySettings) {
    save_json(storage, SETTINGS_STORAGE_KEY, settings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// In-memory stand-in for the eframe storage backend.
    #[derive(Default)]
    struct MemStorage {
        values: HashMap<String, String>,
    }

    impl eframe::Storage for MemStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    fn zone_list(zones: &[&str]) -> ZoneList {
        ZoneList::from_zones(zones.iter().map(|z| z.to_string()).collect())
    }

    #[test]
    fn test_zone_round_trip_preserves_order() {
        let mut storage = MemStorage::default();
        let zones = zone_list(&["Asia/Tokyo", "UTC", "Europe/Madrid"]);
        save_zones(&mut storage, &zones);
        assert_eq!(
            load_zones(Some(&storage)),
            LoadOutcome::Loaded(zones),
        );
    }

    #[test]
    fn test_zones_persist_as_a_plain_json_array() {
        let mut storage = MemStorage::default();
        save_zones(&mut storage, &zone_list(&["UTC", "Asia/Tokyo"]));
        assert_eq!(
            storage.values.get(ZONES_STORAGE_KEY).map(String::as_str),
            Some(r#"["UTC","Asia/Tokyo"]"#),
        );
    }

    #[test]
    fn test_missing_backend_and_missing_key_read_as_missing() {
        assert_eq!(load_zones(None), LoadOutcome::<ZoneList>::Missing);
        let storage = MemStorage::default();
        assert_eq!(load_zones(Some(&storage)), LoadOutcome::Missing);
        assert_eq!(load_settings(Some(&storage)), LoadOutcome::Missing);
    }

    #[test]
    fn test_corrupt_json_reads_as_missing() {
        let mut storage = MemStorage::default();
        storage.set_string(ZONES_STORAGE_KEY, "not json at all".to_string());
        storage.set_string(SETTINGS_STORAGE_KEY, "{\"showDate\":".to_string());
        assert_eq!(load_zones(Some(&storage)), LoadOutcome::<ZoneList>::Missing);
        assert_eq!(
            load_settings(Some(&storage)),
            LoadOutcome::<DisplaySettings>::Missing
        );
    }

    #[test]
    fn test_settings_fallback_yields_both_flags_off() {
        let loaded = load_settings(None).unwrap_or_else(DisplaySettings::default);
        assert_eq!(loaded, DisplaySettings::default());
        assert!(!loaded.show_date);
        assert!(!loaded.hour12);
    }

    #[test]
    fn test_settings_round_trip() {
        let mut storage = MemStorage::default();
        let settings = DisplaySettings {
            show_date: true,
            hour12: true,
        };
        save_settings(&mut storage, &settings);
        assert_eq!(load_settings(Some(&storage)), LoadOutcome::Loaded(settings));
    }
}
