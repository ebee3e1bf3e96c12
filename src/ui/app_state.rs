//! Mutation handlers and the tick engine.

use chrono::Utc;

use crate::clock::{ClockReading, is_valid};
use crate::config::TICK_PERIOD;
use crate::ui::config::UI_TEXT;
use crate::utils::app_time;

use super::app::ClocksApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl ClocksApp {
    /// Add path for user input: trim, validate, then front-insert.
    ///
    /// Rejection raises the modal alert and leaves all state untouched.
    /// Acceptance marks the list dirty and rebuilds the whole card set.
    pub(super) fn handle_add_zone(&mut self, raw: &str) {
        let tz = raw.trim();
        if tz.is_empty() {
            return;
        }
        if !is_valid(tz) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Rejected zone input '{}'", tz);
            }
            self.alert = Some(UI_TEXT.invalid_zone_alert.to_string());
            return;
        }

        self.zones.add_front(tz);
        self.mark_zones_dirty();
        self.rebuild_all_cards();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Added zone '{}' ({} tracked)", tz, self.zones.len());
        }
    }

    /// Removes one zone and only that zone's card. The surviving cards keep
    /// whatever readings they already have until the next tick.
    pub(super) fn handle_remove_zone(&mut self, tz: &str) {
        if self.zones.remove(tz) {
            self.mark_zones_dirty();
            self.readings.remove(tz);

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Removed zone '{}' ({} tracked)", tz, self.zones.len());
            }
        }
    }

    /// Hard reset to the built-in default list. Discards any user ordering
    /// even when the current set already equals the defaults.
    pub(super) fn handle_reset(&mut self) {
        self.zones.reset_to_defaults();
        self.mark_zones_dirty();
        self.rebuild_all_cards();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Reset to default zones ({} tracked)", self.zones.len());
        }
    }

    pub(super) fn set_show_date(&mut self, on: bool) {
        self.settings.show_date = on;
        self.settings_dirty = true;
        self.tick_now();
    }

    pub(super) fn set_hour12(&mut self, on: bool) {
        self.settings.hour12 = on;
        self.settings_dirty = true;
        self.tick_now();
    }

    /// Full structural rebuild: dedup the list, drop every card, recreate
    /// one per zone and fill it immediately so no placeholder frame shows.
    pub(super) fn rebuild_all_cards(&mut self) {
        let len_before = self.zones.len();
        self.zones.dedup_in_place();
        if self.zones.len() != len_before {
            // Duplicates survived in storage; persist the cleaned list.
            self.mark_zones_dirty();
        }
        self.readings.clear();
        for zone in self.zones.iter() {
            self.readings
                .insert(zone.to_string(), ClockReading::placeholder(zone));
        }
        self.tick_now();
    }

    /// One tick pass: snapshot the settings, format "now" into every card.
    /// A card whose zone fails to format degrades in place; the rest of the
    /// pass continues.
    pub(super) fn tick_now(&mut self) {
        let now = Utc::now();
        let settings = self.settings;
        for zone in self.zones.as_slice() {
            self.readings
                .insert(zone.clone(), ClockReading::compute(zone, now, settings));
        }
        self.last_tick = Some(app_time::now());

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ticks {
            log::info!("Tick pass over {} cards", self.readings.len());
        }
    }

    /// Free-running 1-second gate. No catch-up: if a frame arrives late the
    /// next tick still formats the current "now".
    pub(super) fn tick_if_due(&mut self) {
        let due = self
            .last_tick
            .is_none_or(|last| last.elapsed() >= TICK_PERIOD);
        if due {
            self.tick_now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::reading::{INVALID_ZONE_INDICATOR, TIME_PLACEHOLDER};
    use crate::domain::{DisplaySettings, ZoneList};

    fn app_with(zones: &[&str]) -> ClocksApp {
        let list = ZoneList::from_zones(zones.iter().map(|z| z.to_string()).collect());
        let mut app = ClocksApp::with_state(list, DisplaySettings::default());
        app.rebuild_all_cards();
        app
    }

    #[test]
    fn test_rebuild_yields_one_card_per_unique_zone() {
        let app = app_with(&["UTC", "Asia/Tokyo", "UTC", "Europe/London"]);
        assert_eq!(app.zones.len(), 3);
        assert_eq!(app.readings.len(), 3);
        assert!(app.readings.contains_key("UTC"));
        assert!(app.readings.contains_key("Asia/Tokyo"));
        assert!(app.readings.contains_key("Europe/London"));
    }

    #[test]
    fn test_add_invalid_zone_alerts_and_mutates_nothing() {
        let mut app = app_with(&["UTC"]);
        let zones_before = app.zones.clone();
        app.zones_dirty = false;

        app.handle_add_zone("Not/A_Zone");

        assert!(app.alert.is_some());
        assert_eq!(app.zones, zones_before);
        assert!(!app.zones_dirty);
        assert_eq!(app.readings.len(), 1);
    }

    #[test]
    fn test_add_blank_input_is_silently_ignored() {
        let mut app = app_with(&["UTC"]);
        app.handle_add_zone("   ");
        assert!(app.alert.is_none());
        assert_eq!(app.zones.len(), 1);
    }

    #[test]
    fn test_add_valid_zone_goes_to_front_and_gets_a_card() {
        let mut app = app_with(&["UTC", "Europe/London"]);
        app.handle_add_zone("Asia/Tokyo");
        assert_eq!(
            app.zones.as_slice(),
            ["Asia/Tokyo", "UTC", "Europe/London"]
        );
        assert!(app.zones_dirty);
        let reading = app.readings.get("Asia/Tokyo").unwrap();
        assert_ne!(reading.time, TIME_PLACEHOLDER);
    }

    #[test]
    fn test_removal_is_isolated_to_one_card() {
        let mut app = app_with(&["UTC", "Asia/Tokyo", "Europe/London"]);
        let tokyo_before = app.readings.get("Asia/Tokyo").cloned().unwrap();
        let london_before = app.readings.get("Europe/London").cloned().unwrap();

        app.handle_remove_zone("UTC");

        assert_eq!(app.zones.len(), 2);
        assert_eq!(app.readings.len(), 2);
        assert!(!app.readings.contains_key("UTC"));
        // No rebuild: the survivors' slots are byte-identical.
        assert_eq!(app.readings.get("Asia/Tokyo"), Some(&tokyo_before));
        assert_eq!(app.readings.get("Europe/London"), Some(&london_before));
    }

    #[test]
    fn test_remove_unknown_zone_is_a_no_op() {
        let mut app = app_with(&["UTC"]);
        app.zones_dirty = false;
        app.handle_remove_zone("Asia/Tokyo");
        assert!(!app.zones_dirty);
        assert_eq!(app.readings.len(), 1);
    }

    #[test]
    fn test_settings_toggle_refreshes_cards_immediately() {
        let mut app = app_with(&["UTC"]);
        assert_eq!(app.readings.get("UTC").unwrap().date, "");

        app.set_show_date(true);
        assert!(app.settings_dirty);
        assert_ne!(app.readings.get("UTC").unwrap().date, "");

        app.set_show_date(false);
        assert_eq!(app.readings.get("UTC").unwrap().date, "");
    }

    #[test]
    fn test_tick_degrades_only_the_broken_card() {
        // A zone that no longer resolves can only enter via tampered
        // storage; it must not poison its siblings.
        let app = app_with(&["UTC", "Ghost/Zone"]);
        let ghost = app.readings.get("Ghost/Zone").unwrap();
        assert_eq!(ghost.time, INVALID_ZONE_INDICATOR);
        assert!(ghost.meta.starts_with("Ghost/Zone • "));

        let utc = app.readings.get("UTC").unwrap();
        assert_ne!(utc.time, INVALID_ZONE_INDICATOR);
    }

    #[test]
    fn test_spec_scenario_end_to_end() {
        let mut app = ClocksApp::with_state(ZoneList::default(), DisplaySettings::default());
        app.rebuild_all_cards();
        let default_len = app.zones.len();

        app.handle_add_zone("Asia/Tokyo");
        assert_eq!(app.zones.len(), default_len);
        assert_eq!(
            app.zones.as_slice().first().map(String::as_str),
            Some("Asia/Tokyo")
        );

        app.handle_remove_zone("UTC");
        assert_eq!(app.readings.len(), default_len - 1);
        assert!(!app.readings.contains_key("UTC"));

        app.handle_reset();
        assert_eq!(app.zones, ZoneList::default());
        assert_eq!(app.readings.len(), app.zones.len());
    }
}
