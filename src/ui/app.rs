use std::collections::HashMap;

use eframe::{Frame, egui};

use crate::StartupOptions;
use crate::clock::ClockReading;
use crate::config::TICK_PERIOD;
use crate::domain::{DisplaySettings, ZoneList};
use crate::storage;
use crate::ui::ui_render::UserEvent;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The world-clock widget.
///
/// Zone list and settings are the only durable state; everything else is
/// rebuilt per session. Readings live in an explicit zone-keyed map rather
/// than being rediscovered from the widget tree each tick.
pub struct ClocksApp {
    pub(super) zones: ZoneList,
    pub(super) settings: DisplaySettings,

    /// One reading per tracked zone, keyed by the zone identifier.
    /// Rebuilt wholesale on add/reset, trimmed on remove, overwritten each
    /// tick. Display order comes from `zones`, not from this map.
    pub(super) readings: HashMap<String, ClockReading>,

    pub(super) zone_input: String,
    pub(super) alert: Option<String>,

    /// When the last tick pass ran. The tick is free-running: each pass
    /// reads wall-clock "now" independently, with no drift correction.
    pub(super) last_tick: Option<AppInstant>,

    // Mutations set these so the backing store is written before the frame
    // that handled the event ends.
    pub(super) zones_dirty: bool,
    pub(super) settings_dirty: bool,

    /// The session started with `--fresh`: the persisted zone list must
    /// survive untouched unless the user mutates zones this run.
    pub(super) fresh_start: bool,
    /// Any zone mutation happened this session. Unlike `zones_dirty`, never
    /// cleared; gates the auto-save write in a fresh session.
    pub(super) zones_mutated: bool,
}

impl ClocksApp {
    pub fn new(cc: &eframe::CreationContext<'_>, startup: StartupOptions) -> Self {
        let storage = cc.storage;

        let zones = if startup.fresh {
            ZoneList::default()
        } else {
            storage::load_zones(storage).unwrap_or_else(ZoneList::default)
        };
        let settings = storage::load_settings(storage).unwrap_or_else(DisplaySettings::default);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!(
                "Starting with {} zones (fresh: {}), settings: {:?}",
                zones.len(),
                startup.fresh,
                settings
            );
        }

        let mut app = Self::with_state(zones, settings);
        app.fresh_start = startup.fresh;

        // CLI-seeded zones go through the normal add path, minus the modal
        // alert: a typo on the command line is a log line, not a dialog.
        for tz in &startup.extra_zones {
            if crate::clock::is_valid(tz) {
                app.zones.add_front(tz);
                app.mark_zones_dirty();
            } else {
                log::error!("Ignoring unknown time zone from command line: '{}'", tz);
            }
        }

        app.rebuild_all_cards();
        app
    }

    /// Bare constructor used by `new` and by tests that have no eframe
    /// context. Cards start empty; call `rebuild_all_cards` to populate.
    pub fn with_state(zones: ZoneList, settings: DisplaySettings) -> Self {
        Self {
            zones,
            settings,
            readings: HashMap::new(),
            zone_input: String::new(),
            alert: None,
            last_tick: None,
            zones_dirty: false,
            settings_dirty: false,
            fresh_start: false,
            zones_mutated: false,
        }
    }

    /// Marks the zone list as needing a write this frame and remembers that
    /// this session mutated zones at all.
    pub(super) fn mark_zones_dirty(&mut self) {
        self.zones_dirty = true;
        self.zones_mutated = true;
    }

    fn persist_if_dirty(&mut self, storage: Option<&mut (dyn eframe::Storage + '_)>) {
        if !self.zones_dirty && !self.settings_dirty {
            return;
        }
        let Some(storage) = storage else {
            // No backend on this platform; state stays in-memory only.
            self.zones_dirty = false;
            self.settings_dirty = false;
            return;
        };
        if self.zones_dirty {
            storage::save_zones(storage, &self.zones);
            self.zones_dirty = false;
        }
        if self.settings_dirty {
            storage::save_settings(storage, &self.settings);
            self.settings_dirty = false;
        }
        storage.flush();
    }
}

impl eframe::App for ClocksApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        // A fresh session ignores the persisted list; the auto-save must not
        // clobber it with the defaults unless zones were mutated this run.
        if !self.fresh_start || self.zones_mutated {
            storage::save_zones(storage, &self.zones);
        }
        storage::save_settings(storage, &self.settings);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.tick_if_due();

        let mut events = self.render_top_panel(ctx);
        events.extend(self.render_clocks_panel(ctx));
        self.render_alert(ctx);

        for event in events {
            match event {
                UserEvent::AddZone(raw) => self.handle_add_zone(&raw),
                UserEvent::RemoveZone(tz) => self.handle_remove_zone(&tz),
                UserEvent::ResetToDefaults => self.handle_reset(),
                UserEvent::ShowDate(on) => self.set_show_date(on),
                UserEvent::Hour12(on) => self.set_hour12(on),
            }
        }

        // A structural mutation must hit the store and the card set before
        // this frame ends, so the next tick observes consistent state.
        self.persist_if_dirty(frame.storage_mut());

        ctx.request_repaint_after(TICK_PERIOD);
    }
}
