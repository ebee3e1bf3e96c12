//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; everything that reads them is gated
//! behind `cfg(debug_assertions)` so release builds stay quiet.

pub struct DebugFlags {
    /// Emit UI interaction logs (add/remove/reset, settings toggles).
    pub print_ui_interactions: bool,
    /// Emit storage load/save logs, including fallback-to-defaults events.
    pub print_state_serde: bool,
    /// Emit a log line on every tick pass (very noisy).
    pub print_ticks: bool,
    /// Emit shutdown messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_state_serde: false,
    print_ticks: false,
    print_shutdown: false,
};
