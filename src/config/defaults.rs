//! Built-in zone lists and tick cadence.

use std::time::Duration;

/// How often every rendered clock is recomputed.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The curated part of the default list. UTC and the host-local zone are
/// prepended at runtime (see [`default_zones`]).
pub const CURATED_DEFAULT_ZONES: [&str; 9] = [
    "Europe/Madrid",
    "America/New_York",
    "America/Los_Angeles",
    "Europe/London",
    "Asia/Tokyo",
    "Asia/Kolkata",
    "Australia/Sydney",
    "America/Sao_Paulo",
    "Africa/Johannesburg",
];

/// Zones offered by the input suggestion dropdown.
pub const SUGGESTED_ZONES: [&str; 12] = [
    "UTC",
    "Europe/Madrid",
    "Europe/London",
    "America/New_York",
    "America/Los_Angeles",
    "America/Sao_Paulo",
    "Asia/Tokyo",
    "Asia/Hong_Kong",
    "Asia/Kolkata",
    "Australia/Sydney",
    "Africa/Johannesburg",
    "Pacific/Auckland",
];

/// IANA name of the zone the host system is configured for, if the
/// platform exposes one we can resolve.
pub fn host_local_zone() -> Option<String> {
    iana_time_zone::get_timezone().ok()
}

/// The full default zone list: UTC, the host-local zone when detectable,
/// then the curated set. May contain a duplicate when the host zone is UTC
/// or one of the curated entries; `ZoneList` construction collapses it.
///
/// Callers get a fresh copy every time; `reset` deliberately rebuilds from
/// this constant rather than from whatever is currently persisted.
pub fn default_zones() -> Vec<String> {
    let mut zones: Vec<String> = vec!["UTC".to_string()];
    if let Some(local) = host_local_zone() {
        zones.push(local);
    }
    zones.extend(CURATED_DEFAULT_ZONES.iter().map(|z| z.to_string()));
    zones
}
