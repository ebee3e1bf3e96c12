//! The ordered, deduplicated list of tracked time zones.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::config::default_zones;

/// Ordered sequence of IANA zone identifiers.
///
/// Invariants: no duplicates, and the most recently added (or re-added) zone
/// sits at the front. The front of the list is rendered first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneList {
    zones: Vec<String>,
}

impl Default for ZoneList {
    fn default() -> Self {
        Self::from_zones(default_zones())
    }
}

impl ZoneList {
    /// Builds a list from raw identifiers, deduplicating while keeping the
    /// first occurrence of each zone in place.
    pub fn from_zones(zones: Vec<String>) -> Self {
        let mut list = Self { zones };
        list.dedup_in_place();
        list
    }

    /// Order-preserving, first-occurrence-wins dedup. Applied on every
    /// structural render pass, not just on mutation, so a list loaded from
    /// corrupted-but-parseable storage also ends up clean.
    pub fn dedup_in_place(&mut self) {
        self.zones = self.zones.iter().unique().cloned().collect();
    }

    /// Inserts `tz` at the front, or moves it to the front when already
    /// present. The relative order of the remaining zones is unchanged.
    ///
    /// Callers are expected to have validated `tz` first; this is pure list
    /// bookkeeping.
    pub fn add_front(&mut self, tz: &str) {
        self.zones.retain(|z| z != tz);
        self.zones.insert(0, tz.to_string());
        self.dedup_in_place();
    }

    /// Removes every occurrence of `tz`. Returns whether anything was
    /// removed.
    pub fn remove(&mut self, tz: &str) -> bool {
        let before = self.zones.len();
        self.zones.retain(|z| z != tz);
        self.zones.len() != before
    }

    /// Replaces the list with a fresh copy of the built-in defaults.
    /// This is a hard reset: any user reordering is discarded even when the
    /// current set already equals the default set.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    pub fn contains(&self, tz: &str) -> bool {
        self.zones.iter().any(|z| z == tz)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.zones
    }
}
