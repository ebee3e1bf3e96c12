//! Small cross-cutting helpers.

pub mod app_time;

pub use app_time::{AppInstant, now};
