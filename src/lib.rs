//! Batch cleaner for event registration exports: collapses exact
//! duplicate registrants and flags likely ones for a manual pass.
//!
//! Known limitations: when the same attendee registered with different
//! email addresses over the years, the retained address is simply the
//! earliest one, which may be stale. Registrants whose first names don't
//! share a starting letter (e.g. "Alexander" vs "Xander") are not
//! flagged.

pub mod config;
pub mod load;
pub mod output;
pub mod process;
