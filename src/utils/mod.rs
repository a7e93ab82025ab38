//! Shared utility functions.
//!
//! - [`format`] - magnitude, clock and percent formatting used by the render engine

pub mod format;

pub use format::{
    arrow_count, format_clock, human_bytes, percent, remaining_seconds, round_tenths, share,
    HumanUnits, SI_PREFIXES, UNKNOWN_MAGNITUDE,
};
