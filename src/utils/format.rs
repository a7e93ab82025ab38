//! Number formatting for the progress line.
//!
//! Everything in this module is a pure function of its inputs so the render
//! engine can be checked frame by frame without a terminal.
//!
//! # Examples
//!
//! ```rust
//! use spb::utils::{format_clock, HumanUnits};
//!
//! assert_eq!(HumanUnits::new(1_500.0).to_string(), "1.50k");
//! assert_eq!(format_clock(3661.05), "01:01:01.0");
//! ```

use crate::config::BarVariant;
use std::fmt;

/// Decimal prefixes, one per power of 1000.
pub const SI_PREFIXES: [&str; 9] = ["", "k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Shown instead of a number once a value outgrows the largest prefix.
pub const UNKNOWN_MAGNITUDE: &str = "?";

/// Reset all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// A value scaled down by powers of 1000 until it is below 1000.
///
/// The scaled value is `None` when even the `Y` prefix is not enough, which
/// happens for values at or above `1000^9`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumanUnits {
    scaled: Option<(f64, &'static str)>,
}

impl HumanUnits {
    /// Scale `value` to the largest prefix that keeps it under 1000.
    pub fn new(mut value: f64) -> Self {
        for prefix in SI_PREFIXES {
            if value.abs() < 1000.0 {
                return Self {
                    scaled: Some((value, prefix)),
                };
            }
            value /= 1000.0;
        }
        Self { scaled: None }
    }

    /// The scaled value and its prefix, if the value fits the prefix table.
    pub fn scaled(&self) -> Option<(f64, &'static str)> {
        self.scaled
    }
}

impl fmt::Display for HumanUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scaled {
            Some((value, prefix)) => write!(f, "{value:.2}{prefix}"),
            None => f.write_str(UNKNOWN_MAGNITUDE),
        }
    }
}

/// Byte count formatted with decimal prefixes, e.g. `1.50kB`.
pub fn human_bytes(bytes: u64) -> String {
    match HumanUnits::new(bytes as f64).scaled() {
        Some((value, prefix)) => format!("{value:.2}{prefix}B"),
        None => UNKNOWN_MAGNITUDE.to_string(),
    }
}

/// Round to one decimal place, ties going to the even tenth.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Format a number of seconds as `[HH:]MM:SS.s`.
///
/// Seconds are rounded to a tenth with ties to even. The hour field only
/// appears while the hour count is strictly between 0 and 23.
pub fn format_clock(seconds: f64) -> String {
    let tenths = (seconds.max(0.0) * 10.0).round_ties_even() as u64;
    let hours = tenths / 36_000;
    let minutes = (tenths / 600) % 60;
    let rest = tenths % 600;

    let mut clock = String::with_capacity(10);
    if hours > 0 && hours < 23 {
        clock.push_str(&format!("{hours:02}:"));
    }
    clock.push_str(&format!("{minutes:02}:{:02}.{}", rest / 10, rest % 10));
    clock
}

/// Share of the work done, `iteration / stop`.
pub fn share(iteration: i64, stop: i64) -> f64 {
    iteration as f64 / stop as f64
}

/// Number of arrow glyphs for the static and increasing bars.
///
/// `round(share * len_bar) - 1`, kept within `0..len_bar` so the arrows and
/// the trailing spaces always add up to `len_bar - 1` glyphs.
pub fn arrow_count(share: f64, len_bar: usize) -> usize {
    let arrows = (share * len_bar as f64).round_ties_even() - 1.0;
    arrows.clamp(0.0, len_bar.saturating_sub(1) as f64) as usize
}

/// Percent shown next to the bar.
///
/// The decreasing variant counts down to zero while its arrows are sized by
/// the remaining share.
pub fn percent(share: f64, variant: BarVariant) -> f64 {
    let done = round_tenths(share * 100.0);
    match variant {
        BarVariant::Decreasing => 100.0 - done,
        BarVariant::Static | BarVariant::Increasing => done,
    }
}

/// Linear estimate of the seconds left given the share done so far.
///
/// Stays at zero until at least `1 / stop` percent has been reached.
pub fn remaining_seconds(share: f64, stop: i64, elapsed: f64) -> f64 {
    let percent = share * 100.0;
    if percent >= 1.0 / stop as f64 {
        (100.0 / (percent / elapsed) - elapsed).abs()
    } else {
        0.0
    }
}
