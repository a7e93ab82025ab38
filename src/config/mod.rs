//! Display options, their builder and their validation.
//!
//! This module is organized into three components:
//!
//! - `options` - enumerated option values and their textual forms
//! - `builder` - [`ProgressBarBuilder`] for configuring a bar with chained setters
//! - `validate` - all-or-nothing validation producing a [`ValidConfig`]
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use spb::config::{BarVariant, Color, ProgressBarBuilder};
//!
//! let config = ProgressBarBuilder::new()
//!     .stop(500)
//!     .variant_bar(BarVariant::Increasing)
//!     .color(Color::Blue)
//!     .into_config();
//! assert_eq!(config.stop, 500);
//! ```
//!
//! ## Options From Text
//!
//! ```rust
//! use spb::config::ProgressConfig;
//!
//! let mut config = ProgressConfig::default();
//! config.set_option("len_bar", "20").unwrap();
//! config.set_option("speed", "show").unwrap();
//! assert!(config.set_option("len_bar", "twenty").is_err());
//! ```

pub mod builder;
pub mod options;
pub mod validate;

pub use builder::ProgressBarBuilder;
pub use options::{BarVariant, Color, TimerIcon, TimerVariant, Toggle};
pub use validate::ValidConfig;

use crate::error::{Error, Result};

/// Clock faces cycled by the animated timer icon by default.
pub const DEFAULT_TIMER_ICONS: &str = "🕛🕧🕐🕜🕑🕝🕒🕞🕓🕟🕔🕠🕕🕡🕖🕢🕗🕣🕘🕤🕙🕥🕚🕦";

/// Flat set of display options for a progress bar.
///
/// Nothing is checked until [`ProgressConfig::validate`] (or
/// [`ProgressBarBuilder::build`]) runs, and a bar can only be created from
/// the [`ValidConfig`] that validation returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressConfig {
    /// First iteration. The bar starts at this share of `stop`.
    pub start: i64,
    /// Last iteration, or the total number of units of work.
    pub stop: i64,
    /// Show or hide the bar itself.
    pub progress_bar: Toggle,
    /// How the bar is drawn.
    pub variant_bar: BarVariant,
    /// Opening and closing bracket, or an empty string for none.
    pub variant_brackets: String,
    /// Glyph for the filled part of the bar.
    pub variant_arrow: String,
    /// Glyph for the unfilled part of a static bar. May be whitespace.
    pub variant_space: String,
    /// Bar length in columns, between 10 and 100.
    pub len_bar: usize,
    /// Label shown before the percent when the bar is hidden.
    pub progress_str: String,
    /// Show or hide the percent. Hide it when the total is unknown.
    pub percent: Toggle,
    /// Show or hide the timer.
    pub timer: Toggle,
    /// Elapsed or remaining time.
    pub variant_timer: TimerVariant,
    /// Timer icon mode.
    pub icon_timer: TimerIcon,
    /// Glyph sequence cycled by the animated timer icon.
    pub variant_icon_timer: String,
    /// Label of the elapsed timer.
    pub timer_str: String,
    /// Label of the remaining time estimate.
    pub reverse_timer_str: String,
    /// Show or hide the transfer speed.
    pub speed: Toggle,
    /// Show or hide the speed icon.
    pub icon_speed: Toggle,
    /// Speed icon glyph.
    pub variant_icon_speed: String,
    /// Label of the speed indicator.
    pub speed_str: String,
    /// Show or hide the transferred bytes counter.
    pub load: Toggle,
    /// Show or hide the load icon.
    pub icon_load: Toggle,
    /// Load icon glyph.
    pub variant_icon_load: String,
    /// Label of the load indicator.
    pub load_str: String,
    /// Color of the arrows and of every numeric value.
    pub color: Color,
    /// Message written once the bar completes.
    pub end_msg: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            start: 0,
            stop: 100,
            progress_bar: Toggle::Show,
            variant_bar: BarVariant::Static,
            variant_brackets: "||".into(),
            variant_arrow: "▇".into(),
            variant_space: "-".into(),
            len_bar: 35,
            progress_str: "Progress".into(),
            percent: Toggle::Show,
            timer: Toggle::Show,
            variant_timer: TimerVariant::Increasing,
            icon_timer: TimerIcon::Animated,
            variant_icon_timer: DEFAULT_TIMER_ICONS.into(),
            timer_str: "Timer".into(),
            reverse_timer_str: "eta".into(),
            speed: Toggle::Hide,
            icon_speed: Toggle::Show,
            variant_icon_speed: "🚀".into(),
            speed_str: "Speed".into(),
            load: Toggle::Hide,
            icon_load: Toggle::Show,
            variant_icon_load: "⭳".into(),
            load_str: "Loaded".into(),
            color: Color::Green,
            end_msg: String::new(),
        }
    }
}

impl ProgressConfig {
    /// Set one option from its textual form.
    ///
    /// Numeric options must parse as integers and enumerated options must
    /// name one of their accepted values. Free-form strings are stored as
    /// given. Unknown option names are rejected.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name.trim() {
            "start" => self.start = parse_integer("start", value)?,
            "stop" => self.stop = parse_integer("stop", value)?,
            "len_bar" => self.len_bar = parse_integer("len_bar", value)?,
            "progress_bar" => self.progress_bar = Toggle::parse_for("progress_bar", value)?,
            "percent" => self.percent = Toggle::parse_for("percent", value)?,
            "timer" => self.timer = Toggle::parse_for("timer", value)?,
            "speed" => self.speed = Toggle::parse_for("speed", value)?,
            "icon_speed" => self.icon_speed = Toggle::parse_for("icon_speed", value)?,
            "load" => self.load = Toggle::parse_for("load", value)?,
            "icon_load" => self.icon_load = Toggle::parse_for("icon_load", value)?,
            "variant_bar" => self.variant_bar = value.parse()?,
            "variant_timer" => self.variant_timer = value.parse()?,
            "icon_timer" => self.icon_timer = value.parse()?,
            "color" => self.color = value.parse()?,
            "variant_brackets" => self.variant_brackets = value.to_string(),
            "variant_arrow" => self.variant_arrow = value.to_string(),
            "variant_space" => self.variant_space = value.to_string(),
            "progress_str" => self.progress_str = value.to_string(),
            "variant_icon_timer" => self.variant_icon_timer = value.to_string(),
            "timer_str" => self.timer_str = value.to_string(),
            "reverse_timer_str" => self.reverse_timer_str = value.to_string(),
            "variant_icon_speed" => self.variant_icon_speed = value.to_string(),
            "speed_str" => self.speed_str = value.to_string(),
            "variant_icon_load" => self.variant_icon_load = value.to_string(),
            "load_str" => self.load_str = value.to_string(),
            "end_msg" => self.end_msg = value.to_string(),
            _ => return Err(Error::invalid("option", name, "the name of a progress bar option")),
        }
        Ok(())
    }
}

fn parse_integer<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::invalid(field, value, "an integer"))
}
