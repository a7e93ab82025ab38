//! All-or-nothing validation of display options.
//!
//! Checks run in a fixed order and the first failure is returned. A
//! [`ValidConfig`] can only be obtained from a configuration that passed
//! every check, which is what lets the render path skip any re-checking.
//!
//! ```rust
//! use spb::config::ProgressConfig;
//! use spb::Error;
//!
//! let config = ProgressConfig { start: 50, stop: 10, ..Default::default() };
//! let err = config.validate_with_columns(200).unwrap_err();
//! assert!(matches!(err, Error::InvalidBounds { start: 50, stop: 10 }));
//! ```

use super::options::{BarVariant, Color, TimerIcon, TimerVariant, Toggle};
use super::ProgressConfig;
use crate::error::{Error, Result};
use crate::progress::bar::{LINE_END, STATIC_TIMER_ICON};

use console::{measure_text_width, Term};
use std::ops::RangeInclusive;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Accepted bar lengths, in columns.
pub const LEN_BAR_RANGE: RangeInclusive<usize> = 10..=100;

/// Columns assumed when stdout is not attached to a terminal.
pub const FALLBACK_COLUMNS: usize = 80;

// Widest forms of the fixed-width fields.
const PERCENT_FIELD: &str = " 100.0% ";
const CLOCK_FIELD: &str = "[00:00:00.0] ";
const SPEED_FIELD: &str = "[000.00kB/s] ";
const LOAD_FIELD: &str = "[000.00MB] ";

/// A configuration that passed validation.
///
/// Strings are trimmed, the timer glyphs are split into graphemes and the
/// brackets are resolved for the chosen bar variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidConfig {
    pub(crate) start: i64,
    pub(crate) stop: i64,
    pub(crate) progress_bar: Toggle,
    pub(crate) variant_bar: BarVariant,
    pub(crate) brackets: (String, String),
    pub(crate) arrow: String,
    pub(crate) space: String,
    pub(crate) len_bar: usize,
    pub(crate) progress_str: String,
    pub(crate) percent: Toggle,
    pub(crate) timer: Toggle,
    pub(crate) variant_timer: TimerVariant,
    pub(crate) icon_timer: TimerIcon,
    pub(crate) timer_icons: Vec<String>,
    pub(crate) timer_str: String,
    pub(crate) reverse_timer_str: String,
    pub(crate) speed: Toggle,
    pub(crate) icon_speed: Toggle,
    pub(crate) speed_icon: String,
    pub(crate) speed_str: String,
    pub(crate) load: Toggle,
    pub(crate) icon_load: Toggle,
    pub(crate) load_icon: String,
    pub(crate) load_str: String,
    pub(crate) color: Color,
    pub(crate) end_msg: String,
    pub(crate) columns: usize,
}

impl ValidConfig {
    /// First iteration.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last iteration.
    pub fn stop(&self) -> i64 {
        self.stop
    }

    /// Terminal width the configuration was checked against.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Opening and closing bracket as they will be drawn.
    pub fn brackets(&self) -> (&str, &str) {
        (&self.brackets.0, &self.brackets.1)
    }

    /// Glyphs cycled by the animated timer icon.
    pub fn timer_icons(&self) -> &[String] {
        &self.timer_icons
    }
}

impl ProgressConfig {
    /// Validate against the current width of the terminal on stdout.
    ///
    /// The width is queried once, here. Resizing the terminal afterwards is
    /// not tracked.
    pub fn validate(&self) -> Result<ValidConfig> {
        self.validate_with_columns(terminal_columns())
    }

    /// Validate against a terminal that is `columns` wide.
    pub fn validate_with_columns(&self, columns: usize) -> Result<ValidConfig> {
        self.check_single_glyphs()?;
        let brackets = self.check_brackets()?;
        self.check_len_bar()?;
        self.check_bounds()?;

        let required = self.estimated_width();
        if required >= columns {
            return Err(Error::TerminalTooNarrow {
                required,
                available: columns,
            });
        }

        let brackets = match self.variant_bar {
            BarVariant::Static => brackets,
            BarVariant::Increasing | BarVariant::Decreasing => (" ".to_string(), String::new()),
        };

        let valid = ValidConfig {
            start: self.start,
            stop: self.stop,
            progress_bar: self.progress_bar,
            variant_bar: self.variant_bar,
            brackets,
            arrow: self.variant_arrow.trim().to_string(),
            space: self.variant_space.clone(),
            len_bar: self.len_bar,
            progress_str: self.progress_str.trim().to_string(),
            percent: self.percent,
            timer: self.timer,
            variant_timer: self.variant_timer,
            icon_timer: self.icon_timer,
            timer_icons: graphemes(self.variant_icon_timer.trim()),
            timer_str: self.timer_str.trim().to_string(),
            reverse_timer_str: self.reverse_timer_str.trim().to_string(),
            speed: self.speed,
            icon_speed: self.icon_speed,
            speed_icon: self.variant_icon_speed.trim().to_string(),
            speed_str: self.speed_str.trim().to_string(),
            load: self.load,
            icon_load: self.icon_load,
            load_icon: self.variant_icon_load.trim().to_string(),
            load_str: self.load_str.trim().to_string(),
            color: self.color,
            end_msg: self.end_msg.trim().to_string(),
            columns,
        };
        debug!(
            start = valid.start,
            stop = valid.stop,
            len_bar = valid.len_bar,
            required,
            columns,
            "Validated progress bar configuration"
        );
        Ok(valid)
    }

    /// Worst case width of a rendered line, in terminal columns.
    ///
    /// Sums every enabled element at its widest: the full bar track with the
    /// brackets it will be drawn with (or the progress label), a `100.0%`
    /// percent, an hour-long clock after the widest timer glyph, three-digit
    /// speed and load values and the padding written after every line.
    /// Labels and icons are measured trimmed, as they are drawn.
    pub fn estimated_width(&self) -> usize {
        let mut width = if self.progress_bar.is_shown() {
            let brackets = match (self.variant_bar, self.variant_brackets.trim()) {
                (BarVariant::Static, brackets) if !brackets.is_empty() => measure_text_width(brackets),
                _ => 1,
            };
            self.len_bar.saturating_sub(1) + brackets
        } else {
            measure_text_width(self.progress_str.trim())
        };
        width += PERCENT_FIELD.len();

        if self.timer.is_shown() {
            width += match self.icon_timer {
                TimerIcon::Animated => {
                    1 + self
                        .variant_icon_timer
                        .trim()
                        .graphemes(true)
                        .map(measure_text_width)
                        .max()
                        .unwrap_or(0)
                }
                TimerIcon::Static => 1 + measure_text_width(STATIC_TIMER_ICON),
                TimerIcon::Hide => 0,
            };
            width += measure_text_width(match self.variant_timer {
                TimerVariant::Increasing => self.timer_str.trim(),
                TimerVariant::Decreasing => self.reverse_timer_str.trim(),
            });
            width += CLOCK_FIELD.len();
        }

        if self.speed.is_shown() {
            if self.icon_speed.is_shown() {
                width += measure_text_width(self.variant_icon_speed.trim()) + 1;
            }
            width += measure_text_width(self.speed_str.trim()) + SPEED_FIELD.len();
        }

        if self.load.is_shown() {
            if self.icon_load.is_shown() {
                width += measure_text_width(self.variant_icon_load.trim()) + 1;
            }
            width += measure_text_width(self.load_str.trim()) + LOAD_FIELD.len();
        }

        width + measure_text_width(LINE_END.trim_end_matches('\x08'))
    }

    fn check_single_glyphs(&self) -> Result<()> {
        exactly_one_glyph("variant_arrow", self.variant_arrow.trim())?;
        exactly_one_glyph("variant_space", &self.variant_space)?;
        exactly_one_glyph("variant_icon_speed", self.variant_icon_speed.trim())?;
        exactly_one_glyph("variant_icon_load", self.variant_icon_load.trim())?;
        if self.variant_icon_timer.trim().is_empty() {
            return Err(Error::invalid(
                "variant_icon_timer",
                &self.variant_icon_timer,
                "a non-empty sequence of glyphs",
            ));
        }
        Ok(())
    }

    fn check_brackets(&self) -> Result<(String, String)> {
        let glyphs = graphemes(self.variant_brackets.trim());
        match glyphs.as_slice() {
            [] => Ok((" ".to_string(), String::new())),
            [open, close] => Ok((open.clone(), close.clone())),
            _ => Err(Error::invalid(
                "variant_brackets",
                &self.variant_brackets,
                format!("empty or exactly 2 characters long (got {})", glyphs.len()),
            )),
        }
    }

    fn check_len_bar(&self) -> Result<()> {
        if !LEN_BAR_RANGE.contains(&self.len_bar) {
            return Err(Error::invalid(
                "len_bar",
                self.len_bar,
                format!("between {} and {}", LEN_BAR_RANGE.start(), LEN_BAR_RANGE.end()),
            ));
        }
        Ok(())
    }

    fn check_bounds(&self) -> Result<()> {
        if self.start < 0 {
            return Err(Error::invalid("start", self.start, "a non-negative integer"));
        }
        if self.stop < 0 {
            return Err(Error::invalid("stop", self.stop, "a non-negative integer"));
        }
        if self.start > self.stop || self.stop == 0 {
            return Err(Error::InvalidBounds {
                start: self.start,
                stop: self.stop,
            });
        }
        Ok(())
    }
}

/// Columns of the terminal attached to stdout.
pub fn terminal_columns() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_, columns)| columns as usize)
        .unwrap_or(FALLBACK_COLUMNS)
}

fn graphemes(s: &str) -> Vec<String> {
    s.graphemes(true).map(str::to_string).collect()
}

fn exactly_one_glyph(field: &'static str, value: &str) -> Result<()> {
    let count = value.graphemes(true).count();
    if count != 1 {
        return Err(Error::invalid(
            field,
            value,
            format!("exactly 1 character long (got {count})"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: usize = 500;

    fn field_of(err: Error) -> &'static str {
        match err {
            Error::InvalidOption { field, .. } => field,
            other => panic!("expected an invalid option, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let valid = ProgressConfig::default().validate_with_columns(WIDE).unwrap();
        assert_eq!(valid.brackets(), ("|", "|"));
        assert_eq!(valid.timer_icons().len(), 24);
        assert_eq!(valid.columns(), WIDE);
    }

    #[test]
    fn test_single_glyph_fields() {
        let config = ProgressConfig {
            variant_arrow: " ## ".into(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate_with_columns(WIDE).unwrap_err()), "variant_arrow");

        let config = ProgressConfig {
            variant_arrow: "  #  ".into(),
            ..Default::default()
        };
        assert!(config.validate_with_columns(WIDE).is_ok());

        let config = ProgressConfig {
            variant_icon_load: "".into(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate_with_columns(WIDE).unwrap_err()), "variant_icon_load");
    }

    #[test]
    fn test_space_may_be_whitespace_but_single() {
        let config = ProgressConfig {
            variant_space: " ".into(),
            ..Default::default()
        };
        assert!(config.validate_with_columns(WIDE).is_ok());

        let config = ProgressConfig {
            variant_space: "  ".into(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate_with_columns(WIDE).unwrap_err()), "variant_space");
    }

    #[test]
    fn test_combining_sequence_counts_as_one_glyph() {
        let config = ProgressConfig {
            variant_arrow: "e\u{301}".into(),
            ..Default::default()
        };
        assert!(config.validate_with_columns(WIDE).is_ok());
    }

    #[test]
    fn test_brackets_length() {
        let config = ProgressConfig {
            variant_brackets: "[[]".into(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate_with_columns(WIDE).unwrap_err()), "variant_brackets");

        let config = ProgressConfig {
            variant_brackets: "   ".into(),
            ..Default::default()
        };
        let valid = config.validate_with_columns(WIDE).unwrap();
        assert_eq!(valid.brackets(), (" ", ""));
    }

    #[test]
    fn test_growing_variants_drop_brackets() {
        let config = ProgressConfig {
            variant_bar: BarVariant::Decreasing,
            variant_brackets: "[]".into(),
            ..Default::default()
        };
        let valid = config.validate_with_columns(WIDE).unwrap();
        assert_eq!(valid.brackets(), (" ", ""));
    }

    #[test]
    fn test_len_bar_bounds() {
        for len_bar in [9, 101, 5, 0] {
            let config = ProgressConfig {
                len_bar,
                ..Default::default()
            };
            assert_eq!(field_of(config.validate_with_columns(WIDE).unwrap_err()), "len_bar");
        }
        for len_bar in [10, 100] {
            let config = ProgressConfig {
                len_bar,
                ..Default::default()
            };
            assert!(config.validate_with_columns(WIDE).is_ok());
        }
    }

    #[test]
    fn test_negative_bounds() {
        let config = ProgressConfig {
            start: -1,
            ..Default::default()
        };
        assert_eq!(field_of(config.validate_with_columns(WIDE).unwrap_err()), "start");

        let config = ProgressConfig {
            stop: -10,
            ..Default::default()
        };
        assert_eq!(field_of(config.validate_with_columns(WIDE).unwrap_err()), "stop");
    }

    #[test]
    fn test_start_stop_ordering() {
        let config = ProgressConfig {
            start: 50,
            stop: 10,
            ..Default::default()
        };
        assert!(matches!(
            config.validate_with_columns(WIDE),
            Err(Error::InvalidBounds { start: 50, stop: 10 })
        ));

        let config = ProgressConfig {
            start: 0,
            stop: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate_with_columns(WIDE),
            Err(Error::InvalidBounds { .. })
        ));

        let config = ProgressConfig {
            start: 10,
            stop: 10,
            ..Default::default()
        };
        assert!(config.validate_with_columns(WIDE).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let config = ProgressConfig {
            variant_arrow: "##".into(),
            len_bar: 5,
            start: 50,
            stop: 10,
            ..Default::default()
        };
        assert_eq!(field_of(config.validate_with_columns(WIDE).unwrap_err()), "variant_arrow");
    }

    #[test]
    fn test_estimated_width_of_defaults() {
        // 34 track + 2 brackets + 8 percent, then " 🕛" + "Timer" + 13 clock, then 2 padding.
        assert_eq!(ProgressConfig::default().estimated_width(), 34 + 2 + 8 + 3 + 5 + 13 + 2);
    }

    #[test]
    fn test_estimated_width_counts_enabled_elements() {
        let config = ProgressConfig {
            progress_bar: Toggle::Hide,
            timer: Toggle::Hide,
            speed: Toggle::Show,
            icon_speed: Toggle::Hide,
            load: Toggle::Show,
            icon_load: Toggle::Hide,
            ..Default::default()
        };
        let expected = "Progress".len() + 8 + "Speed".len() + 13 + "Loaded".len() + 11 + 2;
        assert_eq!(config.estimated_width(), expected);
    }

    #[test]
    fn test_estimated_width_uses_widest_timer_glyph() {
        let narrow = ProgressConfig {
            variant_icon_timer: "ab".into(),
            ..Default::default()
        };
        let mixed = ProgressConfig {
            variant_icon_timer: "a🕛b".into(),
            ..Default::default()
        };
        let hidden = ProgressConfig {
            icon_timer: TimerIcon::Hide,
            ..Default::default()
        };
        assert_eq!(mixed.estimated_width(), narrow.estimated_width() + 1);
        assert_eq!(hidden.estimated_width(), narrow.estimated_width() - 2);
    }

    #[test]
    fn test_estimated_width_measures_drawn_values() {
        let plain = ProgressConfig::default();
        let padded = ProgressConfig {
            variant_brackets: "  ||  ".into(),
            timer_str: "  Timer  ".into(),
            ..Default::default()
        };
        assert_eq!(padded.estimated_width(), plain.estimated_width());

        let label = ProgressConfig {
            progress_bar: Toggle::Hide,
            progress_str: "  Done  ".into(),
            ..Default::default()
        };
        assert_eq!(label.estimated_width(), plain.estimated_width() - 36 + 4);

        // Growing variants draw a single leading space instead of brackets.
        let increasing = ProgressConfig {
            variant_bar: BarVariant::Increasing,
            variant_brackets: "<>".into(),
            ..Default::default()
        };
        assert_eq!(increasing.estimated_width(), plain.estimated_width() - 1);
    }

    #[test]
    fn test_terminal_too_narrow() {
        let config = ProgressConfig::default();
        let required = config.estimated_width();
        assert!(matches!(
            config.validate_with_columns(required),
            Err(Error::TerminalTooNarrow { available, .. }) if available == required
        ));
        assert!(config.validate_with_columns(required + 1).is_ok());
    }
}
