//! Builder pattern implementation for creating [`ProgressBar`] instances.
//!
//! [`ProgressBarBuilder`] starts from the default options and exposes one
//! chained setter per option. Nothing is checked until [`build`] runs the
//! validator, so a bar either gets every option it asked for or is not
//! created at all.
//!
//! # Examples
//!
//! ## Counting Iterations
//!
//! ```rust,no_run
//! use spb::config::{BarVariant, Color, ProgressBarBuilder};
//!
//! # fn main() -> spb::Result<()> {
//! let mut pb = ProgressBarBuilder::new()
//!     .stop(500_000)
//!     .len_bar(25)
//!     .variant_bar(BarVariant::Decreasing)
//!     .variant_space(" ")
//!     .color(Color::Yellow)
//!     .end_msg("Complete.")
//!     .build()?;
//!
//! for _ in pb.by_ref() {
//!     // your code ...
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Unknown Total
//!
//! ```rust,no_run
//! use spb::config::ProgressBarBuilder;
//!
//! # fn main() -> spb::Result<()> {
//! let mut pb = ProgressBarBuilder::unknown_total().build()?;
//! pb.loaded_bytes += 32_768;
//! pb.advance()?;
//! # Ok(())
//! # }
//! ```
//!
//! [`build`]: ProgressBarBuilder::build

use super::options::{BarVariant, Color, TimerIcon, TimerVariant, Toggle};
use super::{ProgressConfig, ValidConfig};
use crate::error::Result;
use crate::progress::{ProgressBar, StartTime};

use std::io::{Stdout, Write};

/// A builder used to create a [`ProgressBar`].
///
/// ```rust
/// use spb::config::ProgressBarBuilder;
///
/// let valid = ProgressBarBuilder::new().stop(10).len_bar(10).validate_with_columns(120);
/// assert!(valid.is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProgressBarBuilder {
    config: ProgressConfig,
}

macro_rules! setters {
    ($( $(#[$meta:meta])* $name:ident: $ty:ty ),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(mut self, $name: $ty) -> Self {
                self.config.$name = $name;
                self
            }
        )+
    };
}

macro_rules! text_setters {
    ($( $(#[$meta:meta])* $name:ident ),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(mut self, $name: impl Into<String>) -> Self {
                self.config.$name = $name.into();
                self
            }
        )+
    };
}

impl ProgressBarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProgressBarBuilder::default()
    }

    /// Start from an existing set of options.
    pub fn from_config(config: ProgressConfig) -> Self {
        Self { config }
    }

    /// Convenience preset for transfers whose size is unknown.
    ///
    /// Hides the bar, its label and the percent, and shows the speed and the
    /// transferred bytes instead.
    pub fn unknown_total() -> Self {
        ProgressBarBuilder::new()
            .progress_bar(Toggle::Hide)
            .progress_str("")
            .percent(Toggle::Hide)
            .speed(Toggle::Show)
            .load(Toggle::Show)
    }

    setters! {
        /// Set the first iteration.
        start: i64,
        /// Set the last iteration.
        stop: i64,
        /// Show or hide the bar.
        progress_bar: Toggle,
        /// Set how the bar is drawn.
        variant_bar: BarVariant,
        /// Set the bar length in columns.
        len_bar: usize,
        /// Show or hide the percent.
        percent: Toggle,
        /// Show or hide the timer.
        timer: Toggle,
        /// Count elapsed or remaining time.
        variant_timer: TimerVariant,
        /// Set the timer icon mode.
        icon_timer: TimerIcon,
        /// Show or hide the speed indicator.
        speed: Toggle,
        /// Show or hide the speed icon.
        icon_speed: Toggle,
        /// Show or hide the transferred bytes counter.
        load: Toggle,
        /// Show or hide the load icon.
        icon_load: Toggle,
        /// Set the color of the arrows and values.
        color: Color,
    }

    text_setters! {
        /// Set the bracket pair, or `""` for none.
        variant_brackets,
        /// Set the arrow glyph.
        variant_arrow,
        /// Set the glyph of the unfilled track.
        variant_space,
        /// Set the label shown in place of a hidden bar.
        progress_str,
        /// Set the glyph sequence of the animated timer icon.
        variant_icon_timer,
        /// Set the label of the elapsed timer.
        timer_str,
        /// Set the label of the remaining time estimate.
        reverse_timer_str,
        /// Set the speed icon.
        variant_icon_speed,
        /// Set the label of the speed indicator.
        speed_str,
        /// Set the load icon.
        variant_icon_load,
        /// Set the label of the load indicator.
        load_str,
        /// Set the message written on completion.
        end_msg,
    }

    /// The options collected so far.
    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    /// Consume the builder, returning the options without validating them.
    pub fn into_config(self) -> ProgressConfig {
        self.config
    }

    /// Validate against the terminal on stdout.
    pub fn validate(&self) -> Result<ValidConfig> {
        self.config.validate()
    }

    /// Validate against a terminal that is `columns` wide.
    pub fn validate_with_columns(&self, columns: usize) -> Result<ValidConfig> {
        self.config.validate_with_columns(columns)
    }

    /// Validate the options and create a [`ProgressBar`] writing to stdout.
    pub fn build(self) -> Result<ProgressBar<Stdout>> {
        ProgressBar::new(self.config)
    }

    /// Validate against `columns` and create a bar writing to `out`.
    pub fn build_with_writer<W: Write>(
        self,
        columns: usize,
        out: W,
        start_time: StartTime,
    ) -> Result<ProgressBar<W>> {
        ProgressBar::with_writer(self.config.validate_with_columns(columns)?, out, start_time)
    }
}
