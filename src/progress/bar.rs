//! The render engine.
//!
//! A [`ProgressBar`] owns the mutable progress state and rewrites a single
//! terminal line on every tick. Each frame is assembled in memory and written
//! with one call followed by a flush, so a partially drawn line is never
//! visible.
//!
//! # Examples
//!
//! ## Counting Iterations
//!
//! ```rust
//! use spb::{ProgressBarBuilder, StartTime};
//!
//! # fn main() -> spb::Result<()> {
//! let mut pb = ProgressBarBuilder::new()
//!     .stop(4)
//!     .len_bar(10)
//!     .build_with_writer(120, Vec::new(), StartTime::new())?;
//!
//! let seen: Vec<i64> = pb.by_ref().collect();
//! assert_eq!(seen, vec![1, 2, 3, 4]);
//! assert!(pb.is_finished());
//! # Ok(())
//! # }
//! ```
//!
//! ## Byte Oriented Progress
//!
//! ```rust,no_run
//! use spb::ProgressBarBuilder;
//!
//! # fn main() -> spb::Result<()> {
//! let mut pb = ProgressBarBuilder::new().speed(spb::Toggle::Show).load(spb::Toggle::Show).build()?;
//! for chunk in [4096u64, 4096, 1024] {
//!     pb.loaded_bytes += chunk;
//!     pb.render()?;
//! }
//! # Ok(())
//! # }
//! ```

use super::clock::StartTime;
use super::icon::IconCycle;
use crate::config::{BarVariant, ProgressConfig, TimerIcon, TimerVariant, ValidConfig};
use crate::error::Result;
use crate::utils::format::{
    arrow_count, format_clock, percent, remaining_seconds, share, HumanUnits, RESET,
    UNKNOWN_MAGNITUDE,
};

use std::fmt;
use std::io::{self, Stdout, Write};
use std::time::Instant;
use tracing::{debug, warn};

/// Hides the cursor, on a fresh line.
pub const HIDE_CURSOR: &str = "\n\x1b[?25l";
/// Makes the cursor visible again.
pub const SHOW_CURSOR: &str = "\x1b[?25h";
/// Glyph of the static timer icon.
pub const STATIC_TIMER_ICON: &str = "⏱";

// Clears the two columns after the line and steps back over the last one.
pub(crate) const LINE_END: &str = "  \x08";

/// In-place console progress indicator.
///
/// Created from a [`ValidConfig`], so every frame can be drawn without
/// re-checking options. Call [`advance`](ProgressBar::advance) once per unit
/// of work, or update [`loaded_bytes`](ProgressBar::loaded_bytes) and call
/// [`render`](ProgressBar::render).
pub struct ProgressBar<W: Write = Stdout> {
    config: ValidConfig,
    iteration: i64,
    /// Bytes transferred so far. The host adds to it; the bar never resets it.
    pub loaded_bytes: u64,
    start_time: StartTime,
    icon: Option<IconCycle>,
    out: W,
    cursor_hidden: bool,
}

impl ProgressBar<Stdout> {
    /// Validate `config` against the terminal and create a bar on stdout.
    ///
    /// Elapsed time is measured from [`StartTime::process`], shared by every
    /// bar created this way.
    pub fn new(config: ProgressConfig) -> Result<Self> {
        Self::with_writer(config.validate()?, io::stdout(), StartTime::process())
    }
}

impl<W: Write> ProgressBar<W> {
    /// Create a bar writing to `out` and timed from `start_time`.
    ///
    /// Fixes the start time if it is not set yet and hides the cursor.
    pub fn with_writer(config: ValidConfig, mut out: W, start_time: StartTime) -> Result<Self> {
        let now = Instant::now();
        start_time.get();

        let icon = match config.icon_timer {
            TimerIcon::Animated => IconCycle::new(config.timer_icons.clone(), config.variant_timer, now),
            TimerIcon::Static | TimerIcon::Hide => None,
        };

        out.write_all(HIDE_CURSOR.as_bytes())?;
        out.flush()?;
        debug!(start = config.start, stop = config.stop, "Created progress bar");

        Ok(Self {
            iteration: config.start,
            config,
            loaded_bytes: 0,
            start_time,
            icon,
            out,
            cursor_hidden: true,
        })
    }

    /// Move one step forward, redraw, and return the new iteration.
    ///
    /// Not bounded by `stop`: when the total is unknown the host keeps
    /// calling it for as long as there is work.
    pub fn advance(&mut self) -> Result<i64> {
        self.iteration += 1;
        self.render()?;
        Ok(self.iteration)
    }

    /// Redraw the line without moving forward.
    pub fn render(&mut self) -> Result<()> {
        let line = self.compose_line(Instant::now());
        self.out.write_all(line.as_bytes())?;

        if self.config.percent.is_shown() {
            if self.iteration == self.config.stop {
                self.out.write_all(b"\n")?;
                self.out.write_all(SHOW_CURSOR.as_bytes())?;
                self.out.write_all(self.config.end_msg.as_bytes())?;
                self.out.write_all(b"\n")?;
                if self.cursor_hidden {
                    debug!(stop = self.config.stop, "Progress bar completed");
                }
                self.cursor_hidden = false;
            }
        } else {
            // Without a known total there is no reliable last frame.
            self.out.write_all(SHOW_CURSOR.as_bytes())?;
            self.cursor_hidden = false;
        }

        self.out.flush()?;
        Ok(())
    }

    /// Jump to `iteration` without drawing. Call [`render`](Self::render) to show it.
    pub fn set_iteration(&mut self, iteration: i64) {
        self.iteration = iteration;
    }

    /// Add `bytes` to [`loaded_bytes`](Self::loaded_bytes).
    pub fn add_loaded_bytes(&mut self, bytes: u64) {
        self.loaded_bytes = self.loaded_bytes.saturating_add(bytes);
    }

    /// Current iteration.
    pub fn iteration(&self) -> i64 {
        self.iteration
    }

    /// Last iteration.
    pub fn stop(&self) -> i64 {
        self.config.stop
    }

    /// Whether the iteration has reached `stop`.
    pub fn is_finished(&self) -> bool {
        self.iteration >= self.config.stop
    }

    /// The validated options the bar was created with.
    pub fn config(&self) -> &ValidConfig {
        &self.config
    }

    /// A reference to the output stream.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn compose_line(&mut self, now: Instant) -> String {
        let elapsed = self.start_time.elapsed_at(now).as_secs_f64();
        let share = share(self.iteration, self.config.stop);
        let color = self.config.color.escape();

        let mut arrows = arrow_count(share, self.config.len_bar);
        let remaining = self.config.len_bar - arrows - 1;
        let spaces = match self.config.variant_bar {
            BarVariant::Static => remaining,
            BarVariant::Increasing => 0,
            BarVariant::Decreasing => {
                arrows = remaining;
                0
            }
        };
        let percent_value = percent(share, self.config.variant_bar);

        let mut progress = if self.config.percent.is_shown() {
            format!("{color}{percent_value:.1}{RESET}%")
        } else {
            String::new()
        };

        let bar = if self.config.progress_bar.is_shown() {
            let (open, close) = &self.config.brackets;
            format!(
                "{open}{color}{}{RESET}{}{close} ",
                self.config.arrow.repeat(arrows),
                self.config.space.repeat(spaces)
            )
        } else if !self.config.progress_str.is_empty() {
            progress = format!("{}{progress}", self.config.progress_str);
            " ".to_string()
        } else {
            progress.clear();
            String::new()
        };

        let mut line = String::with_capacity(256);
        line.push('\r');
        line.push_str(&bar);
        line.push_str(&progress);

        if self.config.timer.is_shown() {
            line.push_str(&self.timer_segment(now, share, elapsed, &color));
        }

        if self.config.speed.is_shown() {
            let rate = if elapsed > 0.0 {
                self.loaded_bytes as f64 / elapsed
            } else {
                0.0
            };
            if self.config.icon_speed.is_shown() {
                line.push_str(&format!(" {} ", self.config.speed_icon));
            } else {
                line.push(' ');
            }
            line.push_str(&format!(
                "{}[{}]",
                self.config.speed_str,
                colored_magnitude(rate, "B/s", &color)
            ));
        }

        if self.config.load.is_shown() {
            if self.config.icon_load.is_shown() {
                line.push_str(&format!(" {}", self.config.load_icon));
            } else {
                line.push(' ');
            }
            line.push_str(&format!(
                "{}[{}]",
                self.config.load_str,
                colored_magnitude(self.loaded_bytes as f64, "B", &color)
            ));
        }

        line.push_str(LINE_END);
        line
    }

    fn timer_segment(&mut self, now: Instant, share: f64, elapsed: f64, color: &str) -> String {
        let (seconds, label) = match self.config.variant_timer {
            TimerVariant::Decreasing => (
                remaining_seconds(share, self.config.stop, elapsed),
                &self.config.reverse_timer_str,
            ),
            TimerVariant::Increasing => (elapsed, &self.config.timer_str),
        };

        let icon = match (&mut self.icon, self.config.icon_timer) {
            (Some(cycle), _) => format!(" {}", cycle.tick(now)),
            (None, TimerIcon::Static) => format!(" {STATIC_TIMER_ICON}"),
            (None, _) => String::new(),
        };

        format!("{icon} {label}[{color}{}{RESET}]", format_clock(seconds))
    }
}

// A `u64` byte count stays below 1000^7, so only a speed measured over a few
// nanoseconds can fall back to the unknown marker.
fn colored_magnitude(value: f64, suffix: &str, color: &str) -> String {
    match HumanUnits::new(value).scaled() {
        Some((scaled, prefix)) => format!("{color}{scaled:6.2}{RESET}{prefix}{suffix}"),
        None => UNKNOWN_MAGNITUDE.to_string(),
    }
}

impl<W: Write> Iterator for ProgressBar<W> {
    type Item = i64;

    /// Advance and redraw, ending once `stop` has been reached.
    fn next(&mut self) -> Option<i64> {
        if self.is_finished() {
            return None;
        }
        match self.advance() {
            Ok(iteration) => Some(iteration),
            Err(e) => {
                warn!("Stopping progress bar iteration: {e}");
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.config.stop - self.iteration).max(0) as usize;
        (left, Some(left))
    }
}

impl<W: Write> Drop for ProgressBar<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = self.out.write_all(SHOW_CURSOR.as_bytes());
            let _ = self.out.flush();
        }
    }
}

impl<W: Write> fmt::Debug for ProgressBar<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("iteration", &self.iteration)
            .field("stop", &self.config.stop)
            .field("loaded_bytes", &self.loaded_bytes)
            .field("start_time", &self.start_time)
            .field("icon", &self.icon.as_ref().map(IconCycle::current))
            .field("cursor_hidden", &self.cursor_hidden)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colored_magnitude() {
        let blue = "\x1b[34m";
        assert_eq!(colored_magnitude(1_500.0, "B", blue), format!("{blue}  1.50{RESET}kB"));
        assert_eq!(colored_magnitude(0.0, "B/s", ""), format!("  0.00{RESET}B/s"));
    }

    #[test]
    fn test_largest_load_still_has_a_prefix() {
        assert_eq!(colored_magnitude(u64::MAX as f64, "B", ""), format!(" 18.45{RESET}EB"));
    }

    #[test]
    fn test_oversized_magnitude_uses_marker() {
        assert_eq!(colored_magnitude(1e27, "B/s", "\x1b[32m"), UNKNOWN_MAGNITUDE);
    }
}
